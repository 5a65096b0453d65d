//! Currency of the order group being displayed.
//!
//! The content view scopes one `CurrencyCode` to its subtree with
//! [`CurrencyProvider`]; components below read it with [`use_currency`]. The value
//! lives as long as the provider's owner, so it disappears together with the
//! content view. Anything rendered outside a provider sees [`DEFAULT_CURRENCY`].

use leptos::context::Provider;
use leptos::prelude::*;
use std::fmt;

/// Currency used when no provider is active.
pub const DEFAULT_CURRENCY: &str = "BRL";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display symbol, falling back to the ISO code itself.
    pub fn symbol(&self) -> &str {
        match self.0.as_str() {
            "BRL" => "R$",
            "USD" => "US$",
            "EUR" => "€",
            "GBP" => "£",
            other => other,
        }
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self(DEFAULT_CURRENCY.to_string())
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Exposes `code` to every descendant of the current owner.
pub fn provide_currency(code: CurrencyCode) {
    provide_context(code);
}

/// Currency of the enclosing provider, or the default outside one.
pub fn use_currency() -> CurrencyCode {
    use_context::<CurrencyCode>().unwrap_or_default()
}

/// Scopes `code` to `children` through a dedicated child owner.
#[component]
pub fn CurrencyProvider(code: CurrencyCode, children: Children) -> impl IntoView {
    view! { <Provider value=code>{children()}</Provider> }
}

/// Formats an amount given in minor units (cents).
///
/// ```rust,ignore
/// assert_eq!(format_price(123456, &CurrencyCode::new("BRL")), "R$ 1 234.56");
/// ```
pub fn format_price(cents: i64, currency: &CurrencyCode) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!(
        "{} {}{}.{:02}",
        currency.symbol(),
        sign,
        group_thousands(abs / 100),
        abs % 100
    )
}

// Space as thousands separator, same as the rest of the UI tables.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(' ');
        }
        result.push(c);
    }
    result
}
