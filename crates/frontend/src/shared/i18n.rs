//! Message catalog for the confirmation page.
//!
//! Strings are looked up by key in the active locale, then in English, and the key
//! itself is returned when nothing matches. Placeholders use `{name}` syntax.

use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Locale {
    #[default]
    En,
    Pt,
    Es,
}

impl Locale {
    /// Parses a BCP 47 tag such as `pt-BR`. Unsupported languages map to English.
    pub fn from_tag(tag: &str) -> Self {
        let lang = tag
            .split(|c| c == '-' || c == '_')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "pt" => Locale::Pt,
            "es" => Locale::Es,
            _ => Locale::En,
        }
    }

    /// Locale of the browser, or the default when unavailable.
    pub fn detect() -> Self {
        web_sys::window()
            .and_then(|w| w.navigator().language())
            .map(|tag| Self::from_tag(&tag))
            .unwrap_or_default()
    }
}

fn catalog(locale: Locale, key: &str) -> Option<&'static str> {
    let text = match (locale, key) {
        (Locale::En, "page.title") => "Order placed",
        (Locale::En, "order.loading") => "Loading your order...",
        (Locale::En, "order.not-logged-in") => "You need to be logged in to see this order.",
        (Locale::En, "order.invalid") => "We couldn't find this order.",
        (Locale::En, "header.thanks") => "Thank you for your purchase, {name}!",
        (Locale::En, "header.thanks-anonymous") => "Thank you for your purchase!",
        (Locale::En, "header.email-notice") => "A confirmation was sent to {email}.",
        (Locale::En, "header.in-store-notice") => "Please go to the cashier to complete your payment.",
        (Locale::En, "header.order-group") => "Purchase #{id}",
        (Locale::En, "header.orders-count.one") => "Your purchase was placed as 1 order.",
        (Locale::En, "header.orders-count.other") => "Your purchase was split into {count} orders.",
        (Locale::En, "order.heading") => "Order",
        (Locale::En, "order.heading-of") => "Order {index} of {total}",
        (Locale::En, "order.number") => "Order #{id}",
        (Locale::En, "order.placed-on") => "Placed on {date}",
        (Locale::En, "order.items") => "Items",
        (Locale::En, "order.quantity") => "Qty: {quantity}",
        (Locale::En, "order.total") => "Total",

        (Locale::Pt, "page.title") => "Pedido realizado",
        (Locale::Pt, "order.loading") => "Carregando seu pedido...",
        (Locale::Pt, "order.not-logged-in") => "Você precisa estar logado para ver este pedido.",
        (Locale::Pt, "order.invalid") => "Não encontramos este pedido.",
        (Locale::Pt, "header.thanks") => "Obrigado pela sua compra, {name}!",
        (Locale::Pt, "header.thanks-anonymous") => "Obrigado pela sua compra!",
        (Locale::Pt, "header.email-notice") => "Uma confirmação foi enviada para {email}.",
        (Locale::Pt, "header.in-store-notice") => "Dirija-se ao caixa para concluir o pagamento.",
        (Locale::Pt, "header.order-group") => "Compra #{id}",
        (Locale::Pt, "header.orders-count.one") => "Sua compra gerou 1 pedido.",
        (Locale::Pt, "header.orders-count.other") => "Sua compra foi dividida em {count} pedidos.",
        (Locale::Pt, "order.heading") => "Pedido",
        (Locale::Pt, "order.heading-of") => "Pedido {index} de {total}",
        (Locale::Pt, "order.number") => "Pedido #{id}",
        (Locale::Pt, "order.placed-on") => "Realizado em {date}",
        (Locale::Pt, "order.items") => "Itens",
        (Locale::Pt, "order.quantity") => "Qtd: {quantity}",
        (Locale::Pt, "order.total") => "Total",

        (Locale::Es, "page.title") => "Pedido realizado",
        (Locale::Es, "order.loading") => "Cargando su pedido...",
        (Locale::Es, "order.not-logged-in") => "Debe iniciar sesión para ver este pedido.",
        (Locale::Es, "order.invalid") => "No encontramos este pedido.",
        (Locale::Es, "header.thanks") => "¡Gracias por su compra, {name}!",
        (Locale::Es, "header.thanks-anonymous") => "¡Gracias por su compra!",
        (Locale::Es, "header.email-notice") => "Enviamos una confirmación a {email}.",
        (Locale::Es, "header.orders-count.one") => "Su compra generó 1 pedido.",
        (Locale::Es, "header.orders-count.other") => "Su compra se dividió en {count} pedidos.",
        (Locale::Es, "order.heading") => "Pedido",
        (Locale::Es, "order.heading-of") => "Pedido {index} de {total}",
        (Locale::Es, "order.number") => "Pedido #{id}",
        (Locale::Es, "order.placed-on") => "Realizado el {date}",
        (Locale::Es, "order.items") => "Artículos",
        (Locale::Es, "order.quantity") => "Cant.: {quantity}",
        _ => return None,
    };
    Some(text)
}

/// Localized string for `key`.
pub fn message(locale: Locale, key: &str) -> String {
    catalog(locale, key)
        .or_else(|| catalog(Locale::En, key))
        .unwrap_or(key)
        .to_string()
}

/// Localized string for `key` with `{placeholder}`s replaced from `args`.
pub fn format_message(locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
    args.iter()
        .fold(message(locale, key), |text, (name, value)| {
            text.replace(&format!("{{{}}}", name), value)
        })
}

/// Picks the `.one` or `.other` variant of `key` for `count`.
pub fn plural_message(locale: Locale, key: &str, count: usize) -> String {
    let variant = if count == 1 { "one" } else { "other" };
    let count = count.to_string();
    format_message(locale, &format!("{}.{}", key, variant), &[("count", count.as_str())])
}

pub fn provide_locale(locale: Locale) {
    provide_context(locale);
}

pub fn use_locale() -> Locale {
    use_context::<Locale>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_tag() {
        assert_eq!(Locale::from_tag("pt-BR"), Locale::Pt);
        assert_eq!(Locale::from_tag("es_AR"), Locale::Es);
        assert_eq!(Locale::from_tag("EN-us"), Locale::En);
        assert_eq!(Locale::from_tag("de-DE"), Locale::En);
        assert_eq!(Locale::from_tag(""), Locale::En);
    }

    #[test]
    fn test_message_lookup() {
        assert_eq!(message(Locale::En, "page.title"), "Order placed");
        assert_eq!(message(Locale::Pt, "page.title"), "Pedido realizado");
    }

    #[test]
    fn test_message_falls_back_to_english_then_key() {
        assert_eq!(
            message(Locale::Es, "header.in-store-notice"),
            "Please go to the cashier to complete your payment."
        );
        assert_eq!(message(Locale::Pt, "unknown.key"), "unknown.key");
    }

    #[test]
    fn test_format_message() {
        assert_eq!(
            format_message(Locale::En, "order.heading-of", &[("index", "2"), ("total", "3")]),
            "Order 2 of 3"
        );
    }

    #[test]
    fn test_plural_message() {
        assert_eq!(
            plural_message(Locale::En, "header.orders-count", 1),
            "Your purchase was placed as 1 order."
        );
        assert_eq!(
            plural_message(Locale::Pt, "header.orders-count", 3),
            "Sua compra foi dividida em 3 pedidos."
        );
    }

    #[test]
    fn test_use_locale_default() {
        let owner = Owner::new();
        owner.with(|| {
            assert_eq!(use_locale(), Locale::En);
            provide_locale(Locale::Pt);
            assert_eq!(use_locale(), Locale::Pt);
        });
    }
}
