//! Values handed to the page by the hosting environment.

use crate::shared::i18n::Locale;

/// Attribute on `<body>` telling the page it runs on an in-store terminal.
const IN_STORE_ATTRIBUTE: &str = "data-in-store";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HostEnvironment {
    pub in_store: bool,
    pub locale: Locale,
}

impl HostEnvironment {
    pub fn detect() -> Self {
        let in_store_attr = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .and_then(|b| b.get_attribute(IN_STORE_ATTRIBUTE));

        Self {
            in_store: parse_flag(in_store_attr.as_deref()),
            locale: Locale::detect(),
        }
    }
}

fn parse_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("true" | "1" | "")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag(Some("true")));
        assert!(parse_flag(Some("TRUE ")));
        assert!(parse_flag(Some("1")));
        // bare `<body data-in-store>`
        assert!(parse_flag(Some("")));
        assert!(!parse_flag(Some("false")));
        assert!(!parse_flag(Some("0")));
        assert!(!parse_flag(None));
    }
}
