//! Reading the order-group identifier from the page URL.

/// Query-string key carrying the order-group identifier.
pub const ORDER_GROUP_PARAM: &str = "og";

/// Extracts the `og` value from a raw `location.search` string.
///
/// Same rules as `URLSearchParams.get`: the leading `?` is optional, the first
/// occurrence wins and `?og=` yields an empty string. A pair that cannot be
/// percent-decoded is skipped; no validation is done on the value itself.
pub fn order_group_from_search(search: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            Some((decode_component(key)?, decode_component(value)?))
        })
        .find(|(key, _)| key == ORDER_GROUP_PARAM)
        .map(|(_, value)| value)
}

// `+` means space in form-encoded query strings.
fn decode_component(raw: &str) -> Option<String> {
    urlencoding::decode(&raw.replace('+', " "))
        .ok()
        .map(|decoded| decoded.into_owned())
}

/// Order-group identifier of the current page, if any.
pub fn current_order_group() -> Option<String> {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    order_group_from_search(&search)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_order_group() {
        assert_eq!(order_group_from_search("?og=abc123"), Some("abc123".to_string()));
        assert_eq!(order_group_from_search("og=abc123"), Some("abc123".to_string()));
    }

    #[test]
    fn test_ignores_other_keys() {
        assert_eq!(
            order_group_from_search("?utm_source=mail&og=1045&lang=pt"),
            Some("1045".to_string())
        );
    }

    #[test]
    fn test_absent_key() {
        assert_eq!(order_group_from_search(""), None);
        assert_eq!(order_group_from_search("?"), None);
        assert_eq!(order_group_from_search("?orderGroup=abc"), None);
        assert_eq!(order_group_from_search("?og2=abc&xog=1"), None);
    }

    #[test]
    fn test_repeated_key_takes_first_value() {
        assert_eq!(order_group_from_search("?og=abc&og=def"), Some("abc".to_string()));
    }

    #[test]
    fn test_empty_value_is_kept() {
        assert_eq!(order_group_from_search("?og="), Some(String::new()));
        assert_eq!(order_group_from_search("?og"), Some(String::new()));
        assert_eq!(order_group_from_search("?og=&og=abc"), Some(String::new()));
    }

    #[test]
    fn test_percent_and_plus_decoding() {
        assert_eq!(order_group_from_search("?og=a%2Fb"), Some("a/b".to_string()));
        assert_eq!(order_group_from_search("?og=a+b"), Some("a b".to_string()));
        assert_eq!(order_group_from_search("?%6Fg=abc"), Some("abc".to_string()));
    }
}
