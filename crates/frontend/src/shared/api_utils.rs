//! API utilities for talking to the storefront GraphQL endpoint
//!
//! The page is served from the store domain, so the API lives on the same origin.

/// Get the base URL for API requests
///
/// # Returns
/// - Origin of the current page like "https://store.example.com"
/// - Empty string if window is not available (relative URLs are used then)
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/graphql");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("https://store.example.com", "/graphql"),
            "https://store.example.com/graphql"
        );
        assert_eq!(
            join_url("https://store.example.com/", "graphql"),
            "https://store.example.com/graphql"
        );
        assert_eq!(join_url("", "/graphql"), "/graphql");
    }
}
