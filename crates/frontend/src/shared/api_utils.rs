//! API utilities for talking to the remote categories service
//!
//! Provides helper functions for constructing API URLs. The base itself
//! comes from `AppConfig` in context.

/// Join a base and a path with exactly one slash between them
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("https://api.escuelajs.co/api/v1", "/categories"),
            "https://api.escuelajs.co/api/v1/categories"
        );
        assert_eq!(join_url("http://h/v1/", "categories/3"), "http://h/v1/categories/3");
        assert_eq!(join_url("http://h/v1/", ""), "http://h/v1");
    }

    #[test]
    fn test_join_keeps_trailing_slash_of_path() {
        assert_eq!(join_url("http://h/v1", "/categories/"), "http://h/v1/categories/");
    }
}
