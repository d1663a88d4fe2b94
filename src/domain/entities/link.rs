//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A registered mapping between a short code and a long URL.
///
/// The long URL is stored verbatim: the registry imposes no format
/// constraints, so empty strings, non-URL text and unicode all survive the
/// round trip unchanged. Entries are never mutated after registration.
#[derive(Debug, Clone, Serialize)]
pub struct Link {
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(code: String, long_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            code,
            long_url,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            "abc123".to_string(),
            "https://example.com".to_string(),
            now,
        );

        assert_eq!(link.code, "abc123");
        assert_eq!(link.long_url, "https://example.com");
        assert_eq!(link.created_at, now);
    }

    #[test]
    fn test_link_stores_url_verbatim() {
        let link = Link::new(
            "xyz789".to_string(),
            "  not a url, ユニコード".to_string(),
            Utc::now(),
        );

        assert_eq!(link.long_url, "  not a url, ユニコード");
    }

    #[test]
    fn test_link_serializes_to_json() {
        let link = Link::new(
            "abc123".to_string(),
            "https://example.com".to_string(),
            Utc::now(),
        );

        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(json["code"], "abc123");
        assert_eq!(json["long_url"], "https://example.com");
        assert!(json["created_at"].is_string());
    }
}
