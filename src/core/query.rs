//! URL query string as the store for credentials and the current path.
//!
//! Every write goes through [`NavigationQuery::to_search`], which drops empty
//! fields (clearing a field removes it from the URL) and puts the dummy
//! ordering parameter first.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::config::{DUMMY_PARAM_LEN, query_keys};
use crate::models::{Credentials, PartialCredentials};

/// Characters left unescaped in query components, matching
/// `URLSearchParams` serialization.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'*');

/// Credentials and path as carried in the page URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationQuery {
    pub credentials: PartialCredentials,
    /// Current directory, `""` for the bucket root.
    pub path: String,
}

fn decode_component(raw: &str) -> String {
    let spaced: Cow<str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, QUERY_COMPONENT)
        .to_string()
        .replace("%20", "+")
}

/// Treat empty strings as absent, the way the URL drops them.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl NavigationQuery {
    /// Parse a `location.search` string (with or without the leading `?`).
    ///
    /// Unknown parameters, including the dummy one, are ignored. When a key
    /// repeats, the first occurrence wins.
    pub fn parse(search: &str) -> Self {
        let mut query = Self::default();
        let mut path = None;

        for pair in search.trim_start_matches('?').split('&') {
            if pair.is_empty() {
                continue;
            }
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            let name = decode_component(name);
            let slot = match name.as_str() {
                query_keys::KEY => &mut query.credentials.key,
                query_keys::SECRET => &mut query.credentials.secret,
                query_keys::ENDPOINT => &mut query.credentials.endpoint,
                query_keys::BUCKET => &mut query.credentials.bucket,
                query_keys::PATH => &mut path,
                _ => continue,
            };
            if slot.is_none() {
                *slot = non_empty(Some(decode_component(value)));
            }
        }

        query.path = path.unwrap_or_default();
        query
    }

    /// Serialize for `history.pushState`, leading `?` included.
    pub fn to_search(&self) -> String {
        let c = &self.credentials;
        let fields = [
            (query_keys::KEY, c.key.as_deref()),
            (query_keys::SECRET, c.secret.as_deref()),
            (query_keys::ENDPOINT, c.endpoint.as_deref()),
            (query_keys::BUCKET, c.bucket.as_deref()),
            (query_keys::PATH, Some(self.path.as_str())),
        ];

        let mut out = format!("?{}=", "_".repeat(DUMMY_PARAM_LEN));
        for (name, value) in fields {
            let Some(value) = value.filter(|v| !v.is_empty()) else {
                continue;
            };
            out.push('&');
            out.push_str(name);
            out.push('=');
            out.push_str(&encode_component(value));
        }
        out
    }

    /// Replace all four credentials, keeping the path.
    pub fn with_credentials(&self, credentials: Credentials) -> Self {
        Self {
            credentials: credentials.into(),
            path: self.path.clone(),
        }
    }

    /// Replace the path, keeping the credentials.
    pub fn with_path(&self, path: impl Into<String>) -> Self {
        Self {
            credentials: self.credentials.clone(),
            path: path.into(),
        }
    }

    /// Page title to apply after a write: the bucket name, when known.
    pub fn title(&self) -> Option<&str> {
        self.credentials.bucket.as_deref().filter(|b| !b.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> Credentials {
        Credentials {
            key: "AK".into(),
            secret: "s/k+=".into(),
            endpoint: "oss-cn-beijing.aliyuncs.com".into(),
            bucket: "logs".into(),
        }
    }

    #[test]
    fn test_parse_reads_fields() {
        let q = NavigationQuery::parse("?key=AK&secret=s%2Fk%2B%3D&bucket=logs&path=a%20b/");
        assert_eq!(q.credentials.key.as_deref(), Some("AK"));
        assert_eq!(q.credentials.secret.as_deref(), Some("s/k+="));
        assert_eq!(q.credentials.endpoint, None);
        assert_eq!(q.credentials.bucket.as_deref(), Some("logs"));
        assert_eq!(q.path, "a b/");
    }

    #[test]
    fn test_parse_treats_empty_as_missing() {
        let q = NavigationQuery::parse("key=&path=");
        assert_eq!(q.credentials.key, None);
        assert_eq!(q.path, "");
        assert_eq!(NavigationQuery::parse(""), NavigationQuery::default());
    }

    #[test]
    fn test_to_search_puts_dummy_first_and_drops_empty() {
        let q = NavigationQuery {
            credentials: PartialCredentials {
                key: Some("AK".into()),
                secret: Some(String::new()),
                endpoint: None,
                bucket: Some("logs".into()),
            },
            path: String::new(),
        };
        let search = q.to_search();
        let dummy = format!("?{}=", "_".repeat(DUMMY_PARAM_LEN));
        assert!(search.starts_with(&dummy));
        assert_eq!(&search[dummy.len()..], "&key=AK&bucket=logs");
    }

    #[test]
    fn test_round_trip_with_special_characters() {
        let q = NavigationQuery::default()
            .with_credentials(creds())
            .with_path("报表/2024 Q1/");
        assert_eq!(NavigationQuery::parse(&q.to_search()), q);
    }

    #[test]
    fn test_setters_preserve_other_half() {
        let q = NavigationQuery::default().with_path("a/");
        let q = q.with_credentials(creds());
        assert_eq!(q.path, "a/");
        let q = q.with_path("b/");
        assert_eq!(q.credentials.complete(), Ok(creds()));
        assert_eq!(q.title(), Some("logs"));
    }
}
