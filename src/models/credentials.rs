//! Object-storage credentials carried in the page URL.

use serde::{Deserialize, Serialize};

use crate::core::error::CredentialsError;

/// The four-field access tuple for one bucket.
///
/// Either all four fields are known (authenticated) or the UI shows the
/// login form. Changing any field replaces the whole value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub key: String,
    pub secret: String,
    pub endpoint: String,
    pub bucket: String,
}

impl Credentials {
    /// Header pairs sent with every backend request.
    pub fn headers(&self) -> [(&'static str, &str); 4] {
        [
            ("key", self.key.as_str()),
            ("secret", self.secret.as_str()),
            ("endpoint", self.endpoint.as_str()),
            ("bucket", self.bucket.as_str()),
        ]
    }

    /// localStorage key under which this bucket's preferences are kept.
    pub fn storage_key(&self) -> String {
        format!("{}-{}", self.bucket, self.endpoint)
    }

    /// Equivalent `ossutil` listing command for the given directory.
    pub fn ossutil_command(&self, path: &str) -> String {
        format!(
            "ossutil -i {} -k {} -e {} ls oss://{}/{}",
            self.key, self.secret, self.endpoint, self.bucket, path
        )
    }
}

/// Credentials as read from the URL, each field possibly missing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PartialCredentials {
    pub key: Option<String>,
    pub secret: Option<String>,
    pub endpoint: Option<String>,
    pub bucket: Option<String>,
}

impl PartialCredentials {
    /// Returns the full credential set, or an error naming the first gap.
    pub fn complete(&self) -> Result<Credentials, CredentialsError> {
        let field = |value: &Option<String>, name: &'static str| {
            value.clone().ok_or(CredentialsError::Incomplete(name))
        };
        Ok(Credentials {
            key: field(&self.key, "key")?,
            secret: field(&self.secret, "secret")?,
            endpoint: field(&self.endpoint, "endpoint")?,
            bucket: field(&self.bucket, "bucket")?,
        })
    }
}

impl From<Credentials> for PartialCredentials {
    fn from(c: Credentials) -> Self {
        Self {
            key: Some(c.key),
            secret: Some(c.secret),
            endpoint: Some(c.endpoint),
            bucket: Some(c.bucket),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Credentials {
        Credentials {
            key: "AK".into(),
            secret: "SK".into(),
            endpoint: "oss-cn-hangzhou.aliyuncs.com".into(),
            bucket: "photos".into(),
        }
    }

    #[test]
    fn test_complete_requires_all_fields() {
        let mut partial = PartialCredentials::from(sample());
        assert_eq!(partial.complete(), Ok(sample()));

        partial.endpoint = None;
        assert_eq!(
            partial.complete(),
            Err(CredentialsError::Incomplete("endpoint"))
        );
    }

    #[test]
    fn test_storage_key() {
        assert_eq!(sample().storage_key(), "photos-oss-cn-hangzhou.aliyuncs.com");
    }

    #[test]
    fn test_ossutil_command() {
        assert_eq!(
            sample().ossutil_command("a/b/"),
            "ossutil -i AK -k SK -e oss-cn-hangzhou.aliyuncs.com ls oss://photos/a/b/"
        );
    }
}
