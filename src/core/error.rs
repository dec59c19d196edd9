//! Custom error types for the application.
//!
//! Provides structured error handling for each domain:
//!
//! - [`CredentialsError`] - Credential set used before it is complete
//! - [`ApiError`] - Storage backend request failures
//! - [`ValidationError`] - Client-side checks that block a request
//! - [`StorageError`] - localStorage operations for preferences

use thiserror::Error;

/// Generic text shown when the backend fails without a usable detail.
pub const GENERIC_BACKEND_ERROR: &str = "The storage backend reported an unknown error";

/// Credentials read from the URL are missing a field.
///
/// Only reachable through a programming error: components that need
/// credentials are mounted after the login gate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialsError {
    #[error("incomplete oss info: missing `{0}`")]
    Incomplete(&'static str),
}

/// Storage backend request errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Failed to build the request (body encoding, headers)
    #[error("Failed to create request: {0}")]
    RequestCreationFailed(String),
    /// Request never produced a response (CORS, offline, DNS)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Non-2xx response, with the backend's `detail` when it sent one
    #[error("HTTP error {status}")]
    Backend { status: u16, detail: Option<String> },
    /// Response body could not be read or decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Text for the error notification.
    ///
    /// Backend failures prefer the server's detail; everything else falls
    /// back to the generic message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Backend {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => GENERIC_BACKEND_ERROR.to_string(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::JsError(js) => Self::NetworkError(js.message),
            gloo_net::Error::SerdeError(e) => Self::InvalidResponse(e.to_string()),
            gloo_net::Error::GlooError(msg) => Self::RequestCreationFailed(msg),
        }
    }
}

/// Client-side validation failures. Nothing is sent when one occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Nothing selected")]
    EmptySelection,
    #[error("The new name is the same as the current name")]
    SameName,
    #[error("The new name must not be empty")]
    EmptyName,
    #[error("Invalid name: `/` may only appear at the end of a directory name")]
    SlashInDirectoryName,
    #[error("Invalid name: `/` cannot be used in a file name")]
    SlashInFileName,
    #[error("Source and target are the same directory")]
    SameDirectory,
    #[error("The bucket root cannot be a favorite")]
    FavoriteRoot,
}

impl ValidationError {
    /// Whether the notification is a warning rather than an error.
    pub fn is_warning(self) -> bool {
        matches!(
            self,
            Self::EmptySelection | Self::EmptyName | Self::SameDirectory
        )
    }
}

/// Preference persistence errors for localStorage operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// localStorage not available.
    #[error("localStorage not available")]
    StorageUnavailable,
    /// Failed to serialize preferences to JSON.
    #[error("failed to serialize preferences")]
    SerializationFailed,
    /// Failed to save to localStorage.
    #[error("failed to save to localStorage")]
    SaveFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_backend_detail() {
        let e = ApiError::Backend {
            status: 404,
            detail: Some("NoSuchBucket".into()),
        };
        assert_eq!(e.user_message(), "NoSuchBucket");

        let e = ApiError::Backend {
            status: 500,
            detail: None,
        };
        assert_eq!(e.user_message(), GENERIC_BACKEND_ERROR);
        assert_eq!(
            ApiError::NetworkError("offline".into()).user_message(),
            GENERIC_BACKEND_ERROR
        );
    }

    #[test]
    fn test_warning_classification() {
        assert!(ValidationError::SameDirectory.is_warning());
        assert!(ValidationError::EmptyName.is_warning());
        assert!(!ValidationError::SameName.is_warning());
        assert!(!ValidationError::SlashInFileName.is_warning());
    }
}
