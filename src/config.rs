//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The backend origin is read at compile time from `BUCKETVIEW_API_ORIGIN`.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name, used as the page title before a bucket is chosen.
pub const APP_NAME: &str = "bucketview";

// =============================================================================
// Backend Configuration
// =============================================================================

/// Origin of the storage REST backend. Empty means same origin.
pub const API_ORIGIN: &str = match option_env!("BUCKETVIEW_API_ORIGIN") {
    Some(origin) => origin,
    None => "",
};

/// Backend endpoint paths.
pub mod endpoints {
    pub const LIST: &str = "/api/list/";
    pub const UPLOAD: &str = "/api/upload/";
    pub const DELETE: &str = "/api/delete/";
    pub const MOVE: &str = "/api/move/";
    pub const COPY: &str = "/api/copy/";
    pub const RENAME: &str = "/api/rename/";
    pub const PREVIEW: &str = "/api/preview/";
    pub const SHARE: &str = "/api/share/";
}

/// Full URL for a backend endpoint path.
pub fn api_url(path: &str) -> String {
    format!("{}{}", API_ORIGIN, path)
}

/// Share link lifetime used by the "share" action (one year, in seconds).
pub const SHARE_EXPIRE_SECS: u64 = 365 * 86_400;

// =============================================================================
// URL Query Configuration
// =============================================================================

/// Length of the leading dummy query parameter name (all underscores).
///
/// It is always serialized first so the parameter order stays stable across
/// writes.
pub const DUMMY_PARAM_LEN: usize = 200;

/// Query parameter names.
pub mod query_keys {
    pub const KEY: &str = "key";
    pub const SECRET: &str = "secret";
    pub const ENDPOINT: &str = "endpoint";
    pub const BUCKET: &str = "bucket";
    pub const PATH: &str = "path";
}

// =============================================================================
// Preferences Configuration
// =============================================================================

/// Preference field names inside the per-bucket localStorage JSON object.
pub mod pref_keys {
    pub const FAVORITES: &str = "favorites";
    pub const SHOW_FAVORITE: &str = "showFavorite";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// How long a notification stays on screen, in milliseconds.
pub const NOTIFICATION_DURATION_MS: u32 = 3_000;

/// Longer lifetime for notifications that carry a URL or command to read.
pub const NOTIFICATION_LONG_DURATION_MS: u32 = 8_000;

/// Below this width the favorites panel stacks above the listing.
pub const NARROW_LAYOUT_QUERY: &str = "(max-width: 768px)";

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_origin() {
        assert!(api_url(endpoints::LIST).ends_with("/api/list/"));
        assert_eq!(SHARE_EXPIRE_SECS, 31_536_000);
    }
}
