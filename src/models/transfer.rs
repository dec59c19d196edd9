//! State of the move/copy and rename dialogs.

use crate::config::endpoints;
use crate::core::path::basename;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferMode {
    Move,
    Copy,
}

impl TransferMode {
    /// Backend endpoint path for this mode.
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Move => endpoints::MOVE,
            Self::Copy => endpoints::COPY,
        }
    }

    pub fn verb(self) -> &'static str {
        match self {
            Self::Move => "Move",
            Self::Copy => "Copy",
        }
    }
}

/// An open move/copy dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferRequest {
    pub mode: TransferMode,
    pub source_keys: Vec<String>,
    /// Directory the sources were selected from; the picker starts here.
    pub source_dir: String,
    /// Directory chosen in the picker, `None` until the user navigates.
    pub target_dir: Option<String>,
    /// Optional new name, only honored for a single source.
    pub rename: Option<String>,
    pub loading: bool,
}

impl TransferRequest {
    pub fn new(mode: TransferMode, source_keys: Vec<String>, source_dir: impl Into<String>) -> Self {
        Self {
            mode,
            source_keys,
            source_dir: source_dir.into(),
            target_dir: None,
            rename: None,
            loading: false,
        }
    }

    /// Whether the rename input applies (exactly one source).
    pub fn can_rename(&self) -> bool {
        self.source_keys.len() == 1
    }

    /// Dialog heading, e.g. "Move directory photos/ to" or "Copy 3 items to".
    pub fn title(&self) -> String {
        match self.source_keys.as_slice() {
            [single] => {
                let kind = if single.ends_with('/') { "directory" } else { "file" };
                format!("{} {} {} to", self.mode.verb(), kind, basename(single))
            }
            many => format!("{} {} items to", self.mode.verb(), many.len()),
        }
    }

    /// Placeholder for the rename input: the first source's base name.
    pub fn rename_placeholder(&self) -> String {
        self.source_keys
            .first()
            .map(|k| basename(k))
            .unwrap_or_default()
    }
}

/// An open rename dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenameRequest {
    pub file_key: String,
    /// Current display name (directories keep the trailing `/`).
    pub name: String,
    pub new_name: String,
    pub loading: bool,
}

impl RenameRequest {
    pub fn new(file_key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            file_key: file_key.into(),
            name: name.into(),
            new_name: String::new(),
            loading: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles() {
        let t = TransferRequest::new(TransferMode::Move, vec!["a/photos/".into()], "a/");
        assert_eq!(t.title(), "Move directory photos/ to");

        let t = TransferRequest::new(TransferMode::Copy, vec!["a/x.txt".into()], "a/");
        assert_eq!(t.title(), "Copy file x.txt to");

        let t = TransferRequest::new(
            TransferMode::Copy,
            vec!["a/x.txt".into(), "a/y/".into(), "a/z".into()],
            "a/",
        );
        assert_eq!(t.title(), "Copy 3 items to");
        assert!(!t.can_rename());
    }

    #[test]
    fn test_rename_placeholder() {
        let t = TransferRequest::new(TransferMode::Move, vec!["a/b/c.png".into()], "a/b/");
        assert_eq!(t.rename_placeholder(), "c.png");
    }

    #[test]
    fn test_mode_endpoints() {
        assert_eq!(TransferMode::Move.endpoint(), "/api/move/");
        assert_eq!(TransferMode::Copy.endpoint(), "/api/copy/");
    }
}
