//! Client-side checks for mutating operations.
//!
//! Each function turns dialog state into a request body, or a
//! [`ValidationError`] when the request must not be sent.

use crate::core::error::ValidationError;
use crate::models::api::{DeleteRequest, RenameBody, TransferBody};
use crate::models::{RenameRequest, TransferRequest};

/// Validate a move/copy dialog.
///
/// - A rename is only honored for a single source.
/// - A directory's new name may contain `/` only as its last character.
/// - A file's new name may not contain `/`.
/// - Moving or copying into the source directory without a rename is a
///   no-op and is refused.
pub fn validate_transfer(req: &TransferRequest) -> Result<TransferBody, ValidationError> {
    if req.source_keys.is_empty() {
        return Err(ValidationError::EmptySelection);
    }

    let rename = req
        .rename
        .as_deref()
        .filter(|r| !r.is_empty() && req.can_rename());

    let target_dir = req.target_dir.as_deref().unwrap_or(&req.source_dir);
    if target_dir == req.source_dir && rename.is_none() {
        return Err(ValidationError::SameDirectory);
    }

    if let (Some(rename), [source]) = (rename, req.source_keys.as_slice())
        && rename.contains('/')
    {
        if !source.ends_with('/') {
            return Err(ValidationError::SlashInFileName);
        }
        if rename.find('/') != Some(rename.len() - 1) {
            return Err(ValidationError::SlashInDirectoryName);
        }
    }

    Ok(TransferBody {
        src_keys: req.source_keys.clone(),
        target_dir: target_dir.to_string(),
        rename: rename.map(str::to_string),
    })
}

/// Validate a rename dialog: the new name must differ and be non-empty.
pub fn validate_rename(req: &RenameRequest) -> Result<RenameBody, ValidationError> {
    if req.new_name == req.name {
        return Err(ValidationError::SameName);
    }
    if req.new_name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(RenameBody {
        file_key: req.file_key.clone(),
        new_name: req.new_name.clone(),
    })
}

/// Batch delete needs at least one selected key.
pub fn validate_delete(keys: Vec<String>) -> Result<DeleteRequest, ValidationError> {
    if keys.is_empty() {
        return Err(ValidationError::EmptySelection);
    }
    Ok(DeleteRequest { src_keys: keys })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransferMode;

    fn transfer(keys: &[&str], source_dir: &str) -> TransferRequest {
        TransferRequest::new(
            TransferMode::Move,
            keys.iter().map(|k| k.to_string()).collect(),
            source_dir,
        )
    }

    #[test]
    fn test_same_directory_without_rename_is_refused() {
        let req = transfer(&["a/x.txt"], "a/");
        assert_eq!(validate_transfer(&req), Err(ValidationError::SameDirectory));

        let req = TransferRequest {
            target_dir: Some("a/".into()),
            ..req
        };
        assert_eq!(validate_transfer(&req), Err(ValidationError::SameDirectory));
    }

    #[test]
    fn test_same_directory_with_rename_is_allowed() {
        let req = TransferRequest {
            rename: Some("y.txt".into()),
            ..transfer(&["a/x.txt"], "a/")
        };
        let body = validate_transfer(&req).unwrap();
        assert_eq!(body.target_dir, "a/");
        assert_eq!(body.rename.as_deref(), Some("y.txt"));
    }

    #[test]
    fn test_move_to_root() {
        let req = TransferRequest {
            target_dir: Some(String::new()),
            ..transfer(&["a/x.txt"], "a/")
        };
        let body = validate_transfer(&req).unwrap();
        assert_eq!(body.target_dir, "");
        assert_eq!(body.rename, None);
    }

    #[test]
    fn test_file_rename_with_slash_is_refused() {
        let req = TransferRequest {
            target_dir: Some("b/".into()),
            rename: Some("c/d.txt".into()),
            ..transfer(&["a/x.txt"], "a/")
        };
        assert_eq!(validate_transfer(&req), Err(ValidationError::SlashInFileName));
    }

    #[test]
    fn test_directory_rename_slash_only_at_end() {
        let base = TransferRequest {
            target_dir: Some("b/".into()),
            ..transfer(&["a/dir/"], "a/")
        };

        let ok = TransferRequest {
            rename: Some("new/".into()),
            ..base.clone()
        };
        assert_eq!(validate_transfer(&ok).unwrap().rename.as_deref(), Some("new/"));

        let bad = TransferRequest {
            rename: Some("ne/w".into()),
            ..base.clone()
        };
        assert_eq!(validate_transfer(&bad), Err(ValidationError::SlashInDirectoryName));

        let bad = TransferRequest {
            rename: Some("n/e/".into()),
            ..base
        };
        assert_eq!(validate_transfer(&bad), Err(ValidationError::SlashInDirectoryName));
    }

    #[test]
    fn test_rename_ignored_for_multiple_sources() {
        let req = TransferRequest {
            target_dir: Some("b/".into()),
            rename: Some("bad/name".into()),
            ..transfer(&["a/x", "a/y"], "a/")
        };
        let body = validate_transfer(&req).unwrap();
        assert_eq!(body.rename, None);
        assert_eq!(body.src_keys.len(), 2);

        // Without a usable rename, same-directory is a no-op.
        let req = TransferRequest {
            target_dir: None,
            ..req
        };
        assert_eq!(validate_transfer(&req), Err(ValidationError::SameDirectory));
    }

    #[test]
    fn test_rename_validation() {
        let mut req = RenameRequest::new("a/x.txt", "x.txt");
        assert_eq!(validate_rename(&req), Err(ValidationError::EmptyName));

        req.new_name = "x.txt".into();
        assert_eq!(validate_rename(&req), Err(ValidationError::SameName));

        req.new_name = "y.txt".into();
        assert_eq!(
            validate_rename(&req),
            Ok(RenameBody {
                file_key: "a/x.txt".into(),
                new_name: "y.txt".into()
            })
        );
    }

    #[test]
    fn test_delete_requires_selection() {
        assert_eq!(validate_delete(vec![]), Err(ValidationError::EmptySelection));
        assert_eq!(validate_delete(vec!["k".into()]).unwrap().src_keys, vec!["k"]);
    }
}
