//! Request and response bodies exchanged with the storage backend.

use serde::{Deserialize, Serialize};

use super::Entry;

/// `POST /api/list/`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ListRequest {
    pub path: String,
    /// `None` lets the backend pick its page size; `Some(0)` means no limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Directories only (picker mode).
    pub dir: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ListResponse {
    pub files: Vec<Entry>,
    pub parent: String,
    #[serde(default)]
    pub has_more: bool,
}

/// `POST /api/delete/`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeleteRequest {
    pub src_keys: Vec<String>,
}

/// `POST /api/move/` and `POST /api/copy/`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TransferBody {
    pub src_keys: Vec<String>,
    pub target_dir: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rename: Option<String>,
}

/// `POST /api/rename/`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenameBody {
    pub file_key: String,
    pub new_name: String,
}

/// `POST /api/preview/`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PreviewRequest {
    pub file_key: String,
}

/// `POST /api/share/`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ShareRequest {
    pub file_key: String,
    /// Seconds; omitted to use the backend default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ShareResponse {
    pub share_url: String,
}

/// Error body the backend attaches to failed requests.
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorDetail {
    pub detail: serde_json::Value,
}

impl ErrorDetail {
    /// The detail as display text; structured details are shown as JSON.
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) if s.is_empty() => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_request_limit_omitted_when_unset() {
        let req = ListRequest {
            path: "a/".into(),
            limit: None,
            dir: false,
        };
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({"path": "a/", "dir": false}));

        let req = ListRequest {
            limit: Some(0),
            ..req
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"path": "a/", "limit": 0, "dir": false})
        );
    }

    #[test]
    fn test_transfer_body_omits_missing_rename() {
        let body = TransferBody {
            src_keys: vec!["a".into(), "b".into()],
            target_dir: "c/".into(),
            rename: None,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"src_keys": ["a", "b"], "target_dir": "c/"})
        );
    }

    #[test]
    fn test_list_response_parses() {
        let rsp: ListResponse = serde_json::from_value(json!({
            "files": [{"name": "x", "key": "a/x", "size": 3, "last_modified": 1700000000}],
            "parent": "",
            "has_more": true
        }))
        .unwrap();
        assert_eq!(rsp.files.len(), 1);
        assert!(rsp.has_more);
    }

    #[test]
    fn test_error_detail_message() {
        let d: ErrorDetail = serde_json::from_value(json!({"detail": "bucket not found"})).unwrap();
        assert_eq!(d.message().as_deref(), Some("bucket not found"));

        let d: ErrorDetail = serde_json::from_value(json!({"detail": [{"loc": ["body"]}]})).unwrap();
        assert!(d.message().unwrap().contains("loc"));
    }
}
