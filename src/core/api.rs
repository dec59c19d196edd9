//! Client for the object-storage REST backend.
//!
//! Every call is a single `POST` with the bucket credentials as headers.
//! Failures are returned as [`ApiError`]; callers decide how to surface them.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::{SHARE_EXPIRE_SECS, api_url, endpoints};
use crate::core::error::ApiError;
use crate::models::api::{
    DeleteRequest, ErrorDetail, ListRequest, ListResponse, PreviewRequest, RenameBody,
    ShareRequest, ShareResponse, TransferBody,
};
use crate::models::{Credentials, TransferMode};

/// Raw object bytes returned by the preview endpoint.
#[derive(Clone, Debug)]
pub struct PreviewBody {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

/// Backend client bound to one credential set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageApi {
    credentials: Credentials,
}

impl StorageApi {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.credentials
            .headers()
            .into_iter()
            .fold(Request::post(&api_url(path)), |req, (name, value)| {
                req.header(name, value)
            })
    }

    async fn send_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Response, ApiError> {
        let response = self.post(path).json(body)?.send().await?;
        check_status(response).await
    }

    async fn call<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self.send_json(path, body).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    pub async fn list(&self, req: &ListRequest) -> Result<ListResponse, ApiError> {
        self.call(endpoints::LIST, req).await
    }

    pub async fn delete(&self, req: &DeleteRequest) -> Result<(), ApiError> {
        self.send_json(endpoints::DELETE, req).await.map(drop)
    }

    pub async fn transfer(&self, mode: TransferMode, body: &TransferBody) -> Result<(), ApiError> {
        self.send_json(mode.endpoint(), body).await.map(drop)
    }

    pub async fn rename(&self, body: &RenameBody) -> Result<(), ApiError> {
        self.send_json(endpoints::RENAME, body).await.map(drop)
    }

    /// Signed URL for `file_key`; `expire` in seconds, backend default if unset.
    pub async fn share_url(&self, file_key: &str, expire: Option<u64>) -> Result<String, ApiError> {
        let req = ShareRequest {
            file_key: file_key.to_string(),
            expire,
        };
        let rsp: ShareResponse = self.call(endpoints::SHARE, &req).await?;
        Ok(rsp.share_url)
    }

    /// Long-lived link for sharing.
    pub async fn long_share_url(&self, file_key: &str) -> Result<String, ApiError> {
        self.share_url(file_key, Some(SHARE_EXPIRE_SECS)).await
    }

    /// Object bytes for preview.
    ///
    /// Error bodies are decoded as text, since the endpoint may answer with
    /// a plain message instead of JSON.
    pub async fn preview(&self, file_key: &str) -> Result<PreviewBody, ApiError> {
        let req = PreviewRequest {
            file_key: file_key.to_string(),
        };
        let response = self.post(endpoints::PREVIEW).json(&req)?.send().await?;
        let content_type = response.headers().get("content-type");
        let bytes = response
            .binary()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Backend {
                status: response.status(),
                detail: text_detail(&bytes),
            });
        }
        Ok(PreviewBody {
            bytes,
            content_type,
        })
    }

    /// Upload one browser file into `dir` as a multipart form.
    pub async fn upload(&self, dir: &str, file: &web_sys::File) -> Result<(), ApiError> {
        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::RequestCreationFailed("FormData unavailable".into()))?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|_| ApiError::RequestCreationFailed("cannot attach file".into()))?;
        form.append_with_str("path", dir)
            .map_err(|_| ApiError::RequestCreationFailed("cannot attach path".into()))?;

        let response = self.post(endpoints::UPLOAD).body(form)?.send().await?;
        check_status(response).await.map(drop)
    }
}

/// Turn non-2xx responses into [`ApiError::Backend`], keeping the detail.
async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let detail = match response.text().await {
        Ok(body) => json_detail(&body),
        Err(_) => None,
    };
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(
        &format!("{} failed: HTTP {} {:?}", response.url(), status, detail).into(),
    );
    Err(ApiError::Backend { status, detail })
}

/// Extract `detail` from a JSON error body.
fn json_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorDetail>(body)
        .ok()
        .and_then(|d| d.message())
}

/// Decode a binary error body as text for display.
fn text_detail(bytes: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(bytes).trim().to_string();
    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_detail() {
        assert_eq!(
            json_detail(r#"{"detail":"NoSuchKey"}"#).as_deref(),
            Some("NoSuchKey")
        );
        assert_eq!(json_detail("Internal Server Error"), None);
        assert_eq!(json_detail(r#"{"error":"x"}"#), None);
    }

    #[test]
    fn test_text_detail() {
        assert_eq!(text_detail(b"object too large\n").as_deref(), Some("object too large"));
        assert_eq!(text_detail(b"  "), None);
        assert!(text_detail(&[0xff, b'a']).unwrap().ends_with('a'));
    }
}
