//! The contract of the remote print service.
//!
//! Implemented natively by [`crate::client::HttpBackend`] and in the browser by the
//! web UI's fetch-based backend. Futures are not required to be `Send`: the web UI
//! runs everything on the single browser thread.

use async_trait::async_trait;

use crate::error::{ClientError, ClientResult};
use crate::types::{ActionResponse, ConvertResponse, DeleteRequest, HistoryEntry, UploadRequest};

#[async_trait(?Send)]
pub trait Backend {
    /// `GET /history`
    async fn history(&self) -> ClientResult<Vec<HistoryEntry>>;

    /// `POST /print` with `{ filename }`.
    async fn print(&self, filename: &str) -> ClientResult<ActionResponse>;

    /// `POST /delete` with one of the three delete bodies.
    async fn delete(&self, request: &DeleteRequest) -> ClientResult<ActionResponse>;

    /// `POST /convert` as multipart form.
    async fn convert(&self, upload: &UploadRequest) -> ClientResult<ConvertResponse>;
}

/// Turns an application-level `success: false` into [`ClientError::Rejected`].
pub fn ensure_success(resp: ActionResponse) -> ClientResult<()> {
    if resp.success {
        Ok(())
    } else {
        Err(ClientError::rejected(resp.error))
    }
}
