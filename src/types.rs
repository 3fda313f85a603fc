//! Wire types shared by the native client and the web UI.
//!
//! These mirror the JSON bodies of the print service:
//!
//! - **History**: [`HistoryEntry`] as returned by `GET /history`
//! - **Requests**: [`PrintRequest`], [`DeleteRequest`] and the multipart [`UploadRequest`]
//! - **Responses**: [`ActionResponse`] and [`ConvertResponse`]
//! - **UI state**: the active [`Filter`]

use std::fmt;

use serde::{Deserialize, Serialize};

/// MIME type accepted by the upload pipeline.
pub const PDF_MIME: &str = "application/pdf";

/// One uploaded (and converted) file as the backend remembers it.
///
/// `filename` is the server-assigned storage key and identifies the entry;
/// `original_name` is what the user uploaded.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct HistoryEntry {
    pub filename: String,
    #[serde(rename = "originalName")]
    pub original_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(default)]
    pub date: String,
    /// Not reliably populated by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl HistoryEntry {
    /// The grouping key, if the entry belongs to a named folder.
    ///
    /// Empty and whitespace-only folder values count as uncategorized.
    pub fn folder_name(&self) -> Option<&str> {
        match self.folder.as_deref() {
            Some(f) if !f.trim().is_empty() => Some(f),
            _ => None,
        }
    }
}

/// The active history filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Folder(String),
}

impl Filter {
    /// Sentinel used on the wire and in data attributes for [`Filter::All`].
    pub const ALL: &'static str = "all";

    pub fn key(&self) -> &str {
        match self {
            Filter::All => Self::ALL,
            Filter::Folder(name) => name,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Body of `POST /print`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PrintRequest {
    pub filename: String,
}

/// Body of `POST /delete`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum DeleteRequest {
    Folder { folder: String },
    All {
        #[serde(rename = "type")]
        kind: DeleteAllMarker,
    },
    File { filename: String },
}

impl DeleteRequest {
    pub fn all() -> Self {
        DeleteRequest::All { kind: DeleteAllMarker::All }
    }
}

/// Serializes as the literal `"all"`.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeleteAllMarker {
    All,
}

/// Response of `POST /print` and `POST /delete`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ActionResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Response of `POST /convert`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ConvertResponse {
    pub success: bool,
    #[serde(default, rename = "folderName", skip_serializing_if = "Option::is_none")]
    pub folder_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A file picked for upload, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn is_pdf(&self) -> bool {
        self.mime == PDF_MIME
    }
}

/// Multipart body of `POST /convert`: optional `folderName` field plus one `pdfs` part per file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub folder_name: Option<String>,
    pub files: Vec<UploadFile>,
}
