//! Native HTTP backend built on reqwest.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::backend::Backend;
use crate::config::BackendConfig;
use crate::error::{ClientError, ClientResult};
use crate::types::{ActionResponse, ConvertResponse, DeleteRequest, HistoryEntry, PrintRequest, UploadRequest};

const USER_AGENT: &str = concat!("printdock/", env!("CARGO_PKG_VERSION"));

/// Talks to the print service over HTTP.
///
/// The body of every response is decoded as JSON whatever the status code: the
/// service reports failures as `{ success: false, error }`.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    config: BackendConfig,
}

impl HttpBackend {
    pub fn new(config: BackendConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ClientError::Network(format!("failed to create HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }

    fn with_headers(&self, req: RequestBuilder) -> RequestBuilder {
        match self.config.tunnel_header() {
            Some((name, value)) => req.header(name, value),
            None => req,
        }
    }

    fn history_url(&self) -> String {
        let url = self.config.url("/history");
        if self.config.cache_bust {
            format!("{}?t={}", url, chrono::Utc::now().timestamp_millis())
        } else {
            url
        }
    }

    async fn send_json<T: DeserializeOwned>(&self, req: RequestBuilder) -> ClientResult<T> {
        let resp = self.with_headers(req).send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            ClientError::Decode(format!("HTTP {}: {}", status.as_u16(), e))
        })
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn history(&self) -> ClientResult<Vec<HistoryEntry>> {
        self.send_json(self.client.get(self.history_url())).await
    }

    async fn print(&self, filename: &str) -> ClientResult<ActionResponse> {
        let body = PrintRequest { filename: filename.to_string() };
        self.send_json(self.client.post(self.config.url("/print")).json(&body)).await
    }

    async fn delete(&self, request: &DeleteRequest) -> ClientResult<ActionResponse> {
        self.send_json(self.client.post(self.config.url("/delete")).json(request)).await
    }

    async fn convert(&self, upload: &UploadRequest) -> ClientResult<ConvertResponse> {
        let mut form = Form::new();
        if let Some(folder) = &upload.folder_name {
            form = form.text("folderName", folder.clone());
        }
        for file in &upload.files {
            let part = Part::bytes(file.bytes.clone())
                .file_name(file.name.clone())
                .mime_str(&file.mime)
                .map_err(|e| ClientError::InvalidInput(format!("bad MIME type {}: {}", file.mime, e)))?;
            form = form.part("pdfs", part);
        }
        self.send_json(self.client.post(self.config.url("/convert")).multipart(form)).await
    }
}

/// Reads local files for upload, guessing the MIME type from the extension.
pub fn read_upload_files<P: AsRef<std::path::Path>>(paths: &[P]) -> ClientResult<Vec<crate::types::UploadFile>> {
    paths
        .iter()
        .map(|p| {
            let path = p.as_ref();
            let bytes = std::fs::read(path)?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            let mime = mime_guess::from_path(path).first_or_octet_stream().essence_str().to_string();
            Ok(crate::types::UploadFile { name, mime, bytes })
        })
        .collect()
}
