use async_trait::async_trait;
use reqwasm::http::{Request, Response};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

use printdock::backend::Backend;
use printdock::config::BackendConfig;
use printdock::error::{ClientError, ClientResult};
use printdock::types::{ActionResponse, ConvertResponse, DeleteRequest, HistoryEntry, PrintRequest, UploadRequest};

/// fetch-based backend for the browser.
#[derive(Debug, Clone)]
pub struct WebBackend {
    config: BackendConfig,
}

impl WebBackend {
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }

    fn with_headers(&self, req: Request) -> Request {
        match self.config.tunnel_header() {
            Some((name, value)) => req.header(name, value),
            None => req,
        }
    }

    fn history_url(&self) -> String {
        let url = self.config.url("/history");
        if self.config.cache_bust {
            format!("{}?t={}", url, js_sys::Date::now() as u64)
        } else {
            url
        }
    }

    async fn send_json<T: DeserializeOwned>(&self, req: Request) -> ClientResult<T> {
        let resp: Response = self.with_headers(req).send().await.map_err(map_net)?;
        let status = resp.status();
        let text = resp.text().await.map_err(map_net)?;
        serde_json::from_str(&text).map_err(|e| ClientError::Decode(format!("HTTP {}: {}", status, e)))
    }

    fn post_json<B: serde::Serialize>(&self, path: &str, body: &B) -> ClientResult<Request> {
        let body = serde_json::to_string(body)?;
        Ok(Request::post(&self.config.url(path))
            .header("Content-Type", "application/json")
            .body(body))
    }
}

#[async_trait(?Send)]
impl Backend for WebBackend {
    async fn history(&self) -> ClientResult<Vec<HistoryEntry>> {
        self.send_json(Request::get(&self.history_url())).await
    }

    async fn print(&self, filename: &str) -> ClientResult<ActionResponse> {
        let req = self.post_json("/print", &PrintRequest { filename: filename.to_string() })?;
        self.send_json(req).await
    }

    async fn delete(&self, request: &DeleteRequest) -> ClientResult<ActionResponse> {
        let req = self.post_json("/delete", request)?;
        self.send_json(req).await
    }

    async fn convert(&self, upload: &UploadRequest) -> ClientResult<ConvertResponse> {
        let form = FormData::new().map_err(map_js)?;
        if let Some(folder) = &upload.folder_name {
            form.append_with_str("folderName", folder).map_err(map_js)?;
        }
        for file in &upload.files {
            let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(file.bytes.as_slice()));
            let opts = BlobPropertyBag::new();
            opts.set_type(&file.mime);
            let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts).map_err(map_js)?;
            form.append_with_blob_and_filename("pdfs", &blob, &file.name).map_err(map_js)?;
        }
        // no Content-Type: the browser sets the multipart boundary itself
        self.send_json(Request::post(&self.config.url("/convert")).body(form)).await
    }
}

fn map_net(e: reqwasm::Error) -> ClientError {
    ClientError::Network(e.to_string())
}

fn map_js(e: JsValue) -> ClientError {
    ClientError::InvalidInput(format!("{:?}", e))
}
