use crate::error::{ClientError, ClientResult};
use crate::types::{UploadFile, UploadRequest};

pub const NO_FILE_STATUS: &str = "No file chosen";
pub const CONVERT_LABEL: &str = "Upload & Convert";
pub const BUSY_LABEL: &str = "Processing...";
pub const NOT_PDF_MESSAGE: &str = "Please select PDF files.";

/// State of the drop zone, folder input and convert button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadState {
    files: Vec<UploadFile>,
    pub folder_input: String,
    busy: bool,
}

impl UploadState {
    pub fn files(&self) -> &[UploadFile] {
        &self.files
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Takes a dropped or picked batch, keeping only PDFs.
    ///
    /// If nothing is left the previous selection stays and
    /// [`ClientError::InvalidInput`] is returned. Returns the number of accepted files.
    pub fn accept(&mut self, files: Vec<UploadFile>) -> ClientResult<usize> {
        let pdfs: Vec<UploadFile> = files.into_iter().filter(UploadFile::is_pdf).collect();
        if pdfs.is_empty() {
            return Err(ClientError::InvalidInput(NOT_PDF_MESSAGE.to_string()));
        }
        self.files = pdfs;
        Ok(self.files.len())
    }

    pub fn status_text(&self) -> String {
        if self.files.is_empty() {
            NO_FILE_STATUS.to_string()
        } else {
            format!("{} file(s) ready", self.files.len())
        }
    }

    pub fn can_convert(&self) -> bool {
        !self.busy && !self.files.is_empty()
    }

    pub fn button_label(&self) -> &'static str {
        if self.busy {
            BUSY_LABEL
        } else {
            CONVERT_LABEL
        }
    }

    /// Builds the request and marks the pipeline busy. `None` if there is nothing to send.
    pub fn begin(&mut self) -> Option<UploadRequest> {
        if !self.can_convert() {
            return None;
        }
        self.busy = true;
        let folder = self.folder_input.trim();
        Some(UploadRequest {
            folder_name: (!folder.is_empty()).then(|| folder.to_string()),
            files: self.files.clone(),
        })
    }

    /// Success clears files and folder input.
    pub fn finish(&mut self, success: bool) {
        self.busy = false;
        if success {
            self.files.clear();
            self.folder_input.clear();
        }
    }
}
