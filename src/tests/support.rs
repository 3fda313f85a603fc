//! Test doubles shared by the test modules.

use std::cell::{Cell, RefCell};
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;

use crate::backend::Backend;
use crate::error::{ClientError, ClientResult};
use crate::prompt::Prompt;
use crate::tasks::Pause;
use crate::types::{ActionResponse, ConvertResponse, DeleteRequest, HistoryEntry, UploadFile, UploadRequest};

pub fn entry(filename: &str, folder: Option<&str>) -> HistoryEntry {
    HistoryEntry {
        filename: filename.to_string(),
        original_name: format!("{}.pdf", filename),
        folder: folder.map(str::to_string),
        date: "2024-03-01T12:30:00Z".to_string(),
        size: Some(1536),
    }
}

pub fn pdf(name: &str) -> UploadFile {
    UploadFile { name: name.to_string(), mime: crate::types::PDF_MIME.to_string(), bytes: b"%PDF-1.4".to_vec() }
}

/// Everything the scripted backend saw, pauses included, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    History,
    Print(String),
    Delete(DeleteRequest),
    Convert { folder: Option<String>, files: usize },
    Pause(Duration),
}

/// In-memory print service.
///
/// Deletes and uploads change its entry list, so reloads after a mutation see
/// the new state just like against the real service.
#[derive(Default)]
pub struct MockBackend {
    pub log: Rc<RefCell<Vec<Call>>>,
    pub entries: RefCell<Vec<HistoryEntry>>,
    /// `GET /history` fails with a transport error.
    pub history_down: Cell<bool>,
    /// `GET /history` answers with something that is not a history.
    pub history_garbled: Cell<bool>,
    /// Prints of these filenames come back with `success: false`.
    pub rejected_prints: RefCell<HashSet<String>>,
    /// Prints of these filenames fail in transport.
    pub unreachable_prints: RefCell<HashSet<String>>,
    /// Error message for rejected deletes; `None` accepts them.
    pub delete_error: RefCell<Option<String>>,
    pub delete_unreachable: Cell<bool>,
    /// Folder the service reports after a conversion.
    pub convert_folder: RefCell<Option<String>>,
    pub convert_error: RefCell<Option<String>>,
    pub convert_unreachable: Cell<bool>,
}

impl MockBackend {
    pub fn with_entries(entries: Vec<HistoryEntry>) -> Self {
        let backend = Self::default();
        *backend.entries.borrow_mut() = entries;
        backend
    }

    pub fn pauser(&self) -> RecordingPause {
        RecordingPause { log: self.log.clone() }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.log.borrow().clone()
    }

    /// Calls other than history reloads and pauses.
    pub fn mutations(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| !matches!(c, Call::History | Call::Pause(_)))
            .collect()
    }

    pub fn printed(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Print(f) => Some(f),
                _ => None,
            })
            .collect()
    }
}

#[async_trait(?Send)]
impl Backend for MockBackend {
    async fn history(&self) -> ClientResult<Vec<HistoryEntry>> {
        self.log.borrow_mut().push(Call::History);
        if self.history_down.get() {
            return Err(ClientError::Network("connection refused".to_string()));
        }
        if self.history_garbled.get() {
            return Err(serde_json::from_str::<Vec<HistoryEntry>>("{\"oops\":1}").unwrap_err().into());
        }
        Ok(self.entries.borrow().clone())
    }

    async fn print(&self, filename: &str) -> ClientResult<ActionResponse> {
        self.log.borrow_mut().push(Call::Print(filename.to_string()));
        if self.unreachable_prints.borrow().contains(filename) {
            return Err(ClientError::Network("connection reset".to_string()));
        }
        if self.rejected_prints.borrow().contains(filename) {
            return Ok(ActionResponse { success: false, error: Some("printer offline".to_string()) });
        }
        Ok(ActionResponse { success: true, error: None })
    }

    async fn delete(&self, request: &DeleteRequest) -> ClientResult<ActionResponse> {
        self.log.borrow_mut().push(Call::Delete(request.clone()));
        if self.delete_unreachable.get() {
            return Err(ClientError::Network("timeout".to_string()));
        }
        if let Some(error) = self.delete_error.borrow().clone() {
            return Ok(ActionResponse { success: false, error: Some(error) });
        }
        let mut entries = self.entries.borrow_mut();
        match request {
            DeleteRequest::Folder { folder } => entries.retain(|e| e.folder.as_deref() != Some(folder.as_str())),
            DeleteRequest::All { .. } => entries.clear(),
            DeleteRequest::File { filename } => entries.retain(|e| &e.filename != filename),
        }
        Ok(ActionResponse { success: true, error: None })
    }

    async fn convert(&self, upload: &UploadRequest) -> ClientResult<ConvertResponse> {
        self.log.borrow_mut().push(Call::Convert { folder: upload.folder_name.clone(), files: upload.files.len() });
        if self.convert_unreachable.get() {
            return Err(ClientError::Network("connection refused".to_string()));
        }
        if let Some(error) = self.convert_error.borrow().clone() {
            return Ok(ConvertResponse { success: false, folder_name: None, error: Some(error) });
        }
        let folder = self.convert_folder.borrow().clone();
        let mut entries = self.entries.borrow_mut();
        for file in &upload.files {
            entries.push(HistoryEntry {
                filename: format!("stored-{}", file.name),
                original_name: file.name.clone(),
                folder: folder.clone(),
                date: "2024-03-02T08:00:00Z".to_string(),
                size: Some(file.bytes.len() as u64),
            });
        }
        Ok(ConvertResponse { success: true, folder_name: folder, error: None })
    }
}

/// Records pauses into the backend's call log instead of sleeping.
pub struct RecordingPause {
    log: Rc<RefCell<Vec<Call>>>,
}

#[async_trait(?Send)]
impl Pause for RecordingPause {
    async fn pause(&self, duration: Duration) {
        self.log.borrow_mut().push(Call::Pause(duration));
    }
}

/// Answers confirmations from a script, then with `fallback`.
pub struct ScriptedPrompt {
    answers: RefCell<VecDeque<bool>>,
    fallback: bool,
    pub confirms: RefCell<Vec<String>>,
    pub alerts: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn yes() -> Self {
        Self::answering(Vec::new(), true)
    }

    pub fn no() -> Self {
        Self::answering(Vec::new(), false)
    }

    pub fn answering(answers: Vec<bool>, fallback: bool) -> Self {
        Self {
            answers: RefCell::new(answers.into()),
            fallback,
            confirms: RefCell::new(Vec::new()),
            alerts: RefCell::new(Vec::new()),
        }
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.borrow().clone()
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.answers.borrow_mut().pop_front().unwrap_or(self.fallback)
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}
