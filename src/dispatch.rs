//! Turns user actions into requests against the print service.
//!
//! Every button of the page maps to one [`Action`]. Local ones only touch
//! [`AppState`]; the rest are executed by [`ActionDispatcher`], which asks for
//! confirmation where the page does, talks to the [`Backend`], reports through the
//! [`Prompt`] and reloads the history after successful mutations.

use crate::backend::{ensure_success, Backend};
use crate::config::UiConfig;
use crate::error::{ClientError, ClientResult, ErrorKind};
use crate::prompt::Prompt;
use crate::state::AppState;
use crate::store::HistoryStore;
use crate::tasks::{run_ordered, BatchReport, Pause};
use crate::types::{DeleteRequest, Filter, UploadRequest};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectFilter(Filter),
    ToggleGroup(String),
    SetChecked { filename: String, checked: bool },
    ToggleAll(bool),
    Reload,
    PrintFile(String),
    /// Filenames in document order, resolved from the selection when clicked.
    PrintSelected(Vec<String>),
    PrintFolder(String),
    PrintFolderThenDelete(String),
    DeleteFile(String),
    DeleteFolder(String),
    DeleteAll,
    /// Sends whatever the upload pipeline holds.
    Upload,
}

/// What a remote action changed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// The store was reloaded; the list must be redrawn.
    pub refreshed: bool,
}

impl Outcome {
    fn refreshed(refreshed: bool) -> Self {
        Self { refreshed }
    }
}

pub struct ActionDispatcher<'a, B: ?Sized, P: ?Sized, S: ?Sized> {
    backend: &'a B,
    prompt: &'a P,
    pauser: &'a S,
    print_delay: Duration,
}

impl<'a, B, P, S> ActionDispatcher<'a, B, P, S>
where
    B: Backend + ?Sized,
    P: Prompt + ?Sized,
    S: Pause + ?Sized,
{
    pub fn new(backend: &'a B, prompt: &'a P, pauser: &'a S, ui: &UiConfig) -> Self {
        Self { backend, prompt, pauser, print_delay: ui.print_delay() }
    }

    /// Runs any action against the full page state.
    pub async fn dispatch(&self, state: &mut AppState, action: Action) {
        if state.apply_local(&action) {
            return;
        }
        let outcome = match action {
            Action::Upload => match state.upload.begin() {
                Some(request) => {
                    let ok = self.upload(&mut state.store, request).await;
                    state.upload.finish(ok);
                    Outcome::refreshed(ok)
                }
                None => return,
            },
            other => self.perform(&mut state.store, other).await,
        };
        if outcome.refreshed {
            state.rerender();
        }
    }

    /// Executes a backend action on the store alone.
    ///
    /// The web UI uses this with a snapshot of its store so local interactions
    /// stay responsive while a long batch runs.
    pub async fn perform(&self, store: &mut HistoryStore, action: Action) -> Outcome {
        match action {
            Action::Reload => Outcome::refreshed(store.reload(self.backend).await),
            Action::PrintFile(filename) => {
                let sent = self.print_file(&filename, false).await.is_ok();
                tracing::debug!("single print of {} sent: {}", filename, sent);
                Outcome::default()
            }
            Action::PrintSelected(filenames) => {
                self.print_selected(filenames).await;
                Outcome::default()
            }
            Action::PrintFolder(folder) => {
                self.print_folder(store, &folder).await;
                Outcome::default()
            }
            Action::PrintFolderThenDelete(folder) => {
                Outcome::refreshed(self.print_folder_then_delete(store, &folder).await)
            }
            Action::DeleteFile(filename) => Outcome::refreshed(self.delete_file(store, &filename).await),
            Action::DeleteFolder(folder) => Outcome::refreshed(self.delete_folder(store, &folder).await),
            Action::DeleteAll => Outcome::refreshed(self.delete_all(store).await),
            other => {
                tracing::debug!("{:?} needs the page state, ignored", other);
                Outcome::default()
            }
        }
    }

    /// Sends one print job. Silent prints only log failures.
    pub async fn print_file(&self, filename: &str, silent: bool) -> ClientResult<()> {
        tracing::debug!("print {}", filename);
        let result = self.backend.print(filename).await.and_then(ensure_success);
        match &result {
            Ok(()) => {
                if !silent {
                    self.prompt.alert("Print job sent!");
                }
            }
            Err(e) => {
                tracing::error!("Print failed for {}: {}", filename, e);
                if !silent {
                    let msg = match e.kind() {
                        ErrorKind::Application => format!("Print failed: {}", e.user_message()),
                        _ => "Error sending print job".to_string(),
                    };
                    self.prompt.alert(&msg);
                }
            }
        }
        result
    }

    /// Prints the selected files one by one with the configured pause after each.
    ///
    /// Returns `None` if nothing was selected or the user declined.
    pub async fn print_selected(&self, filenames: Vec<String>) -> Option<BatchReport> {
        if filenames.is_empty() {
            return None;
        }
        if !self.prompt.confirm(&format!("Print {} files?", filenames.len())) {
            return None;
        }
        let report = run_ordered(filenames, self.print_delay, self.pauser, |f| async move {
            self.print_file(&f, true).await
        })
        .await;
        if report.all_ok() {
            self.prompt.alert("Batch print sent!");
        } else {
            self.prompt.alert(&format!(
                "Batch print sent, but {} of {} files failed.",
                report.failed(),
                report.attempted
            ));
        }
        Some(report)
    }

    /// Prints every file of a folder in list order.
    pub async fn print_folder(&self, store: &HistoryStore, folder: &str) -> Option<BatchReport> {
        let files = folder_files(store, folder);
        if !self.prompt.confirm(&format!("Print all {} files in {}?", files.len(), folder)) {
            return None;
        }
        let report = self.print_batch(files).await;
        if !report.all_ok() {
            self.prompt.alert(&format!("{} of {} print jobs failed.", report.failed(), report.attempted));
        }
        Some(report)
    }

    /// Prints the whole folder, then deletes it.
    ///
    /// The delete only starts after every print was attempted. With print
    /// failures the user is asked whether to go on; the delete itself always
    /// asks its own confirmation.
    pub async fn print_folder_then_delete(&self, store: &mut HistoryStore, folder: &str) -> bool {
        let files = folder_files(store, folder);
        let question = format!("Print all {} files in {} AND THEN DELETE the folder?", files.len(), folder);
        if !self.prompt.confirm(&question) {
            return false;
        }
        let report = self.print_batch(files).await;
        if !report.all_ok()
            && !self.prompt.confirm(&format!("There were {} print errors. Delete folder anyway?", report.failed()))
        {
            return false;
        }
        self.delete_folder(store, folder).await
    }

    pub async fn delete_file(&self, store: &mut HistoryStore, filename: &str) -> bool {
        let name = store
            .entries()
            .iter()
            .find(|e| e.filename == filename)
            .map(|e| e.original_name.as_str())
            .unwrap_or(filename);
        if !self.prompt.confirm(&format!("Are you sure you want to delete \"{}\"?", name)) {
            return false;
        }
        self.send_delete(store, DeleteRequest::File { filename: filename.to_string() }).await
    }

    pub async fn delete_folder(&self, store: &mut HistoryStore, folder: &str) -> bool {
        let question = format!("Are you sure you want to delete folder \"{}\" and all its files?", folder);
        if !self.prompt.confirm(&question) {
            return false;
        }
        self.send_delete(store, DeleteRequest::Folder { folder: folder.to_string() }).await
    }

    pub async fn delete_all(&self, store: &mut HistoryStore) -> bool {
        if !self.prompt.confirm("Are you strictly sure? This deletes ALL uploaded files.") {
            return false;
        }
        self.send_delete(store, DeleteRequest::all()).await
    }

    /// Uploads PDFs for conversion and switches the filter to the new folder.
    pub async fn upload(&self, store: &mut HistoryStore, request: UploadRequest) -> bool {
        tracing::debug!("upload {} file(s) into {:?}", request.files.len(), request.folder_name);
        let result = self.backend.convert(&request).await.and_then(|resp| {
            if resp.success {
                Ok(resp)
            } else {
                Err(ClientError::rejected(resp.error))
            }
        });
        match result {
            Ok(resp) => {
                let folder = resp.folder_name.filter(|f| !f.trim().is_empty());
                store.set_filter(folder.map(Filter::Folder).unwrap_or(Filter::All));
                store.reload(self.backend).await;
                self.prompt.alert("Upload & Conversion Successful!");
                true
            }
            Err(e) => {
                tracing::error!("Upload failed: {}", e);
                let msg = match e.kind() {
                    ErrorKind::Application => format!("Error: {}", e.user_message()),
                    _ => "Upload failed".to_string(),
                };
                self.prompt.alert(&msg);
                false
            }
        }
    }

    async fn print_batch(&self, files: Vec<String>) -> BatchReport {
        run_ordered(files, Duration::ZERO, self.pauser, |f| async move { self.print_file(&f, true).await }).await
    }

    async fn send_delete(&self, store: &mut HistoryStore, request: DeleteRequest) -> bool {
        tracing::debug!("delete {:?}", request);
        match self.backend.delete(&request).await.and_then(ensure_success) {
            Ok(()) => {
                // A deleted folder can no longer be the active filter.
                let gone = match (&request, store.filter()) {
                    (DeleteRequest::All { .. }, _) => true,
                    (DeleteRequest::Folder { folder }, Filter::Folder(active)) => folder == active,
                    _ => false,
                };
                if gone {
                    store.set_filter(Filter::All);
                }
                self.prompt.alert("Deleted successfully");
                store.reload(self.backend).await;
                true
            }
            Err(e) => {
                tracing::error!("Delete failed: {}", e);
                let msg = match e.kind() {
                    ErrorKind::Application => format!("Delete failed: {}", e.user_message()),
                    _ => "Delete request failed".to_string(),
                };
                self.prompt.alert(&msg);
                false
            }
        }
    }
}

fn folder_files(store: &HistoryStore, folder: &str) -> Vec<String> {
    store.entries_in_folder(folder).map(|e| e.filename.clone()).collect()
}
