use crate::backend::Backend;
use crate::types::{Filter, HistoryEntry};

/// The application state the views are projected from.
///
/// Holds the last successfully fetched history and the active folder filter.
/// Entries are only ever replaced wholesale by [`HistoryStore::reload`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
    filter: Filter,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<HistoryEntry>) -> Self {
        Self { entries, filter: Filter::All }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Splits the store into its entries and filter.
    pub fn into_parts(self) -> (Vec<HistoryEntry>, Filter) {
        (self.entries, self.filter)
    }

    pub fn replace_entries(&mut self, entries: Vec<HistoryEntry>) {
        self.entries = entries;
    }

    /// Sets the active filter. Returns true if it changed.
    pub fn set_filter(&mut self, filter: Filter) -> bool {
        if self.filter == filter {
            return false;
        }
        self.filter = filter;
        true
    }

    pub fn entries_in_folder<'a>(&'a self, folder: &'a str) -> impl Iterator<Item = &'a HistoryEntry> + 'a {
        self.entries.iter().filter(move |e| e.folder_name() == Some(folder))
    }

    /// Fetches the authoritative list and replaces the local one.
    ///
    /// Failures are logged and swallowed; the previous entries stay so the UI
    /// keeps showing its last known state. Returns whether the reload succeeded.
    pub async fn reload<B: Backend + ?Sized>(&mut self, backend: &B) -> bool {
        match backend.history().await {
            Ok(entries) => {
                tracing::debug!("history reloaded: {} entries", entries.len());
                self.replace_entries(entries);
                true
            }
            Err(e) => {
                tracing::warn!("Failed to load history ({:?}): {}", e.kind(), e);
                false
            }
        }
    }
}
