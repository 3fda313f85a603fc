//! The filter bar above the history list.

use std::collections::BTreeSet;

use crate::store::HistoryStore;
use crate::types::{Filter, HistoryEntry};

/// What a pill does when clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PillKind {
    /// Selects a filter (the synthetic "All" pill or a folder).
    Select(Filter),
    /// Destructive: deletes every uploaded file.
    DeleteAll,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPill {
    pub label: String,
    pub kind: PillKind,
    pub active: bool,
}

/// Distinct named folders, sorted ascending.
pub fn folder_names(entries: &[HistoryEntry]) -> Vec<String> {
    entries
        .iter()
        .filter_map(HistoryEntry::folder_name)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Builds the pills: "All" first, one per folder, "Delete All Folders" last.
///
/// Exactly one pill is active. If the active filter names a folder that no
/// longer exists, "All" is marked instead.
pub fn build_pills(store: &HistoryStore) -> Vec<FilterPill> {
    let folders = folder_names(store.entries());
    let active_key = match store.filter() {
        Filter::Folder(name) if folders.iter().any(|f| f == name) => Some(name.as_str()),
        _ => None,
    };

    let mut pills = Vec::with_capacity(folders.len() + 2);
    pills.push(FilterPill {
        label: "All".to_string(),
        kind: PillKind::Select(Filter::All),
        active: active_key.is_none(),
    });
    for folder in &folders {
        pills.push(FilterPill {
            label: folder.clone(),
            kind: PillKind::Select(Filter::Folder(folder.clone())),
            active: active_key == Some(folder.as_str()),
        });
    }
    pills.push(FilterPill {
        label: "Delete All Folders".to_string(),
        kind: PillKind::DeleteAll,
        active: false,
    });
    pills
}
