//! Projection of a [`HistoryStore`] into the history list.
//!
//! Two modes, picked only by the active filter:
//!
//! - **Folder selected**: the folder's entries as one flat list in fetch order.
//! - **All**: one collapsible group per folder (sorted by name), followed by the
//!   uncategorized entries under their own heading.
//!
//! The result is a plain value; the web UI and the CLI both draw from it. The only
//! state besides the store is which groups the user expanded ([`CollapseState`]).

use std::collections::{BTreeMap, HashSet};

use crate::config::UiConfig;
use crate::format::{format_bytes, format_timestamp};
use crate::store::HistoryStore;
use crate::types::{Filter, HistoryEntry};

pub const EMPTY_FOLDER_MESSAGE: &str = "No files found.";
pub const EMPTY_HISTORY_MESSAGE: &str = "No history yet.";
pub const UNCATEGORIZED_HEADING: &str = "Uncategorized";

/// One file row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub filename: String,
    pub display_name: String,
    pub date_label: String,
    pub size_label: String,
}

impl RowView {
    pub fn from_entry(entry: &HistoryEntry, ui: &UiConfig) -> Self {
        Self {
            filename: entry.filename.clone(),
            display_name: entry.original_name.clone(),
            date_label: format_timestamp(&entry.date, &ui.date_format),
            size_label: format_bytes(entry.size, ui.size_decimals),
        }
    }
}

/// A folder group in the "All" view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupView {
    pub name: String,
    pub rows: Vec<RowView>,
    pub collapsed: bool,
}

impl GroupView {
    pub fn count(&self) -> usize {
        self.rows.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryView {
    /// Nothing to show; rendered as a single message instead of an empty container.
    Empty { message: &'static str },
    Flat { rows: Vec<RowView> },
    Grouped { groups: Vec<GroupView>, uncategorized: Vec<RowView> },
}

impl HistoryView {
    /// Every rendered row in document order, collapsed groups included.
    pub fn rows(&self) -> Box<dyn Iterator<Item = &RowView> + '_> {
        match self {
            HistoryView::Empty { .. } => Box::new(std::iter::empty()),
            HistoryView::Flat { rows } => Box::new(rows.iter()),
            HistoryView::Grouped { groups, uncategorized } => {
                Box::new(groups.iter().flat_map(|g| g.rows.iter()).chain(uncategorized.iter()))
            }
        }
    }

    /// Filenames of all rendered rows in document order.
    pub fn filenames(&self) -> Vec<String> {
        self.rows().map(|r| r.filename.clone()).collect()
    }
}

/// Entries split by folder. Each entry lands in exactly one place.
#[derive(Debug, Default)]
pub struct Partition<'a> {
    pub groups: BTreeMap<&'a str, Vec<&'a HistoryEntry>>,
    pub uncategorized: Vec<&'a HistoryEntry>,
}

impl<'a> Partition<'a> {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.uncategorized.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum::<usize>() + self.uncategorized.len()
    }
}

/// Groups entries by folder, keeping fetch order within every group.
pub fn partition(entries: &[HistoryEntry]) -> Partition<'_> {
    let mut out = Partition::default();
    for entry in entries {
        match entry.folder_name() {
            Some(folder) => out.groups.entry(folder).or_default().push(entry),
            None => out.uncategorized.push(entry),
        }
    }
    out
}

/// Which folder groups are expanded. Groups start collapsed.
///
/// Transient UI state: it does not survive a page load and is not part of the
/// store. Names of folders that disappear are simply never asked for again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollapseState {
    expanded: HashSet<String>,
}

impl CollapseState {
    pub fn is_collapsed(&self, folder: &str) -> bool {
        !self.expanded.contains(folder)
    }

    /// Flips a group; returns true if it is now expanded.
    pub fn toggle(&mut self, folder: &str) -> bool {
        if !self.expanded.remove(folder) {
            self.expanded.insert(folder.to_string());
            true
        } else {
            false
        }
    }
}

/// Builds the history list for the store's active filter.
pub fn render(store: &HistoryStore, collapse: &CollapseState, ui: &UiConfig) -> HistoryView {
    match store.filter() {
        Filter::Folder(folder) => {
            let rows: Vec<RowView> = store
                .entries()
                .iter()
                .filter(|e| e.folder.as_deref() == Some(folder.as_str()))
                .map(|e| RowView::from_entry(e, ui))
                .collect();
            if rows.is_empty() {
                HistoryView::Empty { message: EMPTY_FOLDER_MESSAGE }
            } else {
                HistoryView::Flat { rows }
            }
        }
        Filter::All => {
            let parts = partition(store.entries());
            if parts.is_empty() {
                return HistoryView::Empty { message: EMPTY_HISTORY_MESSAGE };
            }
            let groups = parts
                .groups
                .iter()
                .map(|(name, items)| GroupView {
                    name: name.to_string(),
                    rows: items.iter().map(|e| RowView::from_entry(e, ui)).collect(),
                    collapsed: collapse.is_collapsed(name),
                })
                .collect();
            let uncategorized = parts.uncategorized.iter().map(|e| RowView::from_entry(e, ui)).collect();
            HistoryView::Grouped { groups, uncategorized }
        }
    }
}
