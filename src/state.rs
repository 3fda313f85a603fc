use crate::config::UiConfig;
use crate::dispatch::Action;
use crate::filters::{build_pills, FilterPill};
use crate::selection::SelectionState;
use crate::store::HistoryStore;
use crate::types::{Filter, HistoryEntry};
use crate::upload::UploadState;
use crate::view::{render, CollapseState, HistoryView};

/// Everything the history page shows, in one place.
///
/// `view` and `selection` are derived: [`AppState::rerender`] rebuilds them from
/// the store, the collapse flags and the display settings. Local interactions
/// (filter pills, group headers, checkboxes) are applied with
/// [`AppState::apply_local`]; anything that talks to the backend goes through
/// [`crate::dispatch::ActionDispatcher`].
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub store: HistoryStore,
    pub collapse: CollapseState,
    pub selection: SelectionState,
    pub upload: UploadState,
    pub ui: UiConfig,
    view: HistoryView,
}

impl AppState {
    pub fn new(ui: UiConfig) -> Self {
        Self::with_store(HistoryStore::new(), ui)
    }

    pub fn with_store(store: HistoryStore, ui: UiConfig) -> Self {
        let mut state = Self {
            store,
            collapse: CollapseState::default(),
            selection: SelectionState::default(),
            upload: UploadState::default(),
            ui,
            view: HistoryView::Empty { message: crate::view::EMPTY_HISTORY_MESSAGE },
        };
        state.rerender();
        state
    }

    pub fn with_entries(entries: Vec<HistoryEntry>, ui: UiConfig) -> Self {
        Self::with_store(HistoryStore::with_entries(entries), ui)
    }

    pub fn view(&self) -> &HistoryView {
        &self.view
    }

    pub fn pills(&self) -> Vec<FilterPill> {
        build_pills(&self.store)
    }

    /// Rebuilds the list; unchecks every row and the "select all" toggle.
    pub fn rerender(&mut self) {
        self.view = render(&self.store, &self.collapse, &self.ui);
        self.selection.reset(self.view.filenames());
    }

    /// Selecting a pill always redraws, even when the filter did not change.
    pub fn select_filter(&mut self, filter: Filter) {
        tracing::debug!("filter: {}", filter);
        self.store.set_filter(filter);
        self.rerender();
    }

    /// Takes over a store that a remote action reloaded on its own copy.
    ///
    /// The entries always come from `refreshed`. The filter only follows when the
    /// action itself changed it relative to `started_with`, the filter the copy
    /// was taken with; a pill picked while the action ran stays selected.
    pub fn apply_refreshed(&mut self, started_with: &Filter, refreshed: HistoryStore) {
        let (entries, filter) = refreshed.into_parts();
        self.store.replace_entries(entries);
        if &filter != started_with {
            self.store.set_filter(filter);
        }
        self.rerender();
    }

    /// Expands or collapses one group without touching the selection.
    pub fn toggle_group(&mut self, folder: &str) {
        let expanded = self.collapse.toggle(folder);
        if let HistoryView::Grouped { groups, .. } = &mut self.view {
            if let Some(group) = groups.iter_mut().find(|g| g.name == folder) {
                group.collapsed = !expanded;
            }
        }
    }

    /// The bulk print action for the current selection, `None` if nothing is checked.
    pub fn bulk_print_action(&self) -> Option<Action> {
        let checked = self.selection.checked_in_order();
        (!checked.is_empty()).then_some(Action::PrintSelected(checked))
    }

    /// Applies a purely local action. Returns false for actions that need the backend.
    pub fn apply_local(&mut self, action: &Action) -> bool {
        match action {
            Action::SelectFilter(filter) => self.select_filter(filter.clone()),
            Action::ToggleGroup(folder) => self.toggle_group(folder),
            Action::SetChecked { filename, checked } => self.selection.set_checked(filename, *checked),
            Action::ToggleAll(checked) => self.selection.toggle_all(*checked),
            _ => return false,
        }
        true
    }
}
