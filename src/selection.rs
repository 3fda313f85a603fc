use std::collections::HashSet;

/// Checked rows of the currently rendered history list.
///
/// Rebuilt from scratch on every render via [`SelectionState::reset`]: selections
/// never survive a redraw. `rows` keeps document order so bulk print walks the
/// files top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    rows: Vec<String>,
    checked: HashSet<String>,
    select_all: bool,
}

impl SelectionState {
    pub fn new(rows: Vec<String>) -> Self {
        Self { rows, checked: HashSet::new(), select_all: false }
    }

    /// Replaces the selectable rows after a render and unchecks everything.
    pub fn reset(&mut self, rows: Vec<String>) {
        self.rows = rows;
        self.checked.clear();
        self.select_all = false;
    }

    pub fn is_checked(&self, filename: &str) -> bool {
        self.checked.contains(filename)
    }

    pub fn select_all_checked(&self) -> bool {
        self.select_all
    }

    /// Checks or unchecks one row. Unknown filenames are ignored.
    pub fn set_checked(&mut self, filename: &str, checked: bool) {
        if !self.rows.iter().any(|r| r == filename) {
            return;
        }
        if checked {
            self.checked.insert(filename.to_string());
        } else {
            self.checked.remove(filename);
        }
    }

    /// The "select all" toggle: every rendered row follows its new state.
    pub fn toggle_all(&mut self, checked: bool) {
        self.select_all = checked;
        if checked {
            self.checked = self.rows.iter().cloned().collect();
        } else {
            self.checked.clear();
        }
    }

    pub fn checked_count(&self) -> usize {
        self.checked.len()
    }

    /// Checked filenames in document order.
    pub fn checked_in_order(&self) -> Vec<String> {
        self.rows.iter().filter(|r| self.checked.contains(*r)).cloned().collect()
    }

    /// Label of the bulk print button, `None` while it should be hidden.
    pub fn bulk_print_label(&self) -> Option<String> {
        match self.checked_count() {
            0 => None,
            n => Some(format!("Print Selected ({})", n)),
        }
    }
}
