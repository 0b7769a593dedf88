//! Detail view for one record: local status edit, save, and a confirmed
//! delete. Nothing here writes to the store; save and delete hand a request
//! back to the caller.

use tracing::warn;

use crate::model::{Category, NavigationSelection, Report, ReportId, Status};
use crate::store::ReportStore;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DetailError {
    #[error("'{status}' is not a valid status for {category}")]
    StatusNotAllowed { category: Category, status: Status },
}

/// Emitted by [`DetailView::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveRequest {
    pub id: ReportId,
    pub category: Category,
    pub status: Status,
}

/// Emitted once the user confirms a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteRequest {
    pub id: ReportId,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    Loaded(DetailView),
    /// The store has no record for this selection.
    Missing(NavigationSelection),
}

impl DetailState {
    pub fn load(store: &dyn ReportStore, selection: NavigationSelection) -> Self {
        match store.get(selection.category, selection.id) {
            Some(record) => Self::Loaded(DetailView::new(record)),
            None => {
                warn!(%selection, "no record for detail selection");
                Self::Missing(selection)
            }
        }
    }

    pub fn view(&self) -> Option<&DetailView> {
        match self {
            Self::Loaded(view) => Some(view),
            Self::Missing(_) => None,
        }
    }

    pub fn view_mut(&mut self) -> Option<&mut DetailView> {
        match self {
            Self::Loaded(view) => Some(view),
            Self::Missing(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    record: Report,
    status: Status,
    /// Highlighted option while the dropdown is open.
    dropdown: Option<usize>,
    confirming_delete: bool,
    pub scroll: u16,
}

impl DetailView {
    pub fn new(record: Report) -> Self {
        Self {
            status: record.status,
            record,
            dropdown: None,
            confirming_delete: false,
            scroll: 0,
        }
    }

    pub fn record(&self) -> &Report {
        &self.record
    }

    pub fn selection(&self) -> NavigationSelection {
        self.record.selection()
    }

    /// Status as edited locally; may differ from the record until saved.
    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_dirty(&self) -> bool {
        self.status != self.record.status
    }

    /// Dropdown options. Depends only on the category.
    pub fn options(&self) -> &'static [Status] {
        self.record.category.statuses()
    }

    pub fn set_status(&mut self, status: Status) -> Result<(), DetailError> {
        if !self.record.category.allows(status) {
            return Err(DetailError::StatusNotAllowed {
                category: self.record.category,
                status,
            });
        }
        self.status = status;
        self.dropdown = None;
        Ok(())
    }

    // -- dropdown -----------------------------------------------------------

    pub fn dropdown_cursor(&self) -> Option<usize> {
        self.dropdown
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown.is_some()
    }

    /// Open with the current status highlighted.
    pub fn open_dropdown(&mut self) {
        let current = self
            .options()
            .iter()
            .position(|s| *s == self.status)
            .unwrap_or(0);
        self.dropdown = Some(current);
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown = None;
    }

    pub fn toggle_dropdown(&mut self) {
        if self.is_dropdown_open() {
            self.close_dropdown();
        } else {
            self.open_dropdown();
        }
    }

    pub fn move_dropdown(&mut self, delta: isize) {
        if let Some(cursor) = self.dropdown {
            let last = self.options().len().saturating_sub(1) as isize;
            self.dropdown = Some((cursor as isize + delta).clamp(0, last) as usize);
        }
    }

    /// Pick the highlighted option and close. Picking the current value
    /// also closes.
    pub fn choose_highlighted(&mut self) -> Result<(), DetailError> {
        match self.dropdown.and_then(|i| self.options().get(i).copied()) {
            Some(status) => self.set_status(status),
            None => {
                self.close_dropdown();
                Ok(())
            }
        }
    }

    // -- actions ------------------------------------------------------------

    pub fn save(&self) -> SaveRequest {
        SaveRequest {
            id: self.record.id,
            category: self.record.category,
            status: self.status,
        }
    }

    pub fn confirming_delete(&self) -> bool {
        self.confirming_delete
    }

    /// Open the yes/no gate. Nothing is deleted until it is answered.
    pub fn request_delete(&mut self) {
        self.dropdown = None;
        self.confirming_delete = true;
    }

    pub fn confirm_delete(&mut self, confirmed: bool) -> Option<DeleteRequest> {
        if !self.confirming_delete {
            return None;
        }
        self.confirming_delete = false;
        confirmed.then_some(DeleteRequest {
            id: self.record.id,
            category: self.record.category,
        })
    }
}
