//! Per-category report table: records, search filter, row cursor.

use ratatui::widgets::TableState;

use crate::model::{filter_reports, Category, NavigationSelection, Report};
use crate::store::ReportStore;

#[derive(Debug, Default)]
pub struct ListView {
    pub category: Category,
    pub records: Vec<Report>,
    pub query: String,
    pub table_state: TableState,
}

impl ListView {
    /// Fresh records from the store, no filter, cursor on the first row.
    pub fn mount(store: &dyn ReportStore, category: Category) -> Self {
        let mut view = Self {
            category,
            records: store.list(category),
            query: String::new(),
            table_state: TableState::default(),
        };
        view.clamp_selection();
        view
    }

    /// Records matching the current filter, in store order.
    pub fn visible(&self) -> Vec<&Report> {
        filter_reports(&self.records, &self.query)
    }

    pub fn visible_len(&self) -> usize {
        self.visible().len()
    }

    /// "총 N개의 신고가 있습니다." for the filtered count.
    pub fn footer(&self) -> String {
        format!(
            "총 {}개의 {}가 있습니다.",
            self.visible_len(),
            self.category.noun()
        )
    }

    // -- filter -------------------------------------------------------------

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.clamp_selection();
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
        self.clamp_selection();
    }

    pub fn pop_query_char(&mut self) {
        self.query.pop();
        self.clamp_selection();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.clamp_selection();
    }

    // -- selection ----------------------------------------------------------

    pub fn selected_index(&self) -> Option<usize> {
        self.table_state.selected()
    }

    pub fn selected(&self) -> Option<&Report> {
        let index = self.selected_index()?;
        self.visible().get(index).copied()
    }

    /// The navigation target for the visible row at `index`.
    pub fn select_row(&self, index: usize) -> Option<NavigationSelection> {
        self.visible().get(index).map(|r| r.selection())
    }

    pub fn select_index(&mut self, index: usize) -> bool {
        if index < self.visible_len() {
            self.table_state.select(Some(index));
            true
        } else {
            false
        }
    }

    pub fn select_next(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let i = self
            .table_state
            .selected()
            .map(|s| (s + 1).min(len - 1))
            .unwrap_or(0);
        self.table_state.select(Some(i));
    }

    pub fn select_previous(&mut self) {
        if self.visible_len() == 0 {
            return;
        }
        let i = self
            .table_state
            .selected()
            .map(|s| s.saturating_sub(1))
            .unwrap_or(0);
        self.table_state.select(Some(i));
    }

    pub fn select_first(&mut self) {
        if self.visible_len() > 0 {
            self.table_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        let len = self.visible_len();
        if len > 0 {
            self.table_state.select(Some(len - 1));
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_len();
        let selected = match self.table_state.selected() {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => Some(0),
        };
        self.table_state.select(selected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn facility() -> ListView {
        let store = MemoryStore::seeded().unwrap();
        ListView::mount(&store, Category::Facility)
    }

    #[test]
    fn test_mount_selects_first_row() {
        let view = facility();
        assert_eq!(view.selected_index(), Some(0));
        assert_eq!(view.footer(), "총 5개의 신고가 있습니다.");
    }

    #[test]
    fn test_filter_reclamps_cursor() {
        let mut view = facility();
        view.select_last();
        assert_eq!(view.selected_index(), Some(4));
        view.set_query("에어컨");
        assert_eq!(view.visible_len(), 1);
        assert_eq!(view.selected_index(), Some(0));
        view.set_query("없는 검색어");
        assert_eq!(view.selected_index(), None);
        assert!(view.selected().is_none());
    }

    #[test]
    fn test_select_row_out_of_range() {
        let view = facility();
        assert!(view.select_row(99).is_none());
    }
}
