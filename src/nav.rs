//! Navigation state machine: which tab is active and whether the list or a
//! detail view is showing. `NavState` is a plain value; `reduce` is pure.

use crate::model::{Category, NavigationSelection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Detail(NavigationSelection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub tab: Category,
    pub view: ViewMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    SelectTab(Category),
    NextTab,
    PrevTab,
    SelectRow(NavigationSelection),
    Back,
    /// Delete went through its confirmation; leaves detail like `Back`.
    DeleteConfirmed,
}

impl NavState {
    pub fn new(tab: Category) -> Self {
        Self {
            tab,
            view: ViewMode::List,
        }
    }

    pub fn selection(&self) -> Option<NavigationSelection> {
        match self.view {
            ViewMode::Detail(sel) => Some(sel),
            ViewMode::List => None,
        }
    }

    pub fn is_list(&self) -> bool {
        self.view == ViewMode::List
    }

    #[must_use]
    pub fn reduce(self, command: NavCommand) -> Self {
        match (self.view, command) {
            (ViewMode::List, NavCommand::SelectTab(tab)) => Self { tab, ..self },
            (ViewMode::List, NavCommand::NextTab) => Self {
                tab: self.tab.next(),
                ..self
            },
            (ViewMode::List, NavCommand::PrevTab) => Self {
                tab: self.tab.prev(),
                ..self
            },
            (ViewMode::List, NavCommand::SelectRow(sel)) => Self {
                view: ViewMode::Detail(sel),
                ..self
            },
            (ViewMode::Detail(_), NavCommand::Back | NavCommand::DeleteConfirmed) => Self {
                view: ViewMode::List,
                ..self
            },
            // Tabs are hidden in detail mode; back/delete mean nothing in list mode.
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_facility_list() {
        let state = NavState::default();
        assert_eq!(state.tab, Category::Facility);
        assert!(state.is_list());
        assert_eq!(state.selection(), None);
    }

    #[test]
    fn test_tab_changes_ignored_in_detail() {
        let sel = NavigationSelection::new(1, Category::Facility);
        let state = NavState::default().reduce(NavCommand::SelectRow(sel));
        assert_eq!(state.reduce(NavCommand::NextTab), state);
        assert_eq!(state.reduce(NavCommand::SelectTab(Category::Inquiry)), state);
    }

    #[test]
    fn test_tab_cycle_wraps() {
        let state = NavState::new(Category::Inquiry).reduce(NavCommand::NextTab);
        assert_eq!(state.tab, Category::Facility);
        assert_eq!(state.reduce(NavCommand::PrevTab).tab, Category::Inquiry);
    }
}
