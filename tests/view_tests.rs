//! Navigation reducer, list view and detail view against the built-in seed.

use pretty_assertions::assert_eq;

use singo_dashboard::model::{Category, NavigationSelection, ReportId, Status};
use singo_dashboard::nav::{NavCommand, NavState, ViewMode};
use singo_dashboard::store::MemoryStore;
use singo_dashboard::views::{DeleteRequest, DetailError, DetailState, ListView, SaveRequest};

fn store() -> MemoryStore {
    MemoryStore::seeded().expect("built-in seed loads")
}

fn loaded(category: Category, id: u32) -> singo_dashboard::views::DetailView {
    match DetailState::load(&store(), NavigationSelection::new(id, category)) {
        DetailState::Loaded(view) => view,
        DetailState::Missing(sel) => panic!("{sel} should exist"),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Navigation
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_tab_survives_detail_round_trip() {
    let sel = NavigationSelection::new(3, Category::Inquiry);
    let nav = NavState::default()
        .reduce(NavCommand::SelectTab(Category::Inquiry))
        .reduce(NavCommand::SelectRow(sel));
    assert_eq!(nav.view, ViewMode::Detail(sel));

    let back = nav.reduce(NavCommand::Back);
    assert_eq!(back, NavState::new(Category::Inquiry));

    let deleted = nav.reduce(NavCommand::DeleteConfirmed);
    assert_eq!(deleted, NavState::new(Category::Inquiry));
}

#[test]
fn test_tab_commands_ignored_in_detail() {
    let sel = NavigationSelection::new(1, Category::Facility);
    let nav = NavState::default().reduce(NavCommand::SelectRow(sel));
    assert_eq!(nav.reduce(NavCommand::NextTab), nav);
    assert_eq!(nav.reduce(NavCommand::SelectTab(Category::Inquiry)), nav);
}

#[test]
fn test_back_in_list_is_noop() {
    let nav = NavState::new(Category::SchoolLife);
    assert_eq!(nav.reduce(NavCommand::Back), nav);
    assert_eq!(nav.reduce(NavCommand::DeleteConfirmed), nav);
}

// ═══════════════════════════════════════════════════════════════════════════
// List view
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_list_footer_counts_filtered_rows() {
    let mut list = ListView::mount(&store(), Category::Facility);
    assert_eq!(list.footer(), "총 5개의 신고가 있습니다.");

    list.set_query("서진");
    assert_eq!(list.visible_len(), 2);
    assert_eq!(list.footer(), "총 2개의 신고가 있습니다.");

    list.set_query("없는 검색어");
    assert_eq!(list.visible_len(), 0);
    assert_eq!(list.selected_index(), None);
    assert_eq!(list.footer(), "총 0개의 신고가 있습니다.");
}

#[test]
fn test_search_reaches_report_body() {
    // "수리" only appears below the title of facility #1
    let mut list = ListView::mount(&store(), Category::Facility);
    list.set_query("수리");
    let ids: Vec<u32> = list.visible().iter().map(|r| r.id.get()).collect();
    assert_eq!(ids, vec![1]);
    assert!(!list.visible()[0].title().contains("수리"));
}

#[test]
fn test_inquiry_footer_noun() {
    let list = ListView::mount(&store(), Category::Inquiry);
    assert_eq!(list.footer(), "총 6개의 문의가 있습니다.");
}

#[test]
fn test_row_selection_targets_filtered_record() {
    let mut list = ListView::mount(&store(), Category::SchoolLife);
    list.set_query("학생들이");
    let ids: Vec<u32> = list.visible().iter().map(|r| r.id.get()).collect();
    assert_eq!(ids, vec![1, 2, 4, 5]);

    assert_eq!(
        list.select_row(2),
        Some(NavigationSelection::new(4, Category::SchoolLife))
    );
    assert_eq!(list.select_row(9), None);
}

#[test]
fn test_cursor_clamps_when_filter_shrinks() {
    let mut list = ListView::mount(&store(), Category::Inquiry);
    list.select_last();
    assert_eq!(list.selected_index(), Some(5));

    list.set_query("급식");
    assert_eq!(list.selected_index(), Some(0));
    assert_eq!(list.selected().map(|r| r.id), Some(ReportId(1)));

    list.clear_query();
    list.select_next();
    assert_eq!(list.selected_index(), Some(1));
}

// ═══════════════════════════════════════════════════════════════════════════
// Detail view
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_missing_record() {
    let sel = NavigationSelection::new(42, Category::Facility);
    let state = DetailState::load(&store(), sel);
    assert_eq!(state, DetailState::Missing(sel));
    assert!(state.view().is_none());
}

#[test]
fn test_options_follow_category() {
    assert_eq!(
        loaded(Category::Inquiry, 1).options(),
        &[Status::Answered, Status::Unanswered]
    );
    assert_eq!(
        loaded(Category::SchoolLife, 1).options(),
        &[Status::Received, Status::Scheduled, Status::Resolved]
    );
}

#[test]
fn test_status_edit_is_local_until_save() {
    let mut view = loaded(Category::Facility, 1);
    assert_eq!(view.status(), Status::Received);
    assert!(!view.is_dirty());

    view.set_status(Status::Resolved).unwrap();
    assert!(view.is_dirty());
    assert_eq!(view.record().status, Status::Received);

    assert_eq!(
        view.save(),
        SaveRequest {
            id: ReportId(1),
            category: Category::Facility,
            status: Status::Resolved,
        }
    );
}

#[test]
fn test_status_outside_vocabulary_rejected() {
    let mut view = loaded(Category::Inquiry, 2);
    let err = view.set_status(Status::Scheduled).unwrap_err();
    assert_eq!(
        err,
        DetailError::StatusNotAllowed {
            category: Category::Inquiry,
            status: Status::Scheduled,
        }
    );
    assert_eq!(view.status(), Status::Unanswered);
}

#[test]
fn test_dropdown_keyboard_selection() {
    let mut view = loaded(Category::Facility, 2);
    view.open_dropdown();
    // Current status (처리 예정) is highlighted first
    assert_eq!(view.dropdown_cursor(), Some(1));

    view.move_dropdown(5);
    assert_eq!(view.dropdown_cursor(), Some(2));
    view.choose_highlighted().unwrap();
    assert_eq!(view.status(), Status::Resolved);
    assert!(!view.is_dropdown_open());
}

#[test]
fn test_delete_needs_confirmation() {
    let mut view = loaded(Category::Inquiry, 4);
    assert_eq!(view.confirm_delete(true), None);

    view.request_delete();
    assert!(view.confirming_delete());
    assert_eq!(view.confirm_delete(false), None);
    assert!(!view.confirming_delete());

    view.request_delete();
    assert_eq!(
        view.confirm_delete(true),
        Some(DeleteRequest {
            id: ReportId(4),
            category: Category::Inquiry,
        })
    );
}
