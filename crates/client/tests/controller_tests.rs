//! Tests for the controller's local state transitions and filtering.
//!
//! These exercise the pure half of the controller (the part that runs
//! after a confirmed server response) without a network: the async methods
//! are thin wrappers that call the API and then one of these transitions.

use chrono::Utc;
use folio_client::api::ApiClient;
use folio_client::controller::{matches_term, Controller};
use folio_client::model::Project;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn project(id: i64, title: &str, description: &str, stack: &[&str]) -> Project {
    Project {
        id,
        title: title.to_string(),
        description: description.to_string(),
        tech_stack: stack.iter().map(|s| s.to_string()).collect(),
        github_link: String::new(),
        created_at: Utc::now(),
    }
}

/// A controller with no reachable server; only local transitions are used.
fn controller() -> Controller {
    Controller::new(ApiClient::new("http://localhost:0"))
}

fn seeded_controller() -> Controller {
    let mut c = controller();
    // Prepend order: the detection project ends up first.
    c.apply_created(project(
        1,
        "Face Recognition",
        "realtime video pipeline",
        &["C++", "OpenCV"],
    ));
    c.apply_created(project(
        2,
        "Brain Tumor Detection",
        "CNN classifier for MRI scans",
        &["Python", "TensorFlow"],
    ));
    c
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

#[test]
fn empty_term_matches_everything() {
    let mut c = seeded_controller();
    c.set_search_term("");
    assert_eq!(c.filtered().len(), 2);
    c.set_search_term("   ");
    assert_eq!(c.filtered().len(), 2);
}

#[test]
fn search_is_case_insensitive_on_tech_stack() {
    let mut c = seeded_controller();
    c.set_search_term("python");
    let titles: Vec<&str> = c.filtered().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Brain Tumor Detection"]);
}

#[test]
fn search_matches_title_and_description_substrings() {
    let mut c = seeded_controller();

    c.set_search_term("face");
    assert_eq!(c.filtered().len(), 1);
    assert_eq!(c.filtered()[0].id, 1);

    c.set_search_term("MRI");
    assert_eq!(c.filtered().len(), 1);
    assert_eq!(c.filtered()[0].id, 2);
}

#[test]
fn search_with_no_matches_yields_empty_view_without_touching_the_list() {
    let mut c = seeded_controller();
    c.set_search_term("cobol");
    assert!(c.filtered().is_empty());
    assert_eq!(c.projects().len(), 2);
}

#[test]
fn matches_term_requires_a_single_field_hit() {
    let p = project(1, "Brain Tumor Detection", "", &["Python"]);
    assert!(matches_term(&p, "PYTHON"));
    assert!(matches_term(&p, "tumor"));
    assert!(!matches_term(&p, "tensorflow"));
}

// ---------------------------------------------------------------------------
// State transitions
// ---------------------------------------------------------------------------

#[test]
fn created_records_are_prepended() {
    let mut c = seeded_controller();
    c.apply_created(project(3, "Newest", "", &[]));

    let ids: Vec<i64> = c.projects().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
    // The filtered view follows immediately.
    assert_eq!(c.filtered()[0].id, 3);
}

#[test]
fn updates_replace_in_place_preserving_order() {
    let mut c = seeded_controller();
    c.apply_updated(project(1, "Face Recognition v2", "", &["Rust"]));

    let ids: Vec<i64> = c.projects().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 1]);
    let updated = c.find(1).unwrap();
    assert_eq!(updated.title, "Face Recognition v2");
    // Full replacement: the old stack must be gone.
    assert_eq!(updated.tech_stack, vec!["Rust"]);
}

#[test]
fn update_for_unknown_id_changes_nothing() {
    let mut c = seeded_controller();
    c.apply_updated(project(99, "Ghost", "", &[]));
    assert_eq!(c.projects().len(), 2);
    assert!(c.find(99).is_none());
}

#[test]
fn delete_removes_exactly_the_matching_id() {
    let mut c = seeded_controller();
    c.apply_deleted(1);

    let ids: Vec<i64> = c.projects().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2]);
    assert_eq!(c.filtered().len(), 1);
}

#[test]
fn delete_interacts_with_active_search() {
    let mut c = seeded_controller();
    c.set_search_term("detection");
    assert_eq!(c.filtered().len(), 1);

    c.apply_deleted(2);
    assert!(c.filtered().is_empty());
    assert_eq!(c.projects().len(), 1);
}

// ---------------------------------------------------------------------------
// Notices
// ---------------------------------------------------------------------------

#[test]
fn notices_start_empty_and_dismiss_cleanly() {
    let mut c = controller();
    assert!(c.notice().is_none());
    c.dismiss_notice();
    assert!(c.notice().is_none());
}

#[tokio::test]
async fn failed_refresh_sets_error_notice_and_keeps_list_empty() {
    // Port 0 is never routable, so the transport layer fails immediately.
    let mut c = controller();
    c.refresh().await;

    assert!(c.projects().is_empty());
    assert!(!c.is_loading());
    let notice = c.notice().expect("a notice should be set");
    assert!(notice.message.contains("check if the server is running"));
}

#[tokio::test]
async fn failed_delete_leaves_state_unchanged() {
    let mut c = seeded_controller();
    c.delete(1).await;

    // No optimistic removal: both records are still present.
    assert_eq!(c.projects().len(), 2);
    let notice = c.notice().expect("a notice should be set");
    assert!(notice.message.contains("Failed to delete"));
}
