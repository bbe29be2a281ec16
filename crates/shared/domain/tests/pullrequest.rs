use prctx_domain::pullrequest::{
    ActionDataContext, PullRequestState, PullRequestSummary, RepositoryCoordinates,
};
use prctx_domain::view::ViewOperations;
use serde_json::json;

#[test]
fn summary_deserializes_with_defaults() {
    let summary: PullRequestSummary =
        serde_json::from_value(json!({ "id": 42, "title": "Fix bug" })).expect("deserialize");

    assert_eq!(summary, PullRequestSummary::new(42, "Fix bug"));
    assert_eq!(summary.state, PullRequestState::Open);
    assert!(summary.author.is_none());
}

#[test]
fn summary_serializes_camel_case_and_skips_empty_fields() {
    let summary = PullRequestSummary::new(7, "Add docs")
        .with_number(12)
        .with_state(PullRequestState::Merged);

    let value = serde_json::to_value(&summary).expect("serialize");
    assert_eq!(value, json!({ "id": 7, "number": 12, "title": "Add docs", "state": "merged" }));
    assert_eq!(summary.to_string(), "#12 Add docs");
}

#[test]
fn state_activity() {
    assert!(PullRequestState::Open.is_active());
    assert!(PullRequestState::Draft.is_active());
    assert!(!PullRequestState::Closed.is_active());
    assert!(!PullRequestState::Merged.is_active());
}

#[test]
fn action_data_context_aggregates_view_state() {
    let repo = RepositoryCoordinates::new("github.com", "octo", "widgets");
    let ctx = ActionDataContext::new(repo.clone())
        .with_account("octocat")
        .with_current(PullRequestSummary::new(1, "Initial"));

    assert_eq!(ctx.repository.full_name(), "octo/widgets");
    assert!(ctx.is_authenticated());
    assert_eq!(ctx.current.as_ref().map(|pr| pr.id), Some(1));
    assert!(!ActionDataContext::new(repo).is_authenticated());
}

#[test]
fn view_operations_all_covers_each_flag() {
    assert_eq!(ViewOperations::default(), ViewOperations::empty());
    assert!(ViewOperations::ALL.contains(ViewOperations::NAVIGATE | ViewOperations::CLOSE));
}
