use prctx_domain::constants::{ACTION_DATA_CONTEXT_ID, SELECTED_ITEM_ID, VIEW_CONTROLLER_ID};

#[test]
fn key_ids_are_stable() {
    assert_eq!(ACTION_DATA_CONTEXT_ID, "org.prctx.pullrequest.actiondatacontext");
    assert_eq!(SELECTED_ITEM_ID, "org.prctx.pullrequest.list.selected");
    assert_eq!(VIEW_CONTROLLER_ID, "org.prctx.pullrequest.view.controller");
}

#[test]
fn key_ids_share_the_namespace() {
    for id in [ACTION_DATA_CONTEXT_ID, SELECTED_ITEM_ID, VIEW_CONTROLLER_ID] {
        assert!(id.starts_with("org.prctx.pullrequest."), "{id} is outside the namespace");
    }
}
