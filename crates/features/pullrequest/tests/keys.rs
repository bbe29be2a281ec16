use prctx_domain::pullrequest::PullRequestSummary;
use prctx_kernel::{ContextError, DataContext, KeyRegistry};
use prctx_pullrequest::keys::{ACTION_DATA_CONTEXT, SELECTED_ITEM, VIEW_CONTROLLER};

#[test]
fn registers_all_three_keys() {
    let mut builder = KeyRegistry::builder();
    prctx_pullrequest::register(&mut builder).expect("register pull-request keys");
    let registry = builder.build();

    assert_eq!(registry.len(), 3);
    registry.verify(&ACTION_DATA_CONTEXT).expect("action data context");
    registry.verify(&SELECTED_ITEM).expect("selected item");
    registry.verify(&VIEW_CONTROLLER).expect("view controller");
}

#[test]
fn registering_twice_fails_fast() {
    let mut builder = KeyRegistry::builder();
    prctx_pullrequest::register(&mut builder).expect("first registration");

    let err = prctx_pullrequest::register(&mut builder).expect_err("second registration");
    assert!(matches!(err, ContextError::DuplicateKey { .. }));
}

#[test]
fn selected_item_scenario() {
    let mut ctx = DataContext::new();
    assert!(ctx.get(&SELECTED_ITEM).is_none());

    ctx.set(&SELECTED_ITEM, PullRequestSummary::new(42, "Fix bug"));

    let selected = ctx.get(&SELECTED_ITEM).expect("selection bound");
    assert_eq!(selected.id, 42);
    assert_eq!(selected.title, "Fix bug");
}

#[test]
fn literal_identifiers_resolve() {
    let mut builder = KeyRegistry::builder();
    prctx_pullrequest::register(&mut builder).expect("register");
    let registry = builder.build();

    let key = registry
        .resolve::<PullRequestSummary>("org.prctx.pullrequest.list.selected")
        .expect("resolve by literal id");
    assert_eq!(key, SELECTED_ITEM);
}
