//! Stable identifiers for the well-known context keys.
//!
//! External collaborators may refer to these strings literally, so they must
//! never change between releases.

pub const ACTION_DATA_CONTEXT_ID: &str = "org.prctx.pullrequest.actiondatacontext";
pub const SELECTED_ITEM_ID: &str = "org.prctx.pullrequest.list.selected";
pub const VIEW_CONTROLLER_ID: &str = "org.prctx.pullrequest.view.controller";
