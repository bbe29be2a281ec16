//! Context keys of the pull-request feature.
//!
//! * [`ACTION_DATA_CONTEXT`]: consumed by action handlers, never written by them.
//! * [`SELECTED_ITEM`]: produced by the list view on selection change.
//! * [`VIEW_CONTROLLER`]: produced by the toolwindow, consumed by view actions.

use crate::view::ViewControllerHandle;
use prctx_domain::constants::{ACTION_DATA_CONTEXT_ID, SELECTED_ITEM_ID, VIEW_CONTROLLER_ID};
use prctx_domain::pullrequest::{ActionDataContext, PullRequestSummary};
use prctx_kernel::{ContextError, DataKey, KeyRegistryBuilder};

pub const ACTION_DATA_CONTEXT: DataKey<ActionDataContext> = DataKey::new(ACTION_DATA_CONTEXT_ID);

pub const SELECTED_ITEM: DataKey<PullRequestSummary> = DataKey::new(SELECTED_ITEM_ID);

pub const VIEW_CONTROLLER: DataKey<ViewControllerHandle> = DataKey::new(VIEW_CONTROLLER_ID);

/// Registers every pull-request key.
///
/// # Errors
/// Returns [`ContextError::DuplicateKey`] if another slice already claimed one of the
/// identifiers, or [`ContextError::InvalidKey`] if the registry rules reject them.
pub fn register(builder: &mut KeyRegistryBuilder) -> Result<(), ContextError> {
    builder.declare(ACTION_DATA_CONTEXT)?.declare(SELECTED_ITEM)?.declare(VIEW_CONTROLLER)?;
    tracing::debug!("Pull-request context keys registered");
    Ok(())
}
