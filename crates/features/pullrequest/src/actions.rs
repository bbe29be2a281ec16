//! Actions driven by the pull-request context keys.
//!
//! Actions never write context data. `update` decides enablement from what is bound in
//! the event's [`DataContext`]; an absent key disables the action instead of failing.

use crate::error::{PullRequestError, PullRequestErrorExt};
use crate::keys::{ACTION_DATA_CONTEXT, SELECTED_ITEM, VIEW_CONTROLLER};
use crate::view::ViewControllerHandle;
use prctx_domain::view::ViewOperations;
use prctx_kernel::DataContext;
use tracing::debug;

/// How an action should be presented for the current context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionPresentation {
    pub visible: bool,
    pub enabled: bool,
}

impl ActionPresentation {
    pub const ENABLED: Self = Self { visible: true, enabled: true };
    pub const DISABLED: Self = Self { visible: true, enabled: false };
    pub const HIDDEN: Self = Self { visible: false, enabled: false };
}

/// A user-invokable action over pull-request context data.
pub trait PullRequestAction: Send + Sync {
    fn id(&self) -> &'static str;

    /// Computes the presentation for `context`.
    fn update(&self, context: &DataContext) -> ActionPresentation;

    /// Executes the action.
    ///
    /// # Errors
    /// Returns [`PullRequestError::Context`] when required data is absent and
    /// [`PullRequestError::Unsupported`] when the controller cannot perform the operation.
    fn perform(&self, context: &DataContext) -> Result<(), PullRequestError>;
}

/// Reloads the pull-request list.
#[derive(Debug, Default, Clone, Copy)]
pub struct RefreshListAction;

impl PullRequestAction for RefreshListAction {
    fn id(&self) -> &'static str {
        "pullrequest.list.refresh"
    }

    fn update(&self, context: &DataContext) -> ActionPresentation {
        presentation_for(context, ViewOperations::REFRESH)
    }

    fn perform(&self, context: &DataContext) -> Result<(), PullRequestError> {
        let controller = controller_for(context, ViewOperations::REFRESH)?;
        debug!(action = self.id(), "Refreshing pull-request list");
        controller.refresh_list();
        Ok(())
    }
}

/// Opens the selected list row in the detail view.
#[derive(Debug, Default, Clone, Copy)]
pub struct OpenSelectedAction;

impl PullRequestAction for OpenSelectedAction {
    fn id(&self) -> &'static str {
        "pullrequest.list.open"
    }

    fn update(&self, context: &DataContext) -> ActionPresentation {
        if context.get(&SELECTED_ITEM).is_none() {
            return ActionPresentation::DISABLED;
        }
        presentation_for(context, ViewOperations::NAVIGATE)
    }

    fn perform(&self, context: &DataContext) -> Result<(), PullRequestError> {
        let selected = context.require(&SELECTED_ITEM).context("open selected pull request")?;
        let controller = controller_for(context, ViewOperations::NAVIGATE)?;
        debug!(action = self.id(), pull_request = selected.id, "Opening pull request");
        controller.view_pull_request(selected);
        Ok(())
    }
}

/// Closes the detail view and returns to the list.
///
/// Only offered while the action data context shows a pull request.
#[derive(Debug, Default, Clone, Copy)]
pub struct CloseViewAction;

impl PullRequestAction for CloseViewAction {
    fn id(&self) -> &'static str {
        "pullrequest.view.close"
    }

    fn update(&self, context: &DataContext) -> ActionPresentation {
        match context.get(&ACTION_DATA_CONTEXT) {
            Some(data) if data.current.is_some() => {
                presentation_for(context, ViewOperations::CLOSE)
            },
            _ => ActionPresentation::HIDDEN,
        }
    }

    fn perform(&self, context: &DataContext) -> Result<(), PullRequestError> {
        let data = context.require(&ACTION_DATA_CONTEXT).context("close pull request view")?;
        let Some(current) = &data.current else {
            return Err(PullRequestError::Unsupported {
                message: "no pull request is shown".into(),
                context: Some(data.repository.full_name().into()),
            });
        };

        let controller = controller_for(context, ViewOperations::CLOSE)?;
        debug!(action = self.id(), pull_request = current.id, "Closing pull request view");
        controller.close();
        controller.view_list();
        Ok(())
    }
}

/// The built-in actions, in menu order.
#[must_use]
pub fn builtin() -> Vec<Box<dyn PullRequestAction>> {
    vec![Box::new(RefreshListAction), Box::new(OpenSelectedAction), Box::new(CloseViewAction)]
}

fn presentation_for(context: &DataContext, operation: ViewOperations) -> ActionPresentation {
    match context.get(&VIEW_CONTROLLER) {
        Some(controller) if controller.supports(operation) => ActionPresentation::ENABLED,
        Some(_) => ActionPresentation::DISABLED,
        None => ActionPresentation::HIDDEN,
    }
}

fn controller_for<'a>(
    context: &'a DataContext,
    operation: ViewOperations,
) -> Result<&'a ViewControllerHandle, PullRequestError> {
    let controller = context.require(&VIEW_CONTROLLER).context("view controller")?;
    if controller.supports(operation) {
        Ok(controller)
    } else {
        Err(PullRequestError::Unsupported { message: format!("{operation:?}").into(), context: None })
    }
}
