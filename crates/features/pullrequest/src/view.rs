use prctx_domain::pullrequest::PullRequestSummary;
use prctx_domain::view::ViewOperations;
use std::fmt::Debug;
use std::sync::Arc;

/// Handle to the controller of a pull-request toolwindow.
///
/// Owned by the view; actions receive it through
/// [`VIEW_CONTROLLER`](crate::keys::VIEW_CONTROLLER) and use it to trigger view-level
/// operations. Implementations must be cheap to call from any thread.
pub trait ViewController: Debug + Send + Sync {
    /// Operations this controller currently supports.
    fn operations(&self) -> ViewOperations;

    /// Reloads the pull-request list.
    fn refresh_list(&self);

    /// Switches the toolwindow back to the list.
    fn view_list(&self);

    /// Opens the detail view of `pull_request`.
    fn view_pull_request(&self, pull_request: &PullRequestSummary);

    /// Closes the detail view.
    fn close(&self);

    fn supports(&self, operation: ViewOperations) -> bool {
        self.operations().contains(operation)
    }
}

/// The value type stored under [`VIEW_CONTROLLER`](crate::keys::VIEW_CONTROLLER).
pub type ViewControllerHandle = Arc<dyn ViewController>;
