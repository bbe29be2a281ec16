use prctx_kernel::ContextError;
use std::borrow::Cow;

/// Error types specific to the pull-request feature.
#[prctx_derive::prctx_error]
pub enum PullRequestError {
    /// Required context data is absent or could not be registered.
    #[error("Action context error{}: {source}", format_context(.context))]
    Context { source: ContextError, context: Option<Cow<'static, str>> },

    /// The view controller does not support the requested operation.
    #[error("Unsupported view operation{}: {message}", format_context(.context))]
    Unsupported { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal pull-request error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
