//! Pull-request feature slice.
//!
//! Declares the context keys through which list views, toolwindow controllers and
//! action handlers exchange pull-request state, plus the actions that consume them.

pub mod actions;
mod error;
pub mod keys;
mod view;

pub use crate::error::{PullRequestError, PullRequestErrorExt};
pub use crate::keys::register;
pub use crate::view::{ViewController, ViewControllerHandle};
