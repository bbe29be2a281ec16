//! # Kernel
//!
//! The typed context registry shared by every feature slice.
//!
//! * [`DataKey`]: an immutable identifier carrying its value type.
//! * [`KeyRegistry`]: the frozen set of legal keys, built once at startup.
//! * [`DataContext`]: the per-event container producers fill and consumers read.
//! * [`SharedDataContext`]: a write-once variant for contexts populated concurrently.
//! * [`DataProvider`]: components that contribute bindings to a context.
//!
//! ```rust
//! use prctx_kernel::prelude::*;
//!
//! const SELECTED: DataKey<u64> = DataKey::new("org.example.list.selected");
//!
//! # fn main() -> Result<(), ContextError> {
//! let mut builder = KeyRegistry::builder();
//! builder.declare(SELECTED)?;
//! let registry = builder.build();
//! registry.verify(&SELECTED)?;
//!
//! let ctx = DataContext::new().with(&SELECTED, 42);
//! assert_eq!(ctx.get(&SELECTED), Some(&42));
//! # Ok(())
//! # }
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod context;
mod error;
pub mod key;
pub mod provider;
pub mod registry;
pub mod shared;

pub use crate::context::DataContext;
pub use crate::error::{ContextError, ContextErrorExt};
pub use crate::key::{ContextValue, DataKey, KeyInfo};
pub use crate::provider::DataProvider;
pub use crate::registry::{KeyRegistry, KeyRegistryBuilder};
pub use crate::shared::SharedDataContext;
pub use prctx_domain as domain;

pub mod prelude {
    pub use crate::context::DataContext;
    pub use crate::error::{ContextError, ContextErrorExt};
    pub use crate::key::{DataKey, KeyInfo};
    pub use crate::provider::DataProvider;
    pub use crate::registry::KeyRegistry;
    pub use crate::shared::SharedDataContext;
}
