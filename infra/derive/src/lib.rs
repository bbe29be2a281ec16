#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the workspace crates.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! prctx-derive.workspace = true
//! thiserror.workspace = true
//! ```
//!
//! Consumers must also depend on `thiserror`, the expansion refers to `::thiserror::Error`.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for the error enums used across the workspace.
///
/// # Behavior
///
/// * Adds `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * Generates a `<ErrorName>Ext` trait with `.context(...)` for `Result<T, ErrorName>`
///   and, for every variant holding a `source` field, for `Result<T, SourceError>`.
/// * Implements `From<SourceError>` for those variants so `?` works on upstream errors.
/// * Implements `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * Emits a module-local `format_context` helper for use inside `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. Only enums with named-field variants are accepted.
/// 2. A `context` field must be typed `Option<Cow<'static, str>>`.
/// 3. A variant with a source (`source` field, or `#[source]` / `#[from]`) must carry `context`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[prctx_derive::prctx_error]
/// pub enum LookupError {
///     #[error("Missing binding{}: {message}", format_context(.context))]
///     Missing { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn lookup() -> Result<(), LookupError> {
///     Err("not wired yet".into())
/// }
/// ```
#[proc_macro_attribute]
pub fn prctx_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
