//! # Context Errors
//!
//! Failures of key registration and context access. Absent bindings are not errors:
//! lookups return `None`, only [`ContextError::MissingData`] turns an absence into a
//! failure for callers that explicitly ask for it.

use std::borrow::Cow;

/// Errors raised by the key registry and the context containers.
#[prctx_derive::prctx_error]
pub enum ContextError {
    /// A key identifier was registered twice. Programming error, reported at startup.
    #[error("Duplicate key{}: {message}", format_context(.context))]
    DuplicateKey { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The identifier is empty, malformed or outside the allowed namespaces.
    #[error("Invalid key{}: {message}", format_context(.context))]
    InvalidKey { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The identifier is not known to the registry.
    #[error("Unregistered key{}: {message}", format_context(.context))]
    UnregisteredKey { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The identifier is registered for a different value type.
    #[error("Type mismatch{}: {message}", format_context(.context))]
    TypeMismatch { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A required binding is absent from the context.
    #[error("Missing data{}: {message}", format_context(.context))]
    MissingData { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A write-once binding was set a second time.
    #[error("Key already bound{}: {message}", format_context(.context))]
    AlreadyBound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues.
    #[error("Internal context error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
