//! # Domain Models
//!
//! Pure data exchanged through action contexts: pull-request summaries, the
//! aggregated action data, view capabilities and registry configuration.
//! Keep it lean: no I/O and no logic beyond small helpers.

pub mod config;
pub mod constants;
pub mod pullrequest;
pub mod view;
