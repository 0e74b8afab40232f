//! Error types for uaprobe.
//!
//! The classifier itself never fails: every failed lookup degrades to an empty
//! or "unknown" value. Errors only show up at the edges, such as parsing a
//! category from a string or loading a configuration file. For those edges
//! this crate provides:
//!
//! - [`BoxError`]: type-erased error used where the concrete type is irrelevant;
//! - [`OpaqueError`]: a concrete wrapper around such a [`BoxError`];
//! - [`ErrorContext`]: adds human readable context to a `Result` or `Option`.
//!
//! # uaprobe
//!
//! Crate used by the end-user `uaprobe` crate and `uaprobe` crate authors alike.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

use std::error::Error as StdError;

/// Alias for a type-erased error type.
pub type BoxError = Box<dyn StdError + Send + Sync>;

mod ext;
pub use ext::{ErrorContext, OpaqueError};
