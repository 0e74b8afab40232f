//! utilities crate for uaprobe
//!
//! `uaprobe-utils` contains utilities used by `uaprobe`,
//! not really being part of one of the other crates, or used
//! by plenty of other crates.
//!
//! # uaprobe
//!
//! Crate used by the end-user `uaprobe` crate and `uaprobe` crate authors alike.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

#[doc(hidden)]
#[macro_use]
pub mod macros;

pub mod str;
