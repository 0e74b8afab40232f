//! End-to-end tests of the `uaprobe` binary.
//!
//! These build the cli and are therefore ignored by default,
//! run them with `cargo test --test cli -- --ignored`.

mod utils;

mod classify;
mod config;
mod help;
