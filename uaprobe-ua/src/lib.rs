//! User Agent (UA) classification.
//!
//! This crate classifies a raw `User-Agent` (header) value into structured facts:
//! the browser family and version, rendering engine details, the operating system
//! and its version, a mobile device profile and a coarse [`UaCategory`].
//!
//! ```
//! use uaprobe_ua::{classify, OsFamily, UaCategory};
//!
//! let ua = classify("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36");
//! assert_eq!(ua.browser_id(), "chrome");
//! assert_eq!(ua.category(), UaCategory::Browser);
//! assert_eq!(ua.os().family, Some(OsFamily::WindowsNt));
//! assert!(!ua.is_legacy_or_unsafe());
//! ```
//!
//! Use [`UaClassifier`] directly to tweak the heuristics via a [`ClassifierConfig`],
//! or [`UserAgent`] to keep the header value together with its classification.
//!
//! # How it works
//!
//! The UA string is lowercased and scanned against ordered token [`rules`].
//! The first rule whose token occurs in the UA string wins, so a more
//! specific token is always listed before a generic one. Versions are read
//! from a small window following a token (see [`VersionQuery`]).
//!
//! Browser and OS are classified first, as some OS resolutions depend on the
//! browser. Mobile classification runs independently, and a UA with a mobile
//! hint is always in the [`UaCategory::Mobile`] category.
//!
//! # Remarks
//!
//! This is a best-effort heuristic classifier, not a grammar based parser.
//! Its accuracy is bounded by the completeness of its token tables,
//! UA strings of browsers released after the tables were authored may
//! well be misclassified. Classification never fails: anything not
//! recognised degrades to empty values or an `unknown` browser,
//! categorised as [`UaCategory::Bot`].
//!
//! # uaprobe
//!
//! Crate used by the end-user `uaprobe` crate and `uaprobe` crate authors alike.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(test, allow(clippy::float_cmp))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

mod info;
pub use info::{
    IeVariant, MobileProfile, MozillaDetail, OsFamily, OsInfo, UaCategory, WebKitDetail,
};

pub mod rules;

mod version;
pub use version::{
    DEFAULT_OFFSET, MAX_SCAN_ATTEMPTS, VERSION_WINDOW, VersionQuery, bump_major,
    comparable_version, extract_version, numeric_value,
};

mod config;
pub use config::{ClassifierConfig, IeThresholds};

mod browser;
pub use browser::UNKNOWN;

mod mobile;
mod os;

mod classify;
pub use classify::{UaClassification, UaClassifier, classify};

mod agent;
pub use agent::UserAgent;
