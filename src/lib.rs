//! 🔎 uaprobe classifies `User-Agent` strings.
//!
//! Given the raw value of a `User-Agent` header, uaprobe tells you which browser
//! (or bot, library, downloader) sent it, its version, the rendering engine,
//! the operating system and, for handhelds, a mobile device profile.
//! Legacy browsers that lack modern DOM support or are considered unsafe are flagged as such.
//!
//! ```
//! use uaprobe::ua::{UaCategory, UserAgent};
//!
//! let ua = UserAgent::new("Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0");
//! let info = ua.classification();
//! assert_eq!(info.browser_id(), "moz");
//! assert_eq!(info.mozilla().sub_brand, "firefox");
//! assert_eq!(info.category(), UaCategory::Browser);
//! ```
//!
//! | crate | module | purpose |
//! |-|-|-|
//! | `uaprobe-ua` | [`ua`] | rule tables, version extraction and the classifiers |
//! | `uaprobe-error` | [`error`] | error types shared by the crates and the cli |
//! | `uaprobe-utils` | [`utils`] | ASCII case-insensitive string helpers |
//!
//! The `uaprobe` binary (crate `uaprobe-cli`) exposes the classifier on the command line.
//!
//! Classification is heuristic: the token tables describe the browsers known
//! when they were authored, newer browsers may be misclassified.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(test, allow(clippy::float_cmp))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

pub mod error {
    //! Error types and utilities.

    #[doc(inline)]
    pub use ::uaprobe_error::*;
}

pub mod utils {
    //! Utilities used across the uaprobe crates.

    #[doc(inline)]
    pub use ::uaprobe_utils::*;
}

pub mod ua {
    //! User Agent (UA) classification.

    #[doc(inline)]
    pub use ::uaprobe_ua::*;
}
