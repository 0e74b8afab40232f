//! Ordered token tables driving the classifiers.
//!
//! Every table is scanned front to back and the first entry whose token
//! occurs in the (lowercase) UA string wins. Order is therefore part of the
//! data: a more specific token must always be listed before a more generic
//! one that could also match (e.g. `webkit` before the bare `gecko`).

mod browser;
pub use browser::{
    BROWSER_RULES, BrowserResolver, BrowserRule, MOZILLA_SUB_BRANDS, SubBrandRule,
    WEBKIT_SUB_BRANDS,
};

mod os;
pub use os::{LINUX_DISTROS, LINUX_TOKEN, OS_RULES, OsResolver, OsRule, UNIX_TOKENS};

mod mobile;
pub use mobile::{MOBILE_BROWSERS, MOBILE_DEVICES, MOBILE_HINTS, MOBILE_OS, MOBILE_SERVERS};

/// A table entry identified by a single substring token.
pub trait TokenRule {
    /// The lowercase token searched for in the UA string.
    fn token(&self) -> &str;
}

impl TokenRule for &str {
    fn token(&self) -> &str {
        self
    }
}

/// Returns the first rule of `rules` whose token occurs in `ua`.
///
/// This is the only scan loop used by the classifiers,
/// later rules are never consulted once a rule matched.
pub fn first_match<'r, R: TokenRule>(ua: &str, rules: &'r [R]) -> Option<&'r R> {
    rules.iter().find(|rule| ua.contains(rule.token()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_respects_table_order() {
        let rules = ["webkit", "gecko"];
        assert_eq!(
            first_match("applewebkit/537.36 (khtml, like gecko)", &rules),
            Some(&"webkit")
        );
        let reversed = ["gecko", "webkit"];
        assert_eq!(
            first_match("applewebkit/537.36 (khtml, like gecko)", &reversed),
            Some(&"gecko")
        );
        assert_eq!(first_match("lynx/2.8.9", &rules), None);
        assert_eq!(first_match("", &rules), None);
    }

    #[test]
    fn test_browser_table_prefers_webkit_over_gecko() {
        let rule = first_match(
            "mozilla/5.0 (x11) applewebkit/537.36 (khtml, like gecko) chrome/115.0",
            BROWSER_RULES,
        )
        .unwrap();
        assert_eq!(rule.id, "webkit");
    }

    #[test]
    fn test_tables_are_lowercase() {
        let tokens = BROWSER_RULES
            .iter()
            .map(|rule| rule.token)
            .chain(MOZILLA_SUB_BRANDS.iter().map(|rule| rule.token))
            .chain(WEBKIT_SUB_BRANDS.iter().map(|rule| rule.token))
            .chain(OS_RULES.iter().map(|rule| rule.token))
            .chain(UNIX_TOKENS.iter().copied())
            .chain(LINUX_DISTROS.iter().copied())
            .chain(MOBILE_HINTS.iter().copied())
            .chain(MOBILE_BROWSERS.iter().copied())
            .chain(MOBILE_DEVICES.iter().copied())
            .chain(MOBILE_OS.iter().copied())
            .chain(MOBILE_SERVERS.iter().copied());
        for token in tokens {
            assert!(!token.is_empty());
            assert_eq!(token, token.to_ascii_lowercase(), "token {token:?}");
        }
    }

    #[test]
    fn test_generic_sentinels_come_last() {
        assert_eq!(MOZILLA_SUB_BRANDS.last().map(|rule| rule.token), Some("rv"));
        assert_eq!(WEBKIT_SUB_BRANDS.last().map(|rule| rule.token), Some("webkit"));
        assert_eq!(UNIX_TOKENS.last().copied(), Some("unix"));
        assert_eq!(LINUX_DISTROS.last().copied(), Some(LINUX_TOKEN));
    }
}
