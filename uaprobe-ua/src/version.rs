//! Version extraction from lowercase UA strings.
//!
//! A version is read from a fixed size window following a token, e.g.
//! `firefox/115.0 (x11)` yields `115.0` for the token `firefox`.

use smol_str::SmolStr;
use uaprobe_utils::str::{find_from, truncate_to_char_boundary};

/// Size of the window (in bytes) read after a token.
/// Long enough for gecko release dates and versions like `0.8.0+`.
pub const VERSION_WINDOW: usize = 15;

/// Maximum number of occurrences of a token visited by a single extraction.
pub const MAX_SCAN_ATTEMPTS: usize = 4;

/// Bytes skipped between a token and its version by default,
/// covering the separator in `opera/9.80` or `msie 7.0`.
pub const DEFAULT_OFFSET: usize = 1;

/// A single version extraction, configured per call.
///
/// ```
/// use uaprobe_ua::VersionQuery;
///
/// let ua = "mozilla/5.0 (windows; u; windows nt 5.1; en-us; rv:1.9.2) gecko/20100115";
/// assert_eq!(VersionQuery::new("rv").extract(ua), "1.9.2");
/// assert_eq!(VersionQuery::new("gecko/").with_offset(0).extract(ua), "20100115");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionQuery<'a> {
    token: &'a str,
    later_marker: Option<&'a str>,
    offset: usize,
}

impl<'a> VersionQuery<'a> {
    /// Create a query reading the version right after `token`.
    #[must_use]
    pub const fn new(token: &'a str) -> Self {
        Self {
            token,
            later_marker: None,
            offset: DEFAULT_OFFSET,
        }
    }

    /// Keep scanning for later occurrences of the token as long as `marker`
    /// is present in the UA string. Used for MSIE, where compatibility
    /// tooling injects an extra `msie` token in front of the real one.
    #[must_use]
    pub const fn prefer_later_if(mut self, marker: &'a str) -> Self {
        self.later_marker = Some(marker);
        self
    }

    /// Overwrite the number of bytes skipped after the token.
    #[must_use]
    pub const fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Extract the version from the (lowercase) `ua`.
    ///
    /// Returns an empty string if the token is not present or if
    /// what follows it does not start with a digit.
    #[must_use]
    pub fn extract(&self, ua: &str) -> SmolStr {
        let prefer_later = self.later_marker.is_some_and(|marker| ua.contains(marker));

        let mut token_end = None;
        let mut cursor = 0;
        for _ in 0..MAX_SCAN_ATTEMPTS {
            let Some(pos) = find_from(ua, self.token, cursor) else {
                break;
            };
            cursor = pos + self.token.len();
            token_end = Some(cursor);
            if !prefer_later {
                break;
            }
        }

        let Some(rest) = token_end
            .and_then(|end| end.checked_add(self.offset))
            .and_then(|start| ua.get(start..))
        else {
            return SmolStr::default();
        };
        let window = truncate_to_char_boundary(rest, VERSION_WINDOW);
        let version = window
            .split(|c: char| matches!(c, ')' | ';' | '/') || c.is_ascii_whitespace())
            .next()
            .unwrap_or_default();

        if version.starts_with(|c: char| c.is_ascii_digit()) {
            SmolStr::new(version)
        } else {
            SmolStr::default()
        }
    }
}

/// Shorthand for [`VersionQuery::new`] followed by [`VersionQuery::extract`].
#[must_use]
pub fn extract_version(ua: &str, token: &str) -> SmolStr {
    VersionQuery::new(token).extract(ua)
}

/// Leading `digits[.digits]` of a version, e.g. `7.5` for `7.5a2`.
///
/// A dangling dot is not part of the result (`14.` yields `14`).
#[must_use]
pub fn comparable_version(version: &str) -> &str {
    let digits = |s: &str| s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());

    let major = digits(version);
    if let Some(fraction) = version.get(major..).and_then(|rest| rest.strip_prefix('.')) {
        let minor = digits(fraction);
        if major > 0 && minor > 0 {
            return version.get(..major + 1 + minor).unwrap_or(version);
        }
    }
    version.get(..major).unwrap_or_default()
}

/// Numeric value of a version for magnitude comparisons.
///
/// Anything without a numeric prefix (including the empty string) counts as 0.
#[must_use]
pub fn numeric_value(version: &str) -> f64 {
    comparable_version(version).parse().unwrap_or(0.0)
}

/// Add `delta` to the major number of `version`, keeping the remainder as is.
///
/// Used to compute the real IE version from a compatibility mode token,
/// e.g. `7.0` bumped by one is `8.0`. Versions without a major number
/// are returned unchanged.
#[must_use]
pub fn bump_major(version: &str, delta: u32) -> SmolStr {
    let end = version
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(version.len());
    let (major, rest) = version.split_at(end);
    match major.parse::<u32>() {
        Ok(major) => smol_str::format_smolstr!("{}{rest}", major.saturating_add(delta)),
        Err(_) => SmolStr::new(version),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_version() {
        for (ua, token, expected) in [
            ("opera/9.80 (windows nt 6.1)", "opera", "9.80"),
            ("mozilla/4.0 (compatible; msie 6.0; windows nt 5.1)", "msie", "6.0"),
            ("googlebot/2.1 (+http://www.google.com/bot.html)", "googlebot", "2.1"),
            ("lynx/2.8.9rel.1 libwww-fm/2.14", "lynx", "2.8.9rel.1"),
            ("wget/1.21.3", "wget", "1.21.3"),
            ("iphone os 16_5 like mac os x", "iphone os", "16_5"),
            ("applewebkit/605.1.15", "webkit", "605.1.15"),
            // window is 15 bytes
            ("foo/1234567890123456789", "foo", "123456789012345"),
            // not a number
            ("mozilla/5.0 (iphone; cpu iphone os", "iphone", ""),
            ("chrome/ 115.0", "chrome", ""),
            // token at the very end
            ("chrome", "chrome", ""),
            ("chrome/", "chrome", ""),
            // token missing
            ("firefox/115.0", "chrome", ""),
            ("", "chrome", ""),
        ] {
            assert_eq!(extract_version(ua, token), expected, "ua: {ua:?}, token: {token:?}");
        }
    }

    #[test]
    fn test_extract_version_offset() {
        let ua = "blackberry9700/5.0.0.351 profile/midp-2.1";
        assert_eq!(VersionQuery::new("blackberry").extract(ua), "700");
        assert_eq!(VersionQuery::new("blackberry").with_offset(0).extract(ua), "9700");

        let ua = "omniweb/v563.15";
        assert_eq!(VersionQuery::new("omniweb").extract(ua), "");
        assert_eq!(VersionQuery::new("omniweb").with_offset(2).extract(ua), "563.15");

        // offset past the end
        assert_eq!(VersionQuery::new("omniweb").with_offset(64).extract(ua), "");
        assert_eq!(VersionQuery::new("a").with_offset(usize::MAX).extract("a1"), "");
    }

    #[test]
    fn test_extract_version_prefer_later() {
        let ua = "mozilla/4.0 (compatible; msie 8.0; msie 7.0; windows nt 6.0; trident/4.0)";
        assert_eq!(extract_version(ua, "msie"), "8.0");
        assert_eq!(
            VersionQuery::new("msie").prefer_later_if("trident/").extract(ua),
            "7.0"
        );

        // marker absent: first occurrence wins
        let ua = "mozilla/4.0 (compatible; msie 8.0; msie 7.0; windows nt 6.0)";
        assert_eq!(
            VersionQuery::new("msie").prefer_later_if("trident/").extract(ua),
            "8.0"
        );
    }

    #[test]
    fn test_extract_version_bounded_attempts() {
        let ua = "x 1; x 2; x 3; x 4; x 5; x 6";
        assert_eq!(VersionQuery::new("x").prefer_later_if("x").extract(ua), "4");
    }

    #[test]
    fn test_extract_version_multibyte() {
        assert_eq!(extract_version("foo/é1.0", "foo"), "");
        assert_eq!(extract_version("fooé1.0", "foo"), "");
        assert_eq!(extract_version("foo/1.0ééééééééé", "foo"), "1.0éééééé");
    }

    #[test]
    fn test_comparable_version() {
        for (version, expected) in [
            ("7.5a2", "7.5"),
            ("115.0.0.0", "115.0"),
            ("9.80", "9.80"),
            ("14.", "14"),
            ("14", "14"),
            ("2.8.9rel.1", "2.8"),
            ("20100101", "20100101"),
            ("", ""),
            ("abc", ""),
            (".5", ""),
        ] {
            assert_eq!(comparable_version(version), expected, "version: {version:?}");
        }
    }

    #[test]
    fn test_numeric_value() {
        assert!((numeric_value("1.9.2") - 1.9).abs() < f64::EPSILON);
        assert!((numeric_value("20020400") - 20_020_400.0).abs() < f64::EPSILON);
        assert!(numeric_value("").abs() < f64::EPSILON);
        assert!(numeric_value("beta").abs() < f64::EPSILON);
    }

    #[test]
    fn test_bump_major() {
        assert_eq!(bump_major("7.0", 1), "8.0");
        assert_eq!(bump_major("7.0", 2), "9.0");
        assert_eq!(bump_major("7.1b", 2), "9.1b");
        assert_eq!(bump_major("7", 1), "8");
        assert_eq!(bump_major("", 1), "");
        assert_eq!(bump_major("x7", 1), "x7");
    }

    #[quickcheck_macros::quickcheck]
    fn prop_extracted_version_starts_with_digit(ua: String, token: String, offset: u8) -> bool {
        let version = VersionQuery::new(&token)
            .with_offset(offset as usize)
            .extract(&ua);
        version.is_empty() || version.starts_with(|c: char| c.is_ascii_digit())
    }

    #[quickcheck_macros::quickcheck]
    fn prop_extracted_version_fits_window(ua: String, token: String) -> bool {
        extract_version(&ua, &token).len() <= VERSION_WINDOW
    }
}
