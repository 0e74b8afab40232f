/// Finds the first occurrence of `needle` within `haystack`,
/// starting the search at byte offset `from`.
///
/// The returned index is a byte offset into the full `haystack`.
/// Returns `None` when `from` is out of bounds or not on a `char` boundary.
#[must_use]
pub fn find_from(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    haystack
        .get(from..)
        .and_then(|tail| tail.find(needle))
        .map(|index| index + from)
}

/// Returns `true` if `s` starts with `sub`, using ASCII case insensitive comparison.
///
/// If `sub` is empty, this returns `true`.
pub fn starts_with_ignore_ascii_case<T1, T2>(s: T1, sub: T2) -> bool
where
    T1: AsRef<[u8]>,
    T2: AsRef<[u8]>,
{
    let s = s.as_ref();
    let sub = sub.as_ref();

    let n = sub.len();

    s.get(..n)
        .is_some_and(|start| start.eq_ignore_ascii_case(sub))
}

/// Returns `s` without `prefix` if it starts with it,
/// using ASCII case insensitive comparison.
#[must_use]
pub fn strip_prefix_ignore_ascii_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    if starts_with_ignore_ascii_case(s, prefix) {
        s.get(prefix.len()..)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_ignore_ascii_case() {
        assert!(starts_with_ignore_ascii_case("user-agent", "user"));
        assert!(starts_with_ignore_ascii_case("User-Agent", "user"));
        assert!(starts_with_ignore_ascii_case("USER-AGENT", "user"));
        assert!(!starts_with_ignore_ascii_case("user-agent", "agent"));
        assert!(!starts_with_ignore_ascii_case("User-Agent", "agent"));
    }

    #[test]
    fn test_starts_with_ignore_ascii_case_empty_sub() {
        assert!(starts_with_ignore_ascii_case("foo", ""));
        assert!(starts_with_ignore_ascii_case("", ""));
    }

    #[test]
    fn test_strip_prefix_ignore_ascii_case() {
        assert_eq!(
            strip_prefix_ignore_ascii_case("User-Agent: curl/8.0", "user-agent:"),
            Some(" curl/8.0")
        );
        assert_eq!(
            strip_prefix_ignore_ascii_case("USER-AGENT:x", "user-agent:"),
            Some("x")
        );
        assert_eq!(strip_prefix_ignore_ascii_case("curl/8.0", "user-agent:"), None);
        assert_eq!(strip_prefix_ignore_ascii_case("", "user-agent:"), None);
    }

    #[test]
    fn test_find_from() {
        for (haystack, needle, from, expected) in [
            ("msie 6.0; msie 8.0", "msie", 0, Some(0)),
            ("msie 6.0; msie 8.0", "msie", 1, Some(10)),
            ("msie 6.0; msie 8.0", "msie", 4, Some(10)),
            ("msie 6.0; msie 8.0", "msie", 11, None),
            ("msie", "msie", 4, None),
            ("msie", "msie", 5, None),
            ("", "msie", 0, None),
            ("abc", "", 1, Some(1)),
        ] {
            assert_eq!(
                find_from(haystack, needle, from),
                expected,
                "find_from({haystack:?}, {needle:?}, {from})"
            );
        }
    }

    #[test]
    fn test_find_from_not_on_char_boundary() {
        assert_eq!(find_from("éa", "a", 1), None);
        assert_eq!(find_from("éa", "a", 2), Some(2));
    }

    #[quickcheck_macros::quickcheck]
    fn prop_find_from_zero_is_find(haystack: String, needle: String) -> bool {
        find_from(&haystack, &needle, 0) == haystack.find(needle.as_str())
    }
}
