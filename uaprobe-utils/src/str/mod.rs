//! string utilities

mod search;
#[doc(inline)]
pub use search::{find_from, starts_with_ignore_ascii_case, strip_prefix_ignore_ascii_case};

/// Returns the longest prefix of `s` that is at most `max` bytes long
/// and ends on a `char` boundary.
#[must_use]
pub fn truncate_to_char_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_char_boundary() {
        for (s, max, expected) in [
            ("", 0, ""),
            ("", 10, ""),
            ("hello", 10, "hello"),
            ("hello", 5, "hello"),
            ("hello", 3, "hel"),
            ("hello", 0, ""),
            ("é", 1, ""),
            ("aé", 2, "a"),
            ("aéb", 3, "aé"),
        ] {
            assert_eq!(
                truncate_to_char_boundary(s, max),
                expected,
                "truncate_to_char_boundary({s:?}, {max})"
            );
        }
    }

    #[quickcheck_macros::quickcheck]
    fn prop_truncate_is_prefix_within_bound(s: String, max: u8) -> bool {
        let max = max as usize;
        let t = truncate_to_char_boundary(&s, max);
        t.len() <= max && s.starts_with(t)
    }
}
