//! Operating system classification.
//!
//! The single-token [`OS_RULES`] are tried first. Only when none of them
//! matched, two named fallback stages run: [`unix_fallback`] and
//! [`linux_fallback`], the latter overriding the former.

use smol_str::SmolStr;

use crate::browser::BrowserMatch;
use crate::config::ClassifierConfig;
use crate::rules::{LINUX_DISTROS, LINUX_TOKEN, OS_RULES, OsResolver, OsRule, UNIX_TOKENS, first_match};
use crate::version::{extract_version, numeric_value};
use crate::{OsFamily, OsInfo};

/// `nt X.Y` kernel versions, most recent first.
const NT_VERSIONS: &[(&[&str], &str)] = &[
    (&["nt 10.0"], "10.0"),
    (&["nt 6.3"], "6.3"),
    (&["nt 6.2"], "6.2"),
    (&["nt 6.1"], "6.1"),
    (&["nt 6.0"], "6.0"),
    (&["nt 5.2"], "5.2"),
    (&["nt 5.1", "xp"], "5.1"),
    (&["nt 5", "2000"], "5.0"),
    (&["nt 4"], "4.0"),
    (&["nt 3"], "3.0"),
];

/// Marketing names as advertised by non-NT UA strings (e.g. old Opera).
/// Names of NT based releases remap the family onto [`OsFamily::WindowsNt`].
const WIN_VERSIONS: &[(&[&str], OsFamily, &str)] = &[
    (&["vista"], OsFamily::WindowsNt, "6.0"),
    (&["xp"], OsFamily::WindowsNt, "5.1"),
    (&["2003"], OsFamily::WindowsNt, "5.2"),
    (&["windows ce"], OsFamily::WindowsNt, "ce"),
    (&["95"], OsFamily::Windows, "95"),
    (&["9x 4.9", " me"], OsFamily::Windows, "me"),
    (&["98"], OsFamily::Windows, "98"),
    (&["2000"], OsFamily::WindowsNt, "5.0"),
];

/// Version assumed for OS X when the UA does not advertise one.
const MAC_OS_X: &str = "10";

/// Legacy placeholder version for the iPhone family.
const IPHONE: &str = "10";

fn contains_any(ua: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| ua.contains(needle))
}

/// Classify the operating system of a lowercase UA string.
///
/// Some OS resolutions depend on the browser, e.g. only
/// OS X ever shipped Safari, hence the [`BrowserMatch`].
pub(crate) fn classify_os(ua: &str, browser: &BrowserMatch, config: &ClassifierConfig) -> OsInfo {
    // "linux" collides with desktop tokens such as "mac"
    if !ua.contains(LINUX_TOKEN)
        && let Some(rule) = first_match(ua, OS_RULES)
    {
        tracing::trace!(user_agent.os = %rule.family, "os rule matched");
        return resolve_rule(ua, rule, browser, config);
    }

    let os = linux_fallback(ua).or_else(|| unix_fallback(ua)).unwrap_or_default();
    tracing::trace!(
        user_agent.os = os.family.map(|family| family.as_str()),
        user_agent.os_version = %os.version,
        "os resolved by fallback stage"
    );
    os
}

fn resolve_rule(ua: &str, rule: &OsRule, browser: &BrowserMatch, config: &ClassifierConfig) -> OsInfo {
    let mut os = OsInfo {
        family: Some(rule.family),
        version: SmolStr::default(),
    };
    match rule.resolver {
        OsResolver::Plain => (),
        OsResolver::Nt => {
            if let Some((_, version)) = NT_VERSIONS
                .iter()
                .find(|(needles, _)| contains_any(ua, needles))
            {
                os.version = SmolStr::new_static(*version);
            }
        }
        OsResolver::Win => {
            if let Some((_, family, version)) = WIN_VERSIONS
                .iter()
                .find(|(needles, _, _)| contains_any(ua, needles))
            {
                os.family = Some(*family);
                os.version = SmolStr::new_static(*version);
            }
        }
        OsResolver::Mac => os.version = mac_version(ua, browser, config),
        OsResolver::IPhone => os.version = SmolStr::new_static(IPHONE),
    }
    os
}

fn mac_version(ua: &str, browser: &BrowserMatch, config: &ClassifierConfig) -> SmolStr {
    if ua.contains("os x") {
        // os x 10_6_8 as well as os x 10.6.8
        return if ua.contains("os x ") {
            extract_version(ua, "os x").replace('_', ".").into()
        } else {
            SmolStr::new_static(MAC_OS_X)
        };
    }

    // crude: these browsers (versions) were only ever made for OS X
    let version = numeric_value(&browser.version);
    let os_x_only = browser.webkit.sub_brand == "safari"
        || browser.mozilla.sub_brand == "camino"
        || (browser.canonical_id == "moz" && version >= config.mac_gecko_min_rv)
        || (browser.canonical_id == "ie" && version >= config.mac_ie_min_version);
    if os_x_only {
        SmolStr::new_static(MAC_OS_X)
    } else {
        SmolStr::default()
    }
}

/// Unix stage: the family is unix, the version the flavour
/// (empty for the generic `unix` token).
pub(crate) fn unix_fallback(ua: &str) -> Option<OsInfo> {
    first_match(ua, UNIX_TOKENS).map(|token| OsInfo {
        family: Some(OsFamily::Unix),
        version: if *token == "unix" {
            SmolStr::default()
        } else {
            SmolStr::new_static(*token)
        },
    })
}

/// Linux stage: the family is linux, the version the distribution
/// (empty for the generic `linux` token).
pub(crate) fn linux_fallback(ua: &str) -> Option<OsInfo> {
    first_match(ua, LINUX_DISTROS).map(|token| OsInfo {
        family: Some(OsFamily::Linux),
        version: if *token == LINUX_TOKEN {
            SmolStr::default()
        } else {
            SmolStr::new_static(*token)
        },
    })
}
