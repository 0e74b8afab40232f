//! Mobile classification, independent of the browser and OS classifiers.

use smol_str::SmolStr;

use crate::MobileProfile;
use crate::rules::{
    LINUX_TOKEN, MOBILE_BROWSERS, MOBILE_DEVICES, MOBILE_HINTS, MOBILE_OS, MOBILE_SERVERS,
    first_match,
};
use crate::version::{VersionQuery, extract_version};

/// First [`MOBILE_HINTS`] token found in the lowercase `ua`, if any.
pub(crate) fn mobile_hint(ua: &str) -> Option<&'static str> {
    first_match(ua, MOBILE_HINTS).copied()
}

/// Profile of a UA string already known to be mobile.
pub(crate) fn mobile_profile(ua: &str) -> MobileProfile {
    let mut profile = MobileProfile::default();

    if let Some(browser) = first_match(ua, MOBILE_BROWSERS).copied() {
        profile.browser = browser;
        profile.browser_version = extract_version(ua, browser);
    }

    if let Some(device) = first_match(ua, MOBILE_DEVICES).copied() {
        // "sec-", "htc_": the separator is not part of the name,
        // but a leading space is part of the token (" droid")
        let device = device.trim_matches(['-', '_']);
        // blackberry9700: model number without separator
        let offset = if device == "blackberry" {
            0
        } else {
            crate::version::DEFAULT_OFFSET
        };
        profile.device_version = VersionQuery::new(device).with_offset(offset).extract(ua);
        profile.device = device.trim();
    }

    if let Some(os) = first_match(ua, MOBILE_OS).copied() {
        profile.os = os;
        profile.os_version = normalize_os_version(extract_version(ua, os));
    }

    if let Some(server) = first_match(ua, MOBILE_SERVERS).copied() {
        profile.server = server;
        profile.server_version = extract_version(ua, server);
    }

    // generic devices (mostly android based) not naming a known OS
    let identified =
        !profile.browser.is_empty() || !profile.device.is_empty() || !profile.server.is_empty();
    if profile.os.is_empty() && identified && ua.contains(LINUX_TOKEN) {
        profile.os = LINUX_TOKEN;
        profile.os_version = extract_version(ua, LINUX_TOKEN);
    }

    profile
}

/// `16_5` as reported by iOS becomes `16.5`.
fn normalize_os_version(version: SmolStr) -> SmolStr {
    if version.contains('_') {
        version.replace('_', ".").into()
    } else {
        version
    }
}
