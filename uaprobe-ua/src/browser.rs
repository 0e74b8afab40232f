//! Browser classification: first matching [`BROWSER_RULES`] entry,
//! refined by the family specific resolver of that rule.

use regex::Regex;
use smol_str::SmolStr;
use std::sync::LazyLock;
use uaprobe_utils::str::truncate_to_char_boundary;

use crate::config::ClassifierConfig;
use crate::rules::{
    BROWSER_RULES, BrowserResolver, BrowserRule, MOZILLA_SUB_BRANDS, SubBrandRule,
    WEBKIT_SUB_BRANDS, first_match,
};
use crate::version::{VersionQuery, bump_major, comparable_version, extract_version, numeric_value};
use crate::{IeVariant, MozillaDetail, UaCategory, WebKitDetail};

/// Sentinel used for the name and version of unrecognised browsers.
pub const UNKNOWN: &str = "unknown";

/// Gecko release dates follow `gecko/` without separator.
const GECKO_RELEASE_DATE: VersionQuery<'static> = VersionQuery::new("gecko/").with_offset(0);

/// Opera 10+ reports `9.80` followed by the real `version/10.10`.
const OPERA_REAL_VERSION: VersionQuery<'static> = VersionQuery::new("version/").with_offset(0);

/// Name of a browser not present in the rule tables,
/// extracted from the UA prefix (e.g. `curl` in `curl/8.1.2`).
static UNLISTED_BROWSER_NAME: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[^0-9][a-z]*-* *[a-z]* *[a-z]*").ok());

/// Outcome of the browser classifier.
#[derive(Debug, Clone)]
pub(crate) struct BrowserMatch {
    /// Matched token, WebKit product or name of an unlisted browser.
    pub(crate) name: SmolStr,
    /// Canonical id of the matched rule, empty if no rule matched.
    pub(crate) canonical_id: &'static str,
    /// Canonical id, or the product for the WebKit family.
    pub(crate) id: &'static str,
    pub(crate) version: SmolStr,
    pub(crate) dom: bool,
    pub(crate) safe: bool,
    /// `None` if no rule matched.
    pub(crate) category: Option<UaCategory>,
    pub(crate) ie_variant: Option<IeVariant>,
    pub(crate) true_ie_version: SmolStr,
    pub(crate) mozilla: MozillaDetail,
    pub(crate) webkit: WebKitDetail,
}

impl BrowserMatch {
    fn from_rule(rule: &BrowserRule) -> Self {
        Self {
            name: SmolStr::new_static(rule.token),
            canonical_id: rule.id,
            id: rule.id,
            version: SmolStr::default(),
            dom: rule.dom,
            safe: true,
            category: Some(rule.category),
            ie_variant: None,
            true_ie_version: SmolStr::default(),
            mozilla: MozillaDetail::default(),
            webkit: WebKitDetail::default(),
        }
    }

    fn unlisted(name: SmolStr, version: SmolStr) -> Self {
        Self {
            name,
            canonical_id: "",
            id: "",
            version,
            dom: false,
            safe: false,
            category: None,
            ie_variant: None,
            true_ie_version: SmolStr::default(),
            mozilla: MozillaDetail::default(),
            webkit: WebKitDetail::default(),
        }
    }
}

/// Classify the browser of a lowercase UA string.
pub(crate) fn classify_browser(ua: &str, config: &ClassifierConfig) -> BrowserMatch {
    let Some(rule) = first_match(ua, BROWSER_RULES) else {
        return classify_unlisted(ua);
    };
    tracing::trace!(
        user_agent.browser = rule.id,
        user_agent.token = rule.token,
        "browser rule matched"
    );

    let mut browser = BrowserMatch::from_rule(rule);
    match rule.resolver {
        BrowserResolver::Plain => browser.version = extract_version(ua, rule.token),
        BrowserResolver::LegacyNetscape => {
            browser.safe = false;
            browser.version = extract_version(ua, "mozilla");
        }
        BrowserResolver::Gecko => resolve_gecko(ua, config, &mut browser),
        BrowserResolver::Trident => resolve_trident(ua, rule, config, &mut browser),
        BrowserResolver::Opera => resolve_opera(ua, rule, config, &mut browser),
        BrowserResolver::WebKit => resolve_webkit(ua, rule, &mut browser),
    }
    browser
}

fn sub_brand_version(ua: &str, brand: &SubBrandRule) -> SmolStr {
    VersionQuery::new(brand.token)
        .with_offset(brand.version_offset)
        .extract(ua)
}

fn resolve_gecko(ua: &str, config: &ClassifierConfig, browser: &mut BrowserMatch) {
    let mut full_rv = extract_version(ua, "rv");
    let mut truncated_rv = SmolStr::new(truncate_to_char_boundary(&full_rv, 3));

    let (sub_brand, sub_brand_version) = match first_match(ua, MOZILLA_SUB_BRANDS) {
        Some(brand) => (brand.product, sub_brand_version(ua, brand)),
        None => ("", SmolStr::default()),
    };

    // products such as galeon come without rv number
    if truncated_rv.is_empty() {
        truncated_rv = SmolStr::new(comparable_version(&sub_brand_version));
        full_rv = sub_brand_version.clone();
    }

    let release_date = GECKO_RELEASE_DATE.extract(ua);
    if numeric_value(&release_date) < config.gecko_min_release_date
        || numeric_value(&truncated_rv) < config.gecko_min_rv
    {
        tracing::trace!(
            user_agent.release_date = %release_date,
            user_agent.rv = %truncated_rv,
            "pre-standards gecko engine"
        );
        browser.safe = false;
    }

    browser.version = truncated_rv.clone();
    browser.mozilla = MozillaDetail {
        sub_brand,
        sub_brand_version,
        truncated_rv,
        full_rv,
        release_date,
    };
}

fn resolve_trident(
    ua: &str,
    rule: &BrowserRule,
    config: &ClassifierConfig,
    browser: &mut BrowserMatch,
) {
    let version = VersionQuery::new(rule.token)
        .prefer_later_if("trident/")
        .extract(ua);

    // compatibility mode: IE 8 and 9 can report themselves as IE 7
    if version.starts_with("7.") {
        if ua.contains("trident/5") {
            browser.true_ie_version = bump_major(&version, 2);
        } else if ua.contains("trident/4") {
            browser.true_ie_version = bump_major(&version, 1);
        }
    }

    let number = numeric_value(&version);
    let thresholds = &config.ie;
    let variant = if number >= thresholds.modern {
        IeVariant::Ie9x
    } else if number >= thresholds.transitional {
        IeVariant::Ie7x
    } else if ua.contains("mac") {
        IeVariant::IeMac
    } else if number >= thresholds.legacy {
        IeVariant::Ie5x
    } else if number > thresholds.ancient {
        browser.dom = false;
        browser.safe = true;
        IeVariant::Ie4
    } else {
        browser.dom = false;
        browser.safe = false;
        IeVariant::Old
    };

    browser.version = version;
    browser.ie_variant = Some(variant);
}

fn resolve_opera(
    ua: &str,
    rule: &BrowserRule,
    config: &ClassifierConfig,
    browser: &mut BrowserMatch,
) {
    let mut version = extract_version(ua, rule.token);
    if version.starts_with("9.") && ua.contains("version/") {
        version = OPERA_REAL_VERSION.extract(ua);
    }
    if numeric_value(&version) < config.opera_min_version {
        browser.safe = false;
    }
    browser.version = version;
}

fn resolve_webkit(ua: &str, rule: &BrowserRule, browser: &mut BrowserMatch) {
    let engine_build = extract_version(ua, rule.token);

    if let Some(brand) = first_match(ua, WEBKIT_SUB_BRANDS) {
        browser.name = SmolStr::new_static(brand.product);
        browser.id = brand.product;
        browser.webkit.sub_brand = brand.product;
        browser.webkit.sub_brand_version = sub_brand_version(ua, brand);
    }

    // the WebKit family reports the engine build, the product
    // version lives in the webkit details
    browser.version = engine_build.clone();
    browser.webkit.engine_build = engine_build;
}

/// Fallback for UA strings matching none of the [`BROWSER_RULES`]:
/// most of these start with `name/version`.
fn classify_unlisted(ua: &str) -> BrowserMatch {
    let prefix = ua
        .find(['(', ')', ';'])
        .and_then(|end| ua.get(..end))
        .unwrap_or(ua);

    let name = UNLISTED_BROWSER_NAME
        .as_ref()
        .and_then(|re| re.find(prefix))
        .map(|m| m.as_str());

    match name {
        Some(name) => {
            // blackberry9700/5.0.0: model number directly follows the name
            let offset = if name == "blackberry" {
                0
            } else {
                crate::version::DEFAULT_OFFSET
            };
            let version = VersionQuery::new(name).with_offset(offset).extract(ua);
            tracing::debug!(
                user_agent.browser = name,
                user_agent.version = %version,
                "browser not listed, using name from ua prefix"
            );
            BrowserMatch::unlisted(SmolStr::new(name), version)
        }
        None => {
            tracing::debug!("browser not recognised");
            BrowserMatch::unlisted(SmolStr::new_static(UNKNOWN), SmolStr::new_static(UNKNOWN))
        }
    }
}
