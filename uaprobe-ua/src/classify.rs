use serde::Serialize;
use smol_str::SmolStr;
use std::sync::LazyLock;
use uaprobe_utils::str::truncate_to_char_boundary;

use crate::browser::classify_browser;
use crate::mobile::{mobile_hint, mobile_profile};
use crate::os::classify_os;
use crate::version::comparable_version;
use crate::{
    ClassifierConfig, IeVariant, MobileProfile, MozillaDetail, OsInfo, UaCategory, WebKitDetail,
};

static DEFAULT_CLASSIFIER: LazyLock<UaClassifier> = LazyLock::new(UaClassifier::new);

/// Classify a UA string using the default [`ClassifierConfig`].
///
/// ```
/// use uaprobe_ua::{classify, UaCategory};
///
/// let ua = classify("Googlebot/2.1 (+http://www.google.com/bot.html)");
/// assert_eq!(ua.category(), UaCategory::Bot);
/// assert_eq!(ua.browser_id(), "google");
/// assert_eq!(ua.browser_version(), "2.1");
/// ```
#[must_use]
pub fn classify(ua: &str) -> UaClassification {
    DEFAULT_CLASSIFIER.classify(ua)
}

/// Classifier of UA strings into a [`UaClassification`].
///
/// The classifier holds no state besides its configuration,
/// classifying the same UA string always yields the same result.
#[derive(Debug, Clone, Default)]
pub struct UaClassifier {
    config: ClassifierConfig,
}

impl UaClassifier {
    /// Create a new [`UaClassifier`] using the default [`ClassifierConfig`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new [`UaClassifier`] using a custom [`ClassifierConfig`].
    #[must_use]
    pub fn with_config(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// The [`ClassifierConfig`] used by this classifier.
    #[must_use]
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify a raw UA string (case insensitive).
    ///
    /// Never fails: unrecognised input results in a [`UaCategory::Bot`]
    /// classification with an `unknown` browser.
    #[must_use]
    pub fn classify(&self, ua: &str) -> UaClassification {
        let ua = match self.config.max_ua_length {
            Some(max) if ua.len() > max => {
                tracing::debug!(
                    user_agent.len = ua.len(),
                    max_ua_length = max,
                    "truncate user agent before classification"
                );
                truncate_to_char_boundary(ua, max)
            }
            _ => ua,
        };
        let ua = ua.to_ascii_lowercase();

        let browser = classify_browser(&ua, &self.config);
        let os = classify_os(&ua, &browser, &self.config);
        let mobile_hint = mobile_hint(&ua);
        let mobile = mobile_hint.map(|_| mobile_profile(&ua));

        let category = if mobile_hint.is_some() {
            UaCategory::Mobile
        } else {
            browser.category.unwrap_or(UaCategory::Bot)
        };

        let comparable_version = SmolStr::new(comparable_version(&browser.version));

        tracing::trace!(
            user_agent.category = %category,
            user_agent.browser = browser.id,
            user_agent.version = %browser.version,
            user_agent.os = os.family.map(|family| family.as_str()),
            user_agent.mobile_hint = mobile_hint,
            "user agent classified"
        );

        UaClassification {
            browser_id: browser.id,
            canonical_id: browser.canonical_id,
            browser_name: browser.name,
            browser_version: browser.version,
            comparable_version,
            true_ie_version: browser.true_ie_version,
            ie_variant: browser.ie_variant,
            dom: browser.dom,
            legacy_or_unsafe: !browser.safe,
            category,
            os,
            mozilla: browser.mozilla,
            webkit: browser.webkit,
            mobile_hint: mobile_hint.unwrap_or_default(),
            mobile,
        }
    }
}

/// Everything known about a UA string, see [`UaClassifier::classify`].
///
/// Values are extracted from the lowercase UA string, so
/// the original casing is not preserved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UaClassification {
    browser_id: &'static str,
    canonical_id: &'static str,
    browser_name: SmolStr,
    browser_version: SmolStr,
    comparable_version: SmolStr,
    true_ie_version: SmolStr,
    ie_variant: Option<IeVariant>,
    dom: bool,
    legacy_or_unsafe: bool,
    category: UaCategory,
    os: OsInfo,
    mozilla: MozillaDetail,
    webkit: WebKitDetail,
    mobile_hint: &'static str,
    mobile: Option<MobileProfile>,
}

impl UaClassification {
    /// Id of the browser, e.g. `ie`, `moz` or `google`.
    ///
    /// For the WebKit family this is the product (`chrome`, `safari`, ...),
    /// see [`Self::canonical_id`] for the engine. Empty if the browser is
    /// not listed in the rule tables.
    #[must_use]
    pub fn browser_id(&self) -> &str {
        self.browser_id
    }

    /// Canonical id of the matched browser rule (`webkit` for Chrome).
    #[must_use]
    pub fn canonical_id(&self) -> &str {
        self.canonical_id
    }

    /// Matched token, WebKit product or the name guessed for unlisted browsers.
    /// `unknown` if no name could be found.
    #[must_use]
    pub fn browser_name(&self) -> &str {
        &self.browser_name
    }

    /// Version of the browser. For the Gecko family this is the truncated rv
    /// number and for the WebKit family the engine build.
    #[must_use]
    pub fn browser_version(&self) -> &str {
        &self.browser_version
    }

    /// Numeric (`digits[.digits]`) prefix of [`Self::browser_version`].
    #[must_use]
    pub fn comparable_version(&self) -> &str {
        &self.comparable_version
    }

    /// Real version of IE running in compatibility mode
    /// (e.g. `8.0` for an `msie 7.0` token), empty otherwise.
    #[must_use]
    pub fn true_ie_version(&self) -> &str {
        &self.true_ie_version
    }

    #[must_use]
    pub fn ie_variant(&self) -> Option<IeVariant> {
        self.ie_variant
    }

    /// Whether the browser supports the DOM.
    #[must_use]
    pub fn dom(&self) -> bool {
        self.dom
    }

    /// Old or unknown browsers one should not rely on.
    #[must_use]
    pub fn is_legacy_or_unsafe(&self) -> bool {
        self.legacy_or_unsafe
    }

    #[must_use]
    pub fn category(&self) -> UaCategory {
        self.category
    }

    #[must_use]
    pub fn os(&self) -> &OsInfo {
        &self.os
    }

    /// Gecko details, with empty values for other browsers.
    #[must_use]
    pub fn mozilla(&self) -> &MozillaDetail {
        &self.mozilla
    }

    /// WebKit details, with empty values for other browsers.
    #[must_use]
    pub fn webkit(&self) -> &WebKitDetail {
        &self.webkit
    }

    /// First mobile indicating token of the UA string, empty if not mobile.
    #[must_use]
    pub fn mobile_hint(&self) -> &str {
        self.mobile_hint
    }

    /// Profile of the mobile device, `None` if not mobile.
    #[must_use]
    pub fn mobile(&self) -> Option<&MobileProfile> {
        self.mobile.as_ref()
    }

    #[must_use]
    pub fn is_ipad(&self) -> bool {
        self.mobile_device() == "ipad"
    }

    #[must_use]
    pub fn is_ipod(&self) -> bool {
        self.mobile_device() == "ipod"
    }

    #[must_use]
    pub fn is_iphone(&self) -> bool {
        self.mobile_device() == "iphone"
    }

    /// Mobile OS is android, android tablets included.
    #[must_use]
    pub fn is_android(&self) -> bool {
        self.mobile.as_ref().is_some_and(|mobile| mobile.os == "android")
    }

    #[must_use]
    pub fn is_blackberry(&self) -> bool {
        self.mobile_device() == "blackberry"
    }

    #[must_use]
    pub fn is_nokia(&self) -> bool {
        self.mobile_device() == "nokia"
    }

    /// Whether this is a handheld: an iPod, iPhone, Android,
    /// BlackBerry or Nokia device. iPads only count when
    /// `include_tablets` is set.
    #[must_use]
    pub fn is_mobile(&self, include_tablets: bool) -> bool {
        (include_tablets && self.is_ipad())
            || self.is_ipod()
            || self.is_iphone()
            || self.is_android()
            || self.is_blackberry()
            || self.is_nokia()
    }

    fn mobile_device(&self) -> &str {
        self.mobile.as_ref().map(|mobile| mobile.device).unwrap_or_default()
    }
}
