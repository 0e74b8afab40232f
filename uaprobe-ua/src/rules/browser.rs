use super::TokenRule;
use crate::UaCategory;

/// How the version and capability facts of a matched [`BrowserRule`] are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrowserResolver {
    /// Version directly follows the matched token.
    Plain,
    /// Netscape 4 and older, version follows the `mozilla` token.
    LegacyNetscape,
    /// Gecko family: rv number, sub-brand and engine release date.
    Gecko,
    /// Trident / MSIE, including compatibility mode detection.
    Trident,
    /// Opera, including the frozen `9.80` version.
    Opera,
    /// WebKit family: engine build and consumer sub-brand.
    WebKit,
}

/// A browser table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BrowserRule {
    /// Lowercase token searched for in the UA string.
    pub token: &'static str,
    /// Default DOM capability of this browser.
    pub dom: bool,
    /// Canonical id of the browser (family).
    pub id: &'static str,
    /// Category the UA falls in when this rule matches.
    pub category: UaCategory,
    /// Family specific resolution of the version.
    pub resolver: BrowserResolver,
}

impl TokenRule for BrowserRule {
    fn token(&self) -> &str {
        self.token
    }
}

const fn rule(
    token: &'static str,
    dom: bool,
    id: &'static str,
    category: UaCategory,
    resolver: BrowserResolver,
) -> BrowserRule {
    BrowserRule {
        token,
        dom,
        id,
        category,
        resolver,
    }
}

const fn plain(token: &'static str, dom: bool, id: &'static str, category: UaCategory) -> BrowserRule {
    rule(token, dom, id, category, BrowserResolver::Plain)
}

const fn bot(token: &'static str, id: &'static str) -> BrowserRule {
    plain(token, false, id, UaCategory::Bot)
}

/// Browser rules in priority order.
pub static BROWSER_RULES: &[BrowserRule] = &[
    rule("opera", true, "op", UaCategory::Browser, BrowserResolver::Opera),
    rule("msie", true, "ie", UaCategory::Browser, BrowserResolver::Trident),
    // webkit UAs claim to be "like gecko"
    rule("webkit", true, "webkit", UaCategory::Browser, BrowserResolver::WebKit),
    plain("konqueror", true, "konq", UaCategory::Browser),
    rule("gecko", true, "moz", UaCategory::Browser, BrowserResolver::Gecko),
    plain("netpositive", false, "netp", UaCategory::BasicBrowser),
    plain("lynx", false, "lynx", UaCategory::BasicBrowser),
    plain("elinks ", false, "elinks", UaCategory::BasicBrowser),
    plain("elinks", false, "elinks", UaCategory::BasicBrowser),
    plain("links2", false, "links2", UaCategory::BasicBrowser),
    plain("links ", false, "links", UaCategory::BasicBrowser),
    plain("links", false, "links", UaCategory::BasicBrowser),
    plain("w3m", false, "w3m", UaCategory::BasicBrowser),
    plain("webtv", false, "webtv", UaCategory::BasicBrowser),
    plain("amaya", false, "amaya", UaCategory::BasicBrowser),
    plain("dillo", false, "dillo", UaCategory::BasicBrowser),
    plain("ibrowse", false, "ibrowse", UaCategory::BasicBrowser),
    plain("icab", false, "icab", UaCategory::Browser),
    rule("crazy browser", true, "ie", UaCategory::Browser, BrowserResolver::Trident),
    // search engine spiders
    bot("googlebot", "google"),
    bot("mediapartners-google", "adsense"),
    bot("yahoo-verticalcrawler", "yahoo"),
    bot("yahoo! slurp", "yahoo"),
    bot("yahoo-mm", "yahoomm"),
    bot("inktomi", "inktomi"),
    bot("slurp", "inktomi"),
    bot("fast-webcrawler", "fast"),
    bot("msnbot", "msn"),
    bot("ask jeeves", "ask"),
    bot("teoma", "ask"),
    bot("scooter", "scooter"),
    bot("openbot", "openbot"),
    bot("ia_archiver", "ia_archiver"),
    bot("zyborg", "looksmart"),
    bot("almaden", "ibm"),
    bot("baiduspider", "baidu"),
    bot("psbot", "psbot"),
    bot("gigabot", "gigabot"),
    bot("naverbot", "naverbot"),
    bot("surveybot", "surveybot"),
    bot("boitho.com-dc", "boitho"),
    bot("objectssearch", "objectsearch"),
    bot("answerbus", "answerbus"),
    bot("sohu-search", "sohu"),
    bot("iltrovatore-setaccio", "il-set"),
    // http libraries, the validators embed libwww-perl so they go first
    plain("w3c_validator", false, "w3c", UaCategory::Library),
    plain("wdg_validator", false, "wdg", UaCategory::Library),
    plain("libwww-perl", false, "libwww-perl", UaCategory::Library),
    plain("jakarta commons-httpclient", false, "jakarta", UaCategory::Library),
    plain("python-urllib", false, "python-urllib", UaCategory::Library),
    // downloaders
    plain("getright", false, "getright", UaCategory::Downloader),
    plain("wget", false, "wget", UaCategory::Downloader),
    // last, so spiders claiming mozilla compatibility are caught above
    rule("mozilla/4.", false, "ns", UaCategory::BasicBrowser, BrowserResolver::LegacyNetscape),
    rule("mozilla/3.", false, "ns", UaCategory::BasicBrowser, BrowserResolver::LegacyNetscape),
    rule("mozilla/2.", false, "ns", UaCategory::BasicBrowser, BrowserResolver::LegacyNetscape),
];

/// A product built on top of a rendering engine (e.g. Firefox on Gecko).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubBrandRule {
    /// Lowercase token searched for in the UA string.
    pub token: &'static str,
    /// Product name reported for this token.
    pub product: &'static str,
    /// Bytes skipped between the token and its version.
    pub version_offset: usize,
}

impl TokenRule for SubBrandRule {
    fn token(&self) -> &str {
        self.token
    }
}

const fn brand(token: &'static str) -> SubBrandRule {
    SubBrandRule {
        token,
        product: token,
        version_offset: crate::version::DEFAULT_OFFSET,
    }
}

/// Gecko based products. `netscape6` must precede `netscape`,
/// and the generic `rv` sentinel (plain mozilla) comes last.
pub static MOZILLA_SUB_BRANDS: &[SubBrandRule] = &[
    brand("bonecho"),
    brand("camino"),
    brand("epiphany"),
    brand("firebird"),
    brand("flock"),
    brand("galeon"),
    brand("iceape"),
    brand("icecat"),
    brand("k-meleon"),
    brand("minimo"),
    brand("multizilla"),
    brand("phoenix"),
    brand("songbird"),
    brand("swiftfox"),
    brand("seamonkey"),
    brand("shiretoko"),
    brand("iceweasel"),
    brand("firefox"),
    brand("minefield"),
    brand("netscape6"),
    brand("netscape"),
    SubBrandRule {
        token: "rv",
        product: "mozilla",
        version_offset: crate::version::DEFAULT_OFFSET,
    },
];

/// WebKit based products, falling back to the engine itself.
pub static WEBKIT_SUB_BRANDS: &[SubBrandRule] = &[
    brand("arora"),
    brand("chrome"),
    brand("epiphany"),
    // temporary id used by epiphany
    SubBrandRule {
        token: "gtklauncher",
        product: "epiphany",
        version_offset: crate::version::DEFAULT_OFFSET,
    },
    brand("konqueror"),
    brand("midori"),
    // omniweb/v563.15
    SubBrandRule {
        token: "omniweb",
        product: "omniweb",
        version_offset: 2,
    },
    brand("safari"),
    brand("uzbl"),
    brand("applewebkit"),
    brand("webkit"),
];
