//! Mobile tables. [`MOBILE_HINTS`] only holds tokens that always indicate
//! a handheld, it is therefore not the plain union of the other tables.

/// Gate tokens: OS names, device models, mobile browsers and carrier portals.
/// `ipod` must precede `iphone`.
pub static MOBILE_HINTS: &[&str] = &[
    // os
    "android",
    "epoc",
    "linux armv",
    "palmos",
    "palmsource",
    "windows ce",
    "windows phone os",
    "symbianos",
    "symbian os",
    "symbian",
    "webos",
    // devices
    "benq",
    "blackberry",
    "danger hiptop",
    "ddipocket",
    " droid",
    "ipad",
    "ipod",
    "iphone",
    "kindle",
    "lge-cx",
    "lge-lx",
    "lge-mx",
    "lge vx",
    "lge ",
    "lge-",
    "lg;lx",
    "nintendo wii",
    "nokia",
    "palm",
    "pdxgw",
    "playstation",
    "sagem",
    "samsung",
    "sec-sgh",
    "sharp",
    "sonyericsson",
    "sprint",
    "zune",
    "j-phone",
    "n410",
    "mot 24",
    "mot-",
    "htc-",
    "htc_",
    "htc ",
    "sec-",
    "sie-m",
    "sie-s",
    "spv ",
    "vodaphone",
    "smartphone",
    "armv",
    "midp",
    "mobilephone",
    // browsers
    "avantgo",
    "blazer",
    "elaine",
    "eudoraweb",
    "iemobile",
    "minimo",
    "mobile safari",
    "mobileexplorer",
    "opera mobi",
    "opera mini",
    "netfront",
    "opwv",
    "polaris",
    "semc-browser",
    "up.browser",
    "webpro",
    "wms pie",
    "xiino",
    // carrier services and portals
    "astel",
    "docomo",
    "novarra-vision",
    "portalmmm",
    "reqwirelessweb",
    "vodafone",
];

/// Mobile browsers, these do not identify the OS.
pub static MOBILE_BROWSERS: &[&str] = &[
    "avantgo",
    "blazer",
    "elaine",
    "eudoraweb",
    "iemobile",
    "minimo",
    "mobile safari",
    "mobileexplorer",
    "opera mobi",
    "opera mini",
    "netfront",
    "opwv",
    "polaris",
    "semc-browser",
    "up.browser",
    "webpro",
    "wms pie",
    "xiino",
];

/// Mobile devices, easiest to detect first. `milestone` is too generic
/// for [`MOBILE_HINTS`] but fine once a hint matched.
pub static MOBILE_DEVICES: &[&str] = &[
    "benq",
    "blackberry",
    "danger hiptop",
    "ddipocket",
    " droid",
    "htc_dream",
    "htc espresso",
    "htc hero",
    "htc halo",
    "htc huangshan",
    "htc legend",
    "htc liberty",
    "htc paradise",
    "htc supersonic",
    "htc tattoo",
    "ipad",
    "ipod",
    "iphone",
    "kindle",
    "lge-cx",
    "lge-lx",
    "lge-mx",
    "lge vx",
    "lg;lx",
    "nintendo wii",
    "nokia",
    "palm",
    "pdxgw",
    "playstation",
    "sagem",
    "samsung",
    "sec-sgh",
    "sharp",
    "sonyericsson",
    "sprint",
    "zunehd",
    "zune",
    "j-phone",
    "milestone",
    "n410",
    "mot 24",
    "mot-",
    "htc-",
    "htc_",
    "htc ",
    "lge ",
    "lge-",
    "sec-",
    "sie-m",
    "sie-s",
    "spv ",
    "smartphone",
    "armv",
    "midp",
    "mobilephone",
];

/// Mobile operating systems. A bare `linux` is too generic to list here,
/// `cpu os` is how iPads report their OS version.
pub static MOBILE_OS: &[&str] = &[
    "android",
    "epoc",
    "cpu os",
    "iphone os",
    "palmos",
    "palmsource",
    "windows phone os",
    "windows ce",
    "symbianos",
    "symbian os",
    "symbian",
    "webos",
    "linux armv",
];

/// Carrier gateways and portals, sometimes the only mobile identification.
pub static MOBILE_SERVERS: &[&str] = &[
    "astel",
    "docomo",
    "novarra-vision",
    "portalmmm",
    "reqwirelessweb",
    "vodafone",
];
