use super::TokenRule;
use crate::OsFamily;

/// How the version of a matched [`OsRule`] is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsResolver {
    /// No version is resolved.
    Plain,
    /// `nt X.Y` kernel versions.
    Nt,
    /// Marketing names (`xp`, `vista`, `98`, ...), possibly remapped onto NT.
    Win,
    /// Mac OS X version or the mac-only browser heuristic.
    Mac,
    /// Fixed legacy placeholder version.
    IPhone,
}

/// A single-token operating system table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OsRule {
    /// Lowercase token searched for in the UA string.
    pub token: &'static str,
    /// Family reported when this rule matches.
    pub family: OsFamily,
    /// Family specific resolution of the version.
    pub resolver: OsResolver,
}

impl TokenRule for OsRule {
    fn token(&self) -> &str {
        self.token
    }
}

const fn os(token: &'static str, family: OsFamily) -> OsRule {
    OsRule {
        token,
        family,
        resolver: OsResolver::Plain,
    }
}

/// Guard token: UAs containing it skip the single-token rules,
/// as it collides with desktop tokens such as `mac`.
pub const LINUX_TOKEN: &str = "linux";

/// Single-token OS rules in priority order. `mac` must precede `nt`,
/// some UAs advertise `macintosh` which would trip the nt rule.
pub static OS_RULES: &[OsRule] = &[
    os("android", OsFamily::Android),
    os("blackberry", OsFamily::BlackBerry),
    OsRule {
        token: "iphone",
        family: OsFamily::IPhone,
        resolver: OsResolver::IPhone,
    },
    os("palmos", OsFamily::PalmOs),
    os("palmsource", OsFamily::PalmSource),
    os("symbian", OsFamily::Symbian),
    os("beos", OsFamily::BeOs),
    os("os2", OsFamily::Os2),
    os("amiga", OsFamily::Amiga),
    os("webtv", OsFamily::WebTv),
    OsRule {
        token: "mac",
        family: OsFamily::Mac,
        resolver: OsResolver::Mac,
    },
    OsRule {
        token: "nt",
        family: OsFamily::WindowsNt,
        resolver: OsResolver::Nt,
    },
    OsRule {
        token: "win",
        family: OsFamily::Windows,
        resolver: OsResolver::Win,
    },
];

/// Unix flavours, the generic `unix` sentinel comes last.
pub static UNIX_TOKENS: &[&str] = &[
    "dragonfly", "freebsd", "openbsd", "netbsd", "bsd", "unixware", "solaris", "sunos", "sun4",
    "sun5", "suni86", "sun", "irix5", "irix6", "irix", "hpux9", "hpux10", "hpux11", "hpux", "hp-ux",
    "aix1", "aix2", "aix3", "aix4", "aix5", "aix", "sco", "mpras", "reliant", "dec", "sinix", "unix",
];

/// Linux distributions, the generic `linux` sentinel comes last.
pub static LINUX_DISTROS: &[&str] = &[
    "ubuntu", "kubuntu", "xubuntu", "mepis", "xandros", "linspire", "winspire", "jolicloud",
    "sidux", "kanotix", "debian", "opensuse", "suse", "fedora", "redhat", "slackware", "slax",
    "mandrake", "mandriva", "gentoo", "sabayon", LINUX_TOKEN,
];
