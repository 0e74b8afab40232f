use serde::{Deserialize, Deserializer, Serialize};
use smol_str::SmolStr;
use std::fmt;
use std::str::FromStr;
use uaprobe_error::OpaqueError;
use uaprobe_utils::macros::match_ignore_ascii_case_str;

/// Coarse category of a classified UA string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UaCategory {
    /// Full featured (DOM capable) browser.
    Browser,
    /// Text mode or otherwise limited browser.
    BasicBrowser,
    /// Crawlers, spiders and anything not recognised.
    Bot,
    /// Http client libraries and validators.
    Library,
    /// Download managers.
    Downloader,
    /// Handheld devices, overrides all other categories.
    Mobile,
}

impl UaCategory {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::BasicBrowser => "basic-browser",
            Self::Bot => "bot",
            Self::Library => "library",
            Self::Downloader => "downloader",
            Self::Mobile => "mobile",
        }
    }
}

impl fmt::Display for UaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UaCategory {
    type Err = OpaqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_ignore_ascii_case_str! {
            match (s) {
                "browser" | "bro" => Ok(Self::Browser),
                "basic-browser" | "bbro" => Ok(Self::BasicBrowser),
                "bot" => Ok(Self::Bot),
                "library" | "lib" => Ok(Self::Library),
                "downloader" | "dow" => Ok(Self::Downloader),
                "mobile" => Ok(Self::Mobile),
                _ => Err(OpaqueError::from_display(format!("invalid ua category: {s}"))),
            }
        }
    }
}

impl Serialize for UaCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for UaCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse::<Self>().map_err(serde::de::Error::custom)
    }
}

/// Operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsFamily {
    Android,
    BlackBerry,
    IPhone,
    PalmOs,
    PalmSource,
    Symbian,
    BeOs,
    Os2,
    Amiga,
    WebTv,
    /// Classic Mac OS and Mac OS X.
    Mac,
    /// NT kernel based Windows, also used for remapped marketing names.
    WindowsNt,
    /// Windows 9x and other non-NT Windows.
    Windows,
    /// Any unix flavour, the version holds the flavour (e.g. `freebsd`).
    Unix,
    /// Linux, the version holds the distribution if known.
    Linux,
}

impl OsFamily {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Android => "android",
            Self::BlackBerry => "blackberry",
            Self::IPhone => "iphone",
            Self::PalmOs => "palmos",
            Self::PalmSource => "palmsource",
            Self::Symbian => "symbian",
            Self::BeOs => "beos",
            Self::Os2 => "os2",
            Self::Amiga => "amiga",
            Self::WebTv => "webtv",
            Self::Mac => "mac",
            Self::WindowsNt => "nt",
            Self::Windows => "win",
            Self::Unix => "unix",
            Self::Linux => "linux",
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OsFamily {
    type Err = OpaqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_ignore_ascii_case_str! {
            match (s) {
                "android" => Ok(Self::Android),
                "blackberry" => Ok(Self::BlackBerry),
                "iphone" => Ok(Self::IPhone),
                "palmos" => Ok(Self::PalmOs),
                "palmsource" => Ok(Self::PalmSource),
                "symbian" => Ok(Self::Symbian),
                "beos" => Ok(Self::BeOs),
                "os2" => Ok(Self::Os2),
                "amiga" => Ok(Self::Amiga),
                "webtv" => Ok(Self::WebTv),
                "mac" => Ok(Self::Mac),
                "nt" => Ok(Self::WindowsNt),
                "win" => Ok(Self::Windows),
                "unix" => Ok(Self::Unix),
                "linux" | "lin" => Ok(Self::Linux),
                _ => Err(OpaqueError::from_display(format!("invalid os family: {s}"))),
            }
        }
    }
}

impl Serialize for OsFamily {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OsFamily {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse::<Self>().map_err(serde::de::Error::custom)
    }
}

/// Standards compliance bucket of Internet Explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IeVariant {
    /// IE 9 and later.
    Ie9x,
    /// IE 7 and 8.
    Ie7x,
    /// IE 5.x for Mac.
    IeMac,
    /// IE 5 and 6.
    Ie5x,
    /// IE 4, no DOM support but still usable.
    Ie4,
    /// Anything older, unsupported.
    Old,
}

impl IeVariant {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ie9x => "ie9x",
            Self::Ie7x => "ie7x",
            Self::IeMac => "iemac",
            Self::Ie5x => "ie5x",
            Self::Ie4 => "ie4",
            Self::Old => "old",
        }
    }
}

impl fmt::Display for IeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IeVariant {
    type Err = OpaqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_ignore_ascii_case_str! {
            match (s) {
                "ie9x" => Ok(Self::Ie9x),
                "ie7x" => Ok(Self::Ie7x),
                "iemac" => Ok(Self::IeMac),
                "ie5x" => Ok(Self::Ie5x),
                "ie4" => Ok(Self::Ie4),
                "old" => Ok(Self::Old),
                _ => Err(OpaqueError::from_display(format!("invalid ie variant: {s}"))),
            }
        }
    }
}

impl Serialize for IeVariant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for IeVariant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse::<Self>().map_err(serde::de::Error::custom)
    }
}

/// Gecko family details, all fields empty unless a Gecko rule matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct MozillaDetail {
    /// Product built on Gecko (e.g. `firefox`), `mozilla` for plain rv.
    pub sub_brand: &'static str,
    /// Version following the product token.
    pub sub_brand_version: SmolStr,
    /// First three characters of the rv number, used for comparisons.
    pub truncated_rv: SmolStr,
    /// The complete rv number, including alpha/beta suffixes.
    pub full_rv: SmolStr,
    /// Engine build date following `gecko/` (e.g. `20100101`).
    pub release_date: SmolStr,
}

/// WebKit family details, all fields empty unless a WebKit rule matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct WebKitDetail {
    /// Product built on WebKit (e.g. `chrome`).
    pub sub_brand: &'static str,
    /// Version following the product token.
    pub sub_brand_version: SmolStr,
    /// The WebKit engine build number.
    pub engine_build: SmolStr,
}

/// Profile of a mobile device, only computed when a mobile hint was found.
///
/// Mobile UA strings are far from uniform, so every version
/// in here is best effort and often empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct MobileProfile {
    pub device: &'static str,
    pub device_version: SmolStr,
    pub browser: &'static str,
    pub browser_version: SmolStr,
    pub os: &'static str,
    pub os_version: SmolStr,
    /// Carrier gateway or portal.
    pub server: &'static str,
    pub server_version: SmolStr,
}

/// Operating system family and version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct OsInfo {
    /// `None` if no rule matched.
    pub family: Option<OsFamily>,
    /// Kernel version (`5.1`), marketing name (`98`), unix flavour or
    /// linux distribution; empty when unknown.
    pub version: SmolStr,
}

impl OsInfo {
    /// Human friendly name of the Windows release, if known.
    ///
    /// ```
    /// use uaprobe_ua::{OsFamily, OsInfo};
    ///
    /// let os = OsInfo { family: Some(OsFamily::WindowsNt), version: "5.1".into() };
    /// assert_eq!(os.marketing_name(), Some("Windows XP"));
    /// ```
    #[must_use]
    pub fn marketing_name(&self) -> Option<&'static str> {
        match self.family? {
            OsFamily::WindowsNt => match self.version.as_str() {
                "10.0" => Some("Windows 10"),
                "6.3" => Some("Windows 8.1"),
                "6.2" => Some("Windows 8"),
                "6.1" => Some("Windows 7"),
                "6.0" => Some("Windows Vista"),
                "5.2" => Some("Windows Server 2003"),
                "5.1" => Some("Windows XP"),
                "5.0" => Some("Windows 2000"),
                "4.0" => Some("Windows NT 4"),
                "3.0" => Some("Windows NT 3"),
                "ce" => Some("Windows CE"),
                _ => None,
            },
            OsFamily::Windows => match self.version.as_str() {
                "95" => Some("Windows 95"),
                "98" => Some("Windows 98"),
                "me" => Some("Windows ME"),
                _ => None,
            },
            OsFamily::Mac if !self.version.is_empty() => Some("Mac OS X"),
            _ => None,
        }
    }
}
