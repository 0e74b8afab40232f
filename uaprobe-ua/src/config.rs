use serde::{Deserialize, Serialize};

/// Heuristic cutoffs used by the classifiers.
///
/// The defaults reproduce the historic behaviour and there is little
/// reason to change them, other than experimenting with what is considered
/// an unsafe (legacy) browser. All fields are optional when deserializing.
///
/// ```
/// use uaprobe_ua::ClassifierConfig;
///
/// let config: ClassifierConfig = serde_json::from_str(r#"{"opera_min_version": 9.0}"#).unwrap();
/// assert_eq!(config.max_ua_length, None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Truncate UA strings to this many bytes before classification.
    ///
    /// Unset by default: the full string is classified.
    pub max_ua_length: Option<usize>,
    /// Gecko engines released before this date (`YYYYMMDD`) are unsafe.
    pub gecko_min_release_date: f64,
    /// Gecko engines with a lower (truncated) rv number are unsafe.
    pub gecko_min_rv: f64,
    /// Opera releases below this version are unsafe.
    pub opera_min_version: f64,
    /// Gecko rv from which a `mac` UA without `os x` is assumed to be OS X.
    pub mac_gecko_min_rv: f64,
    /// IE version from which a `mac` UA without `os x` is assumed to be OS X.
    pub mac_ie_min_version: f64,
    /// Internet Explorer buckets.
    pub ie: IeThresholds,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            max_ua_length: None,
            gecko_min_release_date: 20_020_400.0,
            gecko_min_rv: 1.0,
            opera_min_version: 5.0,
            mac_gecko_min_rv: 1.3,
            mac_ie_min_version: 5.2,
            ie: IeThresholds::default(),
        }
    }
}

/// Lower bounds of the [`IeVariant`] buckets.
///
/// [`IeVariant`]: crate::IeVariant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IeThresholds {
    /// [`IeVariant::Ie9x`](crate::IeVariant::Ie9x)
    pub modern: f64,
    /// [`IeVariant::Ie7x`](crate::IeVariant::Ie7x)
    pub transitional: f64,
    /// [`IeVariant::Ie5x`](crate::IeVariant::Ie5x)
    pub legacy: f64,
    /// Exclusive lower bound of [`IeVariant::Ie4`](crate::IeVariant::Ie4),
    /// anything at or below it is [`IeVariant::Old`](crate::IeVariant::Old).
    pub ancient: f64,
}

impl Default for IeThresholds {
    fn default() -> Self {
        Self {
            modern: 9.0,
            transitional: 7.0,
            legacy: 5.0,
            ancient: 3.0,
        }
    }
}
