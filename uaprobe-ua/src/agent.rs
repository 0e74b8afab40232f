use serde::{Serialize, Serializer, ser::SerializeStruct};
use std::{convert::Infallible, fmt, str::FromStr, sync::Arc};

use crate::{UaClassification, UaClassifier};

/// User Agent (UA) header together with its classification.
///
/// The classification is computed once, when the [`UserAgent`] is created.
///
/// ```
/// use uaprobe_ua::UserAgent;
///
/// let ua = UserAgent::new("Mozilla/4.0 (compatible; MSIE 7.0; Windows NT 5.1; Trident/4.0)");
/// assert_eq!(ua.classification().browser_id(), "ie");
/// assert_eq!(ua.classification().true_ie_version(), "8.0");
/// assert_eq!(ua.to_string(), ua.header_str());
/// ```
#[derive(Debug, Clone)]
pub struct UserAgent {
    header: Arc<str>,
    classification: UaClassification,
}

impl UserAgent {
    /// Create a new [`UserAgent`] from a `User-Agent` (header) value,
    /// classified using the default configuration.
    pub fn new(header: impl Into<Arc<str>>) -> Self {
        let header = header.into();
        let classification = crate::classify(&header);
        Self {
            header,
            classification,
        }
    }

    /// Create a new [`UserAgent`] classified by the given [`UaClassifier`].
    pub fn with_classifier(header: impl Into<Arc<str>>, classifier: &UaClassifier) -> Self {
        let header = header.into();
        let classification = classifier.classify(&header);
        Self {
            header,
            classification,
        }
    }

    /// returns the `User-Agent` (header) value used by the [`UserAgent`].
    #[must_use]
    pub fn header_str(&self) -> &str {
        &self.header
    }

    /// returns the [`UaClassification`] of the [`UserAgent`].
    #[must_use]
    pub fn classification(&self) -> &UaClassification {
        &self.classification
    }
}

impl fmt::Display for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header)
    }
}

impl FromStr for UserAgent {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl Serialize for UserAgent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("UserAgent", 2)?;
        state.serialize_field("header", self.header_str())?;
        state.serialize_field("classification", &self.classification)?;
        state.end()
    }
}
