use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ScreenError;

/// A dotted path into the form state, e.g. `wpseo_social.opengraph`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldPath(String);

impl FieldPath {
    pub fn parse(raw: &str) -> Result<Self, ScreenError> {
        let raw = raw.trim();
        let bad_segment = |seg: &str| seg.is_empty() || seg != seg.trim();
        if raw.is_empty() || raw.split('.').any(bad_segment) {
            return Err(ScreenError::InvalidPath(raw.to_string()));
        }
        Ok(FieldPath(raw.to_string()))
    }

    /// For compile-time path constants that are known to be well formed.
    pub(crate) fn known(raw: &'static str) -> Self {
        FieldPath(raw.to_string())
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last segment, used to derive widget ids.
    pub fn leaf(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    /// Path with dots replaced by dashes (`wpseo_social-og_default_image`).
    pub fn dom_id(&self) -> String {
        self.0.replace('.', "-")
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for FieldPath {
    type Error = ScreenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        FieldPath::parse(&value)
    }
}

impl From<FieldPath> for String {
    fn from(path: FieldPath) -> Self {
        path.0
    }
}

impl std::str::FromStr for FieldPath {
    type Err = ScreenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldPath::parse(s)
    }
}
