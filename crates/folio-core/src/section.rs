//! Labeled content regions and their visibility reports.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Identifier of a labeled content region, e.g. `"about"`.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Fragment link for this region, e.g. `#about`.
    pub fn anchor(&self) -> String {
        format!("#{}", self.0)
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SectionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for SectionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One region's entry in an observer callback batch.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    pub id: SectionId,
    /// Whether the region currently satisfies the observation threshold
    pub is_intersecting: bool,
    /// Visible fraction of the region, in `[0, 1]`
    pub ratio: f32,
}

impl IntersectionEntry {
    pub fn new(id: impl Into<SectionId>, is_intersecting: bool, ratio: f32) -> Self {
        Self {
            id: id.into(),
            is_intersecting,
            ratio,
        }
    }

    pub fn intersecting(id: impl Into<SectionId>) -> Self {
        Self::new(id, true, 1.0)
    }

    pub fn leaving(id: impl Into<SectionId>) -> Self {
        Self::new(id, false, 0.0)
    }
}
