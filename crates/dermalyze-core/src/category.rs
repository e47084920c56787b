//! Skin category rule.
//!
//! The category is derived from the self-reported health status alone; the
//! camera capture is never inspected.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::health::HealthStatus;

/// Wording used for category labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    /// "Oily" / "Dry".
    #[default]
    Short,
    /// "Sensitive/Oily" / "Normal/Dry".
    Compound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkinBranch {
    Oily,
    Dry,
}

/// Category derived for one scan. Serializes as its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectedCategory {
    pub branch: SkinBranch,
    pub style: LabelStyle,
}

impl DetectedCategory {
    pub fn label(&self) -> &'static str {
        match (self.branch, self.style) {
            (SkinBranch::Oily, LabelStyle::Short) => "Oily",
            (SkinBranch::Dry, LabelStyle::Short) => "Dry",
            (SkinBranch::Oily, LabelStyle::Compound) => "Sensitive/Oily",
            (SkinBranch::Dry, LabelStyle::Compound) => "Normal/Dry",
        }
    }

    /// Filter keyword: the label up to the first `/`.
    pub fn keyword(&self) -> &'static str {
        let label = self.label();
        label.split('/').next().unwrap_or(label)
    }
}

impl Serialize for DetectedCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl fmt::Display for DetectedCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Any non-healthy status takes the oily branch; healthy takes the dry branch.
pub fn derive_category(health: HealthStatus, style: LabelStyle) -> DetectedCategory {
    let branch = match health {
        HealthStatus::Healthy => SkinBranch::Dry,
        HealthStatus::OccasionalBloating | HealthStatus::FrequentAcidity => SkinBranch::Oily,
    };
    DetectedCategory { branch, style }
}
