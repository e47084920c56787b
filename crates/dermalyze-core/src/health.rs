//! Self-reported stomach / internal health status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HealthStatus {
    Healthy,
    OccasionalBloating,
    FrequentAcidity,
}

impl HealthStatus {
    pub const ALL: [HealthStatus; 3] = [
        HealthStatus::Healthy,
        HealthStatus::OccasionalBloating,
        HealthStatus::FrequentAcidity,
    ];

    /// Human-readable label; this is what the activity log stores.
    pub fn label(self) -> &'static str {
        match self {
            HealthStatus::Healthy => "Healthy",
            HealthStatus::OccasionalBloating => "Occasional Bloating",
            HealthStatus::FrequentAcidity => "Frequent Acidity/Acne",
        }
    }

    /// Short identifier used on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            HealthStatus::Healthy => "healthy",
            HealthStatus::OccasionalBloating => "occasional-bloating",
            HealthStatus::FrequentAcidity => "frequent-acidity",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown health status {0:?} (expected healthy, occasional-bloating or frequent-acidity)")]
pub struct ParseHealthStatusError(String);

/// Accepts both the short identifiers and the display labels, case-insensitively.
impl FromStr for HealthStatus {
    type Err = ParseHealthStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        HealthStatus::ALL
            .into_iter()
            .find(|h| h.as_str().eq_ignore_ascii_case(needle) || h.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseHealthStatusError(s.to_string()))
    }
}
