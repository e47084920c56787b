use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::category::DetectedCategory;
use crate::health::HealthStatus;

/// ISO-8601 local time with microseconds, no offset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// One completed scan. Field names map to the fixed log columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Analysis")]
    pub analysis: String,
    #[serde(rename = "Internal_Health")]
    pub internal_health: String,
}

impl LogEntry {
    pub fn new<Tz>(
        at: DateTime<Tz>,
        name: &str,
        email: &str,
        category: &DetectedCategory,
        health: HealthStatus,
    ) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
            name: name.to_string(),
            email: email.to_string(),
            analysis: category.label().to_string(),
            internal_health: health.label().to_string(),
        }
    }
}
