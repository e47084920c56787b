use serde::Serialize;

use crate::error::ScanError;
use crate::health::HealthStatus;

/// What the UI shell submits for one scan.
#[derive(Debug, Clone)]
pub struct ScanInput {
    pub name: String,
    pub email: String,
    pub health: HealthStatus,
    /// The camera snapshot was taken. Its content is never inspected.
    pub capture_completed: bool,
}

/// A complete submission; only exists once name, email and capture are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSession {
    pub name: String,
    pub email: String,
    pub health: HealthStatus,
}

impl ScanInput {
    /// Fields still missing, in form order.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if !self.capture_completed {
            missing.push("capture");
        }
        missing
    }

    pub fn session(&self) -> Result<UserSession, ScanError> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(ScanError::IncompleteInput { missing });
        }
        Ok(UserSession {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            health: self.health,
        })
    }
}
