use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "application_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[serde(alias = "applied")]
    Pending,
    Accepted,
    Rejected,
    Completed,
}

/// What a requested status change amounts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Apply,
    Unchanged,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Completed => "completed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, ApplicationStatus::Pending)
    }

    /// Recruiters may only decide a pending application; repeating the same
    /// decision is a no-op.
    pub fn transition_to(&self, target: ApplicationStatus) -> Result<Transition> {
        if !matches!(
            target,
            ApplicationStatus::Accepted | ApplicationStatus::Rejected
        ) {
            return Err(Error::BadRequest(format!(
                "Status must be 'accepted' or 'rejected', got '{}'",
                target.as_str()
            )));
        }
        if *self == target {
            return Ok(Transition::Unchanged);
        }
        if self.is_terminal() {
            return Err(Error::Conflict(format!(
                "Application is already {}",
                self.as_str()
            )));
        }
        Ok(Transition::Apply)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: Uuid,
    pub job_id: Uuid,
    pub worker_id: Uuid,
    pub recruiter_id: Uuid,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewApplication {
    pub job_id: Uuid,
    pub worker_id: Uuid,
    pub recruiter_id: Uuid,
    pub status: ApplicationStatus,
}
