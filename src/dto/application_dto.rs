use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::application::{Application, ApplicationStatus};
use crate::models::user::User;
use crate::utils::format::{display_skill, format_experience};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicationListQuery {
    pub job_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationPayload {
    pub job_id: Uuid,
    pub worker_id: Uuid,
    /// Only used when the job itself cannot be found.
    pub recruiter_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApplicationStatusPayload {
    pub status: ApplicationStatus,
    /// The recruiter making the decision.
    pub recruiter_id: Uuid,
}

/// One row of a recruiter's applicant list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantSummary {
    pub id: Uuid,
    pub worker_id: Uuid,
    pub name: String,
    pub skill: String,
    pub experience: String,
    pub phone: String,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

impl ApplicantSummary {
    pub fn new(application: &Application, worker: &User) -> Self {
        let profile = worker.profile.as_worker();
        Self {
            id: application.id,
            worker_id: worker.id,
            name: worker.name.clone(),
            skill: display_skill(profile.and_then(|p| p.primary_skill.as_deref())),
            experience: format_experience(profile.and_then(|p| p.experience_years)),
            phone: worker.phone.clone(),
            status: application.status,
            applied_at: application.applied_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicantListResponse {
    pub success: bool,
    pub applications: Vec<ApplicantSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationResponse {
    pub success: bool,
    pub application: Application,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationListResponse {
    pub success: bool,
    pub applications: Vec<Application>,
}

impl From<Vec<ApplicantSummary>> for ApplicantListResponse {
    fn from(applications: Vec<ApplicantSummary>) -> Self {
        Self {
            success: true,
            applications,
        }
    }
}

impl From<Application> for ApplicationResponse {
    fn from(application: Application) -> Self {
        Self {
            success: true,
            application,
        }
    }
}

impl From<Vec<Application>> for ApplicationListResponse {
    fn from(applications: Vec<Application>) -> Self {
        Self {
            success: true,
            applications,
        }
    }
}
