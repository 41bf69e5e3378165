use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::{Error, Result};
use crate::models::job::{Job, JobFilter, NewJob, PaymentType};
use crate::utils::validation::{non_blank, parse_optional_id, validate_non_blank};

use super::lenient_number;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobPayload {
    #[validate(required, custom(function = "validate_non_blank"))]
    pub title: Option<String>,
    #[validate(required, custom(function = "validate_non_blank"))]
    pub skill_required: Option<String>,
    #[validate(required, custom(function = "validate_non_blank"))]
    pub description: Option<String>,
    #[validate(required, custom(function = "validate_non_blank"))]
    pub location: Option<String>,
    #[validate(required, custom(function = "validate_non_blank"))]
    pub duration: Option<String>,
    #[validate(required)]
    pub payment_type: Option<PaymentType>,
    #[validate(required)]
    #[serde(default, deserialize_with = "lenient_number")]
    pub budget: Option<Decimal>,
    #[validate(required)]
    #[serde(default, deserialize_with = "lenient_number")]
    pub experience_required: Option<Decimal>,
    pub recruiter_id: Option<Uuid>,
}

impl CreateJobPayload {
    /// Numeric ranges are not checked; a negative budget is stored as given.
    pub fn into_new_job(self, recruiter_id: Uuid) -> Result<NewJob> {
        Ok(NewJob {
            title: required(self.title, "title")?,
            skill_required: required(self.skill_required, "skillRequired")?,
            description: required(self.description, "description")?,
            location: required(self.location, "location")?,
            duration: required(self.duration, "duration")?,
            payment_type: required(self.payment_type, "paymentType")?,
            budget: required(self.budget, "budget")?,
            experience_required: required(self.experience_required, "experienceRequired")?,
            recruiter_id,
        })
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| Error::BadRequest(format!("{} is required", field)))
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct JobListQuery {
    pub recruiter_id: Option<String>,
    pub skill: Option<String>,
}

impl JobListQuery {
    pub fn into_filter(self) -> Result<JobFilter> {
        Ok(JobFilter {
            recruiter_id: parse_optional_id(self.recruiter_id.as_deref(), "recruiterId")?,
            skill: non_blank(self.skill.as_deref()).map(str::to_string),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobResponse {
    pub success: bool,
    pub job: Job,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListResponse {
    pub success: bool,
    pub jobs: Vec<Job>,
}

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        Self { success: true, job }
    }
}

impl From<Vec<Job>> for JobListResponse {
    fn from(jobs: Vec<Job>) -> Self {
        Self {
            success: true,
            jobs,
        }
    }
}
