use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "payment_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    Daily,
    Monthly,
    Contract,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub skill_required: String,
    pub description: String,
    pub location: String,
    pub duration: String,
    pub payment_type: PaymentType,
    #[serde(with = "rust_decimal::serde::float")]
    pub budget: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub experience_required: Decimal,
    pub recruiter_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewJob {
    pub title: String,
    pub skill_required: String,
    pub description: String,
    pub location: String,
    pub duration: String,
    pub payment_type: PaymentType,
    pub budget: Decimal,
    pub experience_required: Decimal,
    pub recruiter_id: Uuid,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub recruiter_id: Option<Uuid>,
    /// Case-insensitive substring of `skill_required`.
    pub skill: Option<String>,
}

impl JobFilter {
    pub fn matches(&self, job: &Job) -> bool {
        if let Some(recruiter_id) = self.recruiter_id {
            if job.recruiter_id != recruiter_id {
                return false;
            }
        }
        if let Some(skill) = &self.skill {
            let needle = skill.to_lowercase();
            if !job.skill_required.to_lowercase().contains(&needle) {
                return false;
            }
        }
        true
    }
}
