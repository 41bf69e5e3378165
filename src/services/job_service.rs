use std::sync::Arc;
use uuid::Uuid;

use crate::database::{JobStore, UserStore};
use crate::dto::job_dto::CreateJobPayload;
use crate::error::{Error, Result};
use crate::models::job::{Job, JobFilter};
use crate::models::user::User;

pub const INVALID_RECRUITER_MESSAGE: &str =
    "Recruiter account not found or invalid role. Please try logging out and back in.";

#[derive(Clone)]
pub struct JobService {
    users: Arc<dyn UserStore>,
    jobs: Arc<dyn JobStore>,
}

impl JobService {
    pub fn new(users: Arc<dyn UserStore>, jobs: Arc<dyn JobStore>) -> Self {
        Self { users, jobs }
    }

    pub async fn list(&self, filter: JobFilter) -> Result<Vec<Job>> {
        self.jobs.list_jobs(&filter).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Job> {
        self.jobs
            .find_job(id)
            .await?
            .ok_or_else(|| Error::NotFound("Job not found".to_string()))
    }

    /// The poster must be an existing recruiter; ownership is only checked here.
    pub async fn create(&self, payload: CreateJobPayload) -> Result<Job> {
        let recruiter = match payload.recruiter_id {
            Some(id) => self.users.find_user_by_id(id).await?,
            None => None,
        };
        let Some(recruiter) = recruiter.filter(User::is_recruiter) else {
            tracing::warn!(recruiter_id = ?payload.recruiter_id, "Job rejected: poster is not a recruiter");
            return Err(Error::Forbidden(INVALID_RECRUITER_MESSAGE.to_string()));
        };

        let new_job = payload.into_new_job(recruiter.id)?;
        let job = self.jobs.insert_job(new_job).await?;
        tracing::info!(job_id = %job.id, recruiter_id = %job.recruiter_id, skill = %job.skill_required, "Job created");
        Ok(job)
    }
}
