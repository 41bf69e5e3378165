use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::database::{ApplicationStore, JobStore, UserStore};
use crate::dto::application_dto::{
    ApplicantSummary, CreateApplicationPayload, UpdateApplicationStatusPayload,
};
use crate::error::{Error, Result};
use crate::models::application::{Application, ApplicationStatus, NewApplication, Transition};

#[derive(Clone)]
pub struct ApplicationService {
    users: Arc<dyn UserStore>,
    jobs: Arc<dyn JobStore>,
    applications: Arc<dyn ApplicationStore>,
}

impl ApplicationService {
    pub fn new(
        users: Arc<dyn UserStore>,
        jobs: Arc<dyn JobStore>,
        applications: Arc<dyn ApplicationStore>,
    ) -> Self {
        Self {
            users,
            jobs,
            applications,
        }
    }

    /// Applicants for a job joined with their worker profile, newest first.
    pub async fn list_applicants(&self, job_id: Option<Uuid>) -> Result<Vec<ApplicantSummary>> {
        let job_id = job_id.ok_or_else(|| Error::BadRequest("Job ID required".to_string()))?;

        let applications = self.applications.list_applications_for_job(job_id).await?;
        if applications.is_empty() {
            return Ok(Vec::new());
        }

        let mut worker_ids: Vec<Uuid> = applications.iter().map(|a| a.worker_id).collect();
        worker_ids.sort_unstable();
        worker_ids.dedup();
        let workers: HashMap<Uuid, _> = self
            .users
            .find_users_by_ids(&worker_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let summaries = applications
            .iter()
            .filter_map(|application| match workers.get(&application.worker_id) {
                Some(worker) => Some(ApplicantSummary::new(application, worker)),
                None => {
                    tracing::warn!(
                        application_id = %application.id,
                        worker_id = %application.worker_id,
                        "Skipping application whose worker no longer exists"
                    );
                    None
                }
            })
            .collect();

        Ok(summaries)
    }

    pub async fn list_for_worker(&self, worker_id: Uuid) -> Result<Vec<Application>> {
        self.applications.list_applications_for_worker(worker_id).await
    }

    /// One application per worker and job; the store's unique key turns a
    /// second attempt into `Conflict("Already applied")`.
    pub async fn apply(&self, payload: CreateApplicationPayload) -> Result<Application> {
        let job = self.jobs.find_job(payload.job_id).await?;
        let recruiter_id = match (job, payload.recruiter_id) {
            (Some(job), supplied) => {
                if supplied.is_some_and(|id| id != job.recruiter_id) {
                    tracing::warn!(
                        job_id = %job.id,
                        supplied = ?supplied,
                        owner = %job.recruiter_id,
                        "Supplied recruiterId does not own the job; using the job's owner"
                    );
                }
                job.recruiter_id
            }
            (None, Some(supplied)) => supplied,
            (None, None) => {
                return Err(Error::BadRequest("Recruiter ID required".to_string()));
            }
        };

        let application = self
            .applications
            .insert_application(NewApplication {
                job_id: payload.job_id,
                worker_id: payload.worker_id,
                recruiter_id,
                status: ApplicationStatus::Pending,
            })
            .await?;

        tracing::info!(
            application_id = %application.id,
            job_id = %application.job_id,
            worker_id = %application.worker_id,
            "Application submitted"
        );
        Ok(application)
    }

    /// Accept or reject an application on behalf of the job's recruiter.
    pub async fn update_status(
        &self,
        id: Uuid,
        payload: UpdateApplicationStatusPayload,
    ) -> Result<Application> {
        let application = self.find(id).await?;

        let owner = match self.jobs.find_job(application.job_id).await? {
            Some(job) => job.recruiter_id,
            None => application.recruiter_id,
        };
        if owner != payload.recruiter_id {
            return Err(Error::Forbidden(
                "Only the recruiter who posted this job can update its applications".to_string(),
            ));
        }

        let target = payload.status;
        if application.status.transition_to(target)? == Transition::Unchanged {
            return Ok(application);
        }

        match self.applications.update_status_if_pending(id, target).await? {
            Some(updated) => {
                tracing::info!(
                    application_id = %updated.id,
                    status = updated.status.as_str(),
                    "Application status updated"
                );
                Ok(updated)
            }
            None => {
                // Someone else decided it first; answer as if we had read their result.
                let current = self.find(id).await?;
                match current.status.transition_to(target)? {
                    Transition::Unchanged => Ok(current),
                    Transition::Apply => Err(Error::Internal(format!(
                        "Status update for application {} did not apply",
                        id
                    ))),
                }
            }
        }
    }

    async fn find(&self, id: Uuid) -> Result<Application> {
        self.applications
            .find_application(id)
            .await?
            .ok_or_else(|| Error::NotFound("Application not found".to_string()))
    }
}
