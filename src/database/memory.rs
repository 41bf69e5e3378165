use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{ApplicationStore, JobStore, UserStore};
use crate::error::{Error, Result};
use crate::models::application::{Application, ApplicationStatus, NewApplication};
use crate::models::job::{Job, JobFilter, NewJob};
use crate::models::user::{NewUser, Role, User};

#[derive(Default)]
struct Collections {
    users: Vec<User>,
    jobs: Vec<Job>,
    applications: Vec<Application>,
}

/// In-process store. Each write holds the lock for its whole
/// check-and-insert, which gives the same uniqueness guarantees as the
/// PostgreSQL constraints.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Collections>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Newest first; among equal timestamps the later insert wins.
fn newest_first<T, K: Ord>(items: impl DoubleEndedIterator<Item = T>, key: impl Fn(&T) -> K) -> Vec<T> {
    let mut out: Vec<T> = items.rev().collect();
    out.sort_by(|a, b| key(b).cmp(&key(a)));
    out
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert_user(&self, user: NewUser) -> Result<User> {
        let mut guard = self.inner.write().await;
        if guard.users.iter().any(|u| u.email == user.email) {
            return Err(Error::Conflict("User already exists".to_string()));
        }
        let user = User {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            password: user.password,
            phone: user.phone,
            city: user.city,
            profile: user.profile,
            created_at: Utc::now(),
        };
        guard.users.push(user.clone());
        Ok(user)
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let guard = self.inner.read().await;
        Ok(guard.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let guard = self.inner.read().await;
        Ok(guard.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_users_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>> {
        let guard = self.inner.read().await;
        Ok(guard
            .users
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }

    async fn count_users_by_role(&self, role: Role) -> Result<i64> {
        let guard = self.inner.read().await;
        Ok(guard.users.iter().filter(|u| u.role() == role).count() as i64)
    }

    async fn delete_all_users(&self) -> Result<u64> {
        let mut guard = self.inner.write().await;
        let removed = guard.users.len() as u64;
        guard.users.clear();
        Ok(removed)
    }
}

#[async_trait]
impl JobStore for MemoryStore {
    async fn insert_job(&self, job: NewJob) -> Result<Job> {
        let job = Job {
            id: Uuid::new_v4(),
            title: job.title,
            skill_required: job.skill_required,
            description: job.description,
            location: job.location,
            duration: job.duration,
            payment_type: job.payment_type,
            budget: job.budget,
            experience_required: job.experience_required,
            recruiter_id: job.recruiter_id,
            created_at: Utc::now(),
        };
        self.inner.write().await.jobs.push(job.clone());
        Ok(job)
    }

    async fn find_job(&self, id: Uuid) -> Result<Option<Job>> {
        let guard = self.inner.read().await;
        Ok(guard.jobs.iter().find(|j| j.id == id).cloned())
    }

    async fn list_jobs(&self, filter: &JobFilter) -> Result<Vec<Job>> {
        let guard = self.inner.read().await;
        let matching: Vec<Job> = guard
            .jobs
            .iter()
            .filter(|j| filter.matches(j))
            .cloned()
            .collect();
        Ok(newest_first(matching.into_iter(), |j| j.created_at))
    }

    async fn count_jobs(&self) -> Result<i64> {
        Ok(self.inner.read().await.jobs.len() as i64)
    }

    async fn delete_all_jobs(&self) -> Result<u64> {
        let mut guard = self.inner.write().await;
        let removed = guard.jobs.len() as u64;
        guard.jobs.clear();
        Ok(removed)
    }
}

#[async_trait]
impl ApplicationStore for MemoryStore {
    async fn insert_application(&self, application: NewApplication) -> Result<Application> {
        let mut guard = self.inner.write().await;
        let duplicate = guard
            .applications
            .iter()
            .any(|a| a.job_id == application.job_id && a.worker_id == application.worker_id);
        if duplicate {
            return Err(Error::Conflict("Already applied".to_string()));
        }
        let application = Application {
            id: Uuid::new_v4(),
            job_id: application.job_id,
            worker_id: application.worker_id,
            recruiter_id: application.recruiter_id,
            status: application.status,
            applied_at: Utc::now(),
        };
        guard.applications.push(application.clone());
        Ok(application)
    }

    async fn find_application(&self, id: Uuid) -> Result<Option<Application>> {
        let guard = self.inner.read().await;
        Ok(guard.applications.iter().find(|a| a.id == id).cloned())
    }

    async fn list_applications_for_job(&self, job_id: Uuid) -> Result<Vec<Application>> {
        let guard = self.inner.read().await;
        let matching: Vec<Application> = guard
            .applications
            .iter()
            .filter(|a| a.job_id == job_id)
            .cloned()
            .collect();
        Ok(newest_first(matching.into_iter(), |a| a.applied_at))
    }

    async fn list_applications_for_worker(&self, worker_id: Uuid) -> Result<Vec<Application>> {
        let guard = self.inner.read().await;
        let matching: Vec<Application> = guard
            .applications
            .iter()
            .filter(|a| a.worker_id == worker_id)
            .cloned()
            .collect();
        Ok(newest_first(matching.into_iter(), |a| a.applied_at))
    }

    async fn update_status_if_pending(
        &self,
        id: Uuid,
        status: ApplicationStatus,
    ) -> Result<Option<Application>> {
        let mut guard = self.inner.write().await;
        let updated = guard
            .applications
            .iter_mut()
            .find(|a| a.id == id && a.status == ApplicationStatus::Pending)
            .map(|a| {
                a.status = status;
                a.clone()
            });
        Ok(updated)
    }

    async fn count_applications(&self) -> Result<i64> {
        Ok(self.inner.read().await.applications.len() as i64)
    }

    async fn delete_all_applications(&self) -> Result<u64> {
        let mut guard = self.inner.write().await;
        let removed = guard.applications.len() as u64;
        guard.applications.clear();
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::{UserProfile, WorkerProfile};

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Painter Person B".into(),
            email: email.into(),
            password: "password123".into(),
            phone: "9000000019".into(),
            city: "Pune".into(),
            profile: UserProfile::Worker(WorkerProfile::default()),
        }
    }

    #[tokio::test]
    async fn email_is_unique() {
        let store = MemoryStore::new();
        store.insert_user(new_user("a@demo.com")).await.unwrap();
        let err = store.insert_user(new_user("a@demo.com")).await.unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
        assert_eq!(store.count_users_by_role(Role::Worker).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn concurrent_duplicate_applications_store_one() {
        let store = MemoryStore::new();
        let (job_id, worker_id, recruiter_id) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());

        let attempts = (0..8).map(|_| {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .insert_application(NewApplication {
                        job_id,
                        worker_id,
                        recruiter_id,
                        status: ApplicationStatus::Pending,
                    })
                    .await
            })
        });

        let mut ok = 0;
        for handle in attempts.collect::<Vec<_>>() {
            if handle.await.unwrap().is_ok() {
                ok += 1;
            }
        }
        assert_eq!(ok, 1);
        assert_eq!(store.list_applications_for_job(job_id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn conditional_update_only_touches_pending() {
        let store = MemoryStore::new();
        let app = store
            .insert_application(NewApplication {
                job_id: Uuid::new_v4(),
                worker_id: Uuid::new_v4(),
                recruiter_id: Uuid::new_v4(),
                status: ApplicationStatus::Pending,
            })
            .await
            .unwrap();

        let first = store
            .update_status_if_pending(app.id, ApplicationStatus::Accepted)
            .await
            .unwrap();
        assert_eq!(first.map(|a| a.status), Some(ApplicationStatus::Accepted));

        let second = store
            .update_status_if_pending(app.id, ApplicationStatus::Rejected)
            .await
            .unwrap();
        assert!(second.is_none());
    }
}
