//! Persistence seam. Services only see these traits; `PgStore` backs them in
//! production and `MemoryStore` when no database is configured.

pub mod memory;
pub mod pool;
pub mod postgres;

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::Result;
use crate::models::application::{Application, ApplicationStatus, NewApplication};
use crate::models::job::{Job, JobFilter, NewJob};
use crate::models::user::{NewUser, Role, User};

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fails with `Conflict` when the email is taken.
    async fn insert_user(&self, user: NewUser) -> Result<User>;
    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn find_users_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>>;
    async fn count_users_by_role(&self, role: Role) -> Result<i64>;
    async fn delete_all_users(&self) -> Result<u64>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn insert_job(&self, job: NewJob) -> Result<Job>;
    async fn find_job(&self, id: Uuid) -> Result<Option<Job>>;
    /// Newest first; equal timestamps in reverse insertion order.
    async fn list_jobs(&self, filter: &JobFilter) -> Result<Vec<Job>>;
    async fn count_jobs(&self) -> Result<i64>;
    async fn delete_all_jobs(&self) -> Result<u64>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationStore: Send + Sync {
    /// Fails with `Conflict` when the worker already applied to the job.
    async fn insert_application(&self, application: NewApplication) -> Result<Application>;
    async fn find_application(&self, id: Uuid) -> Result<Option<Application>>;
    /// Most recently applied first; equal timestamps in reverse insertion order.
    async fn list_applications_for_job(&self, job_id: Uuid) -> Result<Vec<Application>>;
    /// Most recently applied first.
    async fn list_applications_for_worker(&self, worker_id: Uuid) -> Result<Vec<Application>>;
    /// Sets `status` only while the application is still pending. Returns the
    /// updated row, or `None` when nothing matched.
    async fn update_status_if_pending(
        &self,
        id: Uuid,
        status: ApplicationStatus,
    ) -> Result<Option<Application>>;
    async fn count_applications(&self) -> Result<i64>;
    async fn delete_all_applications(&self) -> Result<u64>;
}

/// Store handles shared by every service.
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub jobs: Arc<dyn JobStore>,
    pub applications: Arc<dyn ApplicationStore>,
}

impl Stores {
    pub fn postgres(store: PgStore) -> Self {
        let store = Arc::new(store);
        Self {
            users: store.clone(),
            jobs: store.clone(),
            applications: store,
        }
    }

    pub fn memory(store: MemoryStore) -> Self {
        let store = Arc::new(store);
        Self {
            users: store.clone(),
            jobs: store.clone(),
            applications: store,
        }
    }
}
