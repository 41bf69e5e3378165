use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{ApplicationStore, JobStore, UserStore};
use crate::error::{is_unique_violation, Error, Result};
use crate::models::application::{Application, ApplicationStatus, NewApplication};
use crate::models::job::{Job, JobFilter, NewJob};
use crate::models::user::{NewUser, Role, User, UserProfile, UserRow};

const USER_COLUMNS: &str = "id, name, email, password, role, phone, city, locality, primary_skill, experience_years, availability, daily_wage, bio, organization_name, recruiter_type, created_at";

const JOB_COLUMNS: &str = "id, title, skill_required, description, location, duration, payment_type, budget, experience_required, recruiter_id, created_at";

const APPLICATION_COLUMNS: &str = "id, job_id, worker_id, recruiter_id, status, applied_at";

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escapes LIKE wildcards so user input only ever matches literally.
fn like_pattern(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len() + 2);
    escaped.push('%');
    for ch in raw.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl UserStore for PgStore {
    async fn insert_user(&self, user: NewUser) -> Result<User> {
        let role = user.profile.role();
        let (worker, recruiter) = match &user.profile {
            UserProfile::Worker(w) => (Some(w), None),
            UserProfile::Recruiter(r) => (None, Some(r)),
        };

        let query = format!(
            r#"
            INSERT INTO users (
                id, name, email, password, role, phone, city,
                locality, primary_skill, experience_years, availability, daily_wage, bio,
                organization_name, recruiter_type
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7,
                $8, $9, $10, $11, $12, $13,
                $14, $15
            )
            RETURNING {}
            "#,
            USER_COLUMNS
        );

        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(Uuid::new_v4())
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password)
            .bind(role)
            .bind(&user.phone)
            .bind(&user.city)
            .bind(worker.and_then(|w| w.locality.clone()))
            .bind(worker.and_then(|w| w.primary_skill.clone()))
            .bind(worker.and_then(|w| w.experience_years))
            .bind(worker.and_then(|w| w.availability.clone()))
            .bind(worker.and_then(|w| w.daily_wage))
            .bind(worker.and_then(|w| w.bio.clone()))
            .bind(recruiter.and_then(|r| r.organization_name.clone()))
            .bind(recruiter.and_then(|r| r.recruiter_type))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    Error::Conflict("User already exists".to_string())
                } else {
                    Error::from(e)
                }
            })?;

        Ok(row.into())
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let query = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);
        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Into::into))
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let query = format!("SELECT {} FROM users WHERE email = $1", USER_COLUMNS);
        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Into::into))
    }

    async fn find_users_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!("SELECT {} FROM users WHERE id = ANY($1)", USER_COLUMNS);
        let rows = sqlx::query_as::<_, UserRow>(&query)
            .bind(ids.to_vec())
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count_users_by_role(&self, role: Role) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = $1")
            .bind(role)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn delete_all_users(&self) -> Result<u64> {
        let res = sqlx::query("DELETE FROM users").execute(&self.pool).await?;
        Ok(res.rows_affected())
    }
}

#[async_trait]
impl JobStore for PgStore {
    async fn insert_job(&self, job: NewJob) -> Result<Job> {
        let query = format!(
            r#"
            INSERT INTO jobs (
                id, title, skill_required, description, location, duration,
                payment_type, budget, experience_required, recruiter_id
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {}
            "#,
            JOB_COLUMNS
        );

        let job = sqlx::query_as::<_, Job>(&query)
            .bind(Uuid::new_v4())
            .bind(job.title)
            .bind(job.skill_required)
            .bind(job.description)
            .bind(job.location)
            .bind(job.duration)
            .bind(job.payment_type)
            .bind(job.budget)
            .bind(job.experience_required)
            .bind(job.recruiter_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(job)
    }

    async fn find_job(&self, id: Uuid) -> Result<Option<Job>> {
        let query = format!("SELECT {} FROM jobs WHERE id = $1", JOB_COLUMNS);
        let job = sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(job)
    }

    async fn list_jobs(&self, filter: &JobFilter) -> Result<Vec<Job>> {
        let mut filters = Vec::new();
        let mut bind_index = 0;

        if filter.recruiter_id.is_some() {
            bind_index += 1;
            filters.push(format!("recruiter_id = ${}", bind_index));
        }
        if filter.skill.is_some() {
            bind_index += 1;
            filters.push(format!("skill_required ILIKE ${} ESCAPE '\\'", bind_index));
        }

        let where_clause = if filters.is_empty() {
            "".to_string()
        } else {
            format!("WHERE {}", filters.join(" AND "))
        };

        let query = format!(
            "SELECT {} FROM jobs {} ORDER BY created_at DESC, seq DESC",
            JOB_COLUMNS, where_clause
        );

        let mut statement = sqlx::query_as::<_, Job>(&query);
        if let Some(recruiter_id) = filter.recruiter_id {
            statement = statement.bind(recruiter_id);
        }
        if let Some(skill) = &filter.skill {
            statement = statement.bind(like_pattern(skill));
        }

        let jobs = statement.fetch_all(&self.pool).await?;
        Ok(jobs)
    }

    async fn count_jobs(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jobs")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn delete_all_jobs(&self) -> Result<u64> {
        let res = sqlx::query("DELETE FROM jobs").execute(&self.pool).await?;
        Ok(res.rows_affected())
    }
}

#[async_trait]
impl ApplicationStore for PgStore {
    async fn insert_application(&self, application: NewApplication) -> Result<Application> {
        let query = format!(
            r#"
            INSERT INTO applications (id, job_id, worker_id, recruiter_id, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            APPLICATION_COLUMNS
        );

        let application = sqlx::query_as::<_, Application>(&query)
            .bind(Uuid::new_v4())
            .bind(application.job_id)
            .bind(application.worker_id)
            .bind(application.recruiter_id)
            .bind(application.status)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    Error::Conflict("Already applied".to_string())
                } else {
                    Error::from(e)
                }
            })?;

        Ok(application)
    }

    async fn find_application(&self, id: Uuid) -> Result<Option<Application>> {
        let query = format!(
            "SELECT {} FROM applications WHERE id = $1",
            APPLICATION_COLUMNS
        );
        let application = sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(application)
    }

    async fn list_applications_for_job(&self, job_id: Uuid) -> Result<Vec<Application>> {
        let query = format!(
            "SELECT {} FROM applications WHERE job_id = $1 ORDER BY applied_at DESC, seq DESC",
            APPLICATION_COLUMNS
        );
        let items = sqlx::query_as::<_, Application>(&query)
            .bind(job_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    async fn list_applications_for_worker(&self, worker_id: Uuid) -> Result<Vec<Application>> {
        let query = format!(
            "SELECT {} FROM applications WHERE worker_id = $1 ORDER BY applied_at DESC, seq DESC",
            APPLICATION_COLUMNS
        );
        let items = sqlx::query_as::<_, Application>(&query)
            .bind(worker_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    async fn update_status_if_pending(
        &self,
        id: Uuid,
        status: ApplicationStatus,
    ) -> Result<Option<Application>> {
        let query = format!(
            r#"
            UPDATE applications
            SET status = $2
            WHERE id = $1 AND status = 'pending'
            RETURNING {}
            "#,
            APPLICATION_COLUMNS
        );
        let application = sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(&self.pool)
            .await?;
        Ok(application)
    }

    async fn count_applications(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM applications")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn delete_all_applications(&self) -> Result<u64> {
        let res = sqlx::query("DELETE FROM applications")
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected())
    }
}
