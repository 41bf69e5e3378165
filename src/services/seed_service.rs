use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use crate::database::{ApplicationStore, JobStore, Stores, UserStore};
use crate::dto::seed_dto::SeedSummary;
use crate::error::{Error, Result};
use crate::models::application::{ApplicationStatus, NewApplication};
use crate::models::job::{NewJob, PaymentType};
use crate::models::user::{
    NewUser, RecruiterProfile, RecruiterType, Role, User, UserProfile, WorkerProfile,
};

pub const DEMO_PASSWORD: &str = "password123";
pub const DEMO_RECRUITER_EMAIL: &str = "recruiter1@demo.com";
pub const DEMO_WORKER_EMAIL: &str = "worker1@demo.com";

struct DemoRecruiter {
    name: &'static str,
    email: &'static str,
    city: &'static str,
    kind: RecruiterType,
    phone: &'static str,
}

const RECRUITERS: [DemoRecruiter; 3] = [
    DemoRecruiter {
        name: "Acme Construction",
        email: DEMO_RECRUITER_EMAIL,
        city: "Mumbai",
        kind: RecruiterType::Business,
        phone: "9990000001",
    },
    DemoRecruiter {
        name: "Rahul Sharma",
        email: "recruiter2@demo.com",
        city: "Pune",
        kind: RecruiterType::Individual,
        phone: "9990000002",
    },
    DemoRecruiter {
        name: "Urban Home Soln",
        email: "recruiter3@demo.com",
        city: "Bangalore",
        kind: RecruiterType::Business,
        phone: "9990000003",
    },
];

const SKILLS: [&str; 8] = [
    "Carpenter",
    "Plumber",
    "Electrician",
    "Driver",
    "Painter",
    "Mechanic",
    "Maid",
    "Helper",
];

struct DemoJob {
    title: &'static str,
    skill: &'static str,
    location: &'static str,
    budget: i64,
    payment_type: PaymentType,
    recruiter: usize,
}

const JOBS: [DemoJob; 8] = [
    DemoJob {
        title: "Carpenter Needed for Office Renovation",
        skill: "Carpenter",
        location: "Andheri, Mumbai",
        budget: 1500,
        payment_type: PaymentType::Daily,
        recruiter: 0,
    },
    DemoJob {
        title: "Urgent Plumber Required",
        skill: "Plumber",
        location: "Bandra, Mumbai",
        budget: 800,
        payment_type: PaymentType::Daily,
        recruiter: 0,
    },
    DemoJob {
        title: "Electrician for Wiring",
        skill: "Electrician",
        location: "Juhu, Mumbai",
        budget: 2000,
        payment_type: PaymentType::Contract,
        recruiter: 0,
    },
    DemoJob {
        title: "House Painter Needed",
        skill: "Painter",
        location: "Dadar, Mumbai",
        budget: 1200,
        payment_type: PaymentType::Daily,
        recruiter: 0,
    },
    DemoJob {
        title: "Personal Driver Needed",
        skill: "Driver",
        location: "Pune",
        budget: 15000,
        payment_type: PaymentType::Monthly,
        recruiter: 1,
    },
    DemoJob {
        title: "Helper for Shifting",
        skill: "Helper",
        location: "Pune",
        budget: 600,
        payment_type: PaymentType::Daily,
        recruiter: 1,
    },
    DemoJob {
        title: "Mechanic for Garage",
        skill: "Mechanic",
        location: "Bangalore",
        budget: 18000,
        payment_type: PaymentType::Monthly,
        recruiter: 2,
    },
    DemoJob {
        title: "Full-time Maid",
        skill: "Maid",
        location: "Bangalore",
        budget: 12000,
        payment_type: PaymentType::Monthly,
        recruiter: 2,
    },
];

/// (worker skill, job index, status). The Helper applying to the carpentry
/// job is a deliberate skill mismatch.
const APPLICATIONS: [(&str, usize, ApplicationStatus); 4] = [
    ("Carpenter", 0, ApplicationStatus::Pending),
    ("Plumber", 1, ApplicationStatus::Accepted),
    ("Electrician", 2, ApplicationStatus::Rejected),
    ("Helper", 0, ApplicationStatus::Pending),
];

/// Replaces every record with the demo dataset.
#[derive(Clone)]
pub struct SeedService {
    users: Arc<dyn UserStore>,
    jobs: Arc<dyn JobStore>,
    applications: Arc<dyn ApplicationStore>,
}

impl SeedService {
    pub fn new(stores: &Stores) -> Self {
        Self {
            users: stores.users.clone(),
            jobs: stores.jobs.clone(),
            applications: stores.applications.clone(),
        }
    }

    pub async fn run(&self) -> Result<SeedSummary> {
        let wiped_applications = self.applications.delete_all_applications().await?;
        let wiped_jobs = self.jobs.delete_all_jobs().await?;
        let wiped_users = self.users.delete_all_users().await?;
        tracing::info!(
            users = wiped_users,
            jobs = wiped_jobs,
            applications = wiped_applications,
            "Cleared existing data before seeding"
        );

        let mut recruiter_ids = Vec::with_capacity(RECRUITERS.len());
        for recruiter in &RECRUITERS {
            let user = self.users.insert_user(recruiter_record(recruiter)).await?;
            recruiter_ids.push(user.id);
        }

        let mut workers = Vec::with_capacity(SKILLS.len() * 2);
        for (i, record) in worker_records().into_iter().enumerate() {
            let user = self.users.insert_user(record).await.map_err(|e| {
                tracing::error!(index = i, error = %e, "Failed to seed worker");
                e
            })?;
            workers.push(user);
        }

        let mut job_ids = Vec::with_capacity(JOBS.len());
        for job in &JOBS {
            let created = self
                .jobs
                .insert_job(job_record(job, recruiter_ids[job.recruiter]))
                .await?;
            job_ids.push(created.id);
        }

        for (skill, job_index, status) in APPLICATIONS {
            let worker_id = first_worker_with_skill(&workers, skill)?;
            self.applications
                .insert_application(NewApplication {
                    job_id: job_ids[job_index],
                    worker_id,
                    recruiter_id: recruiter_ids[JOBS[job_index].recruiter],
                    status,
                })
                .await?;
        }

        // Counts come from the store, not from the inserts above.
        let summary = SeedSummary {
            recruiters: self.users.count_users_by_role(Role::Recruiter).await?,
            workers: self.users.count_users_by_role(Role::Worker).await?,
            jobs: self.jobs.count_jobs().await?,
            applications: self.applications.count_applications().await?,
        };
        tracing::info!(?summary, "Demo data seeded");
        Ok(summary)
    }
}

fn recruiter_record(recruiter: &DemoRecruiter) -> NewUser {
    let organization_name = match recruiter.kind {
        RecruiterType::Business => Some(recruiter.name.to_string()),
        _ => None,
    };
    NewUser {
        name: recruiter.name.to_string(),
        email: recruiter.email.to_string(),
        password: DEMO_PASSWORD.to_string(),
        phone: recruiter.phone.to_string(),
        city: recruiter.city.to_string(),
        profile: UserProfile::Recruiter(RecruiterProfile {
            organization_name,
            recruiter_type: Some(recruiter.kind),
        }),
    }
}

/// Two workers per skill: a senior "Person A" in Mumbai and a junior
/// "Person B" in Pune.
fn worker_records() -> Vec<NewUser> {
    let mut records = Vec::with_capacity(SKILLS.len() * 2);
    for (index, skill) in SKILLS.iter().enumerate() {
        let step = index as i64 * 50;
        let variants = [
            ("A", 3 + index as i64, 500 + step, "Mumbai"),
            ("B", 1, 400 + step, "Pune"),
        ];
        for (suffix, years, wage, city) in variants {
            let n = records.len();
            records.push(NewUser {
                name: format!("{} Person {}", skill, suffix),
                email: format!("worker{}@demo.com", n + 1),
                password: DEMO_PASSWORD.to_string(),
                phone: format!("90000000{}", n + 10),
                city: city.to_string(),
                profile: UserProfile::Worker(WorkerProfile {
                    locality: None,
                    primary_skill: Some(skill.to_string()),
                    experience_years: Some(Decimal::from(years)),
                    availability: Some("full-time".to_string()),
                    daily_wage: Some(Decimal::new(wage, 0)),
                    bio: Some(format!(
                        "Experienced {} looking for work in {}.",
                        skill, city
                    )),
                }),
            });
        }
    }
    records
}

fn job_record(job: &DemoJob, recruiter_id: Uuid) -> NewJob {
    let duration = match job.payment_type {
        PaymentType::Monthly => "6 Months",
        _ => "2 Days",
    };
    NewJob {
        title: job.title.to_string(),
        skill_required: job.skill.to_string(),
        description: format!(
            "We are looking for a skilled {} at {}. Good pay.",
            job.skill, job.location
        ),
        location: job.location.to_string(),
        duration: duration.to_string(),
        payment_type: job.payment_type,
        budget: Decimal::new(job.budget, 0),
        experience_required: Decimal::from(2),
        recruiter_id,
    }
}

fn first_worker_with_skill(workers: &[User], skill: &str) -> Result<Uuid> {
    workers
        .iter()
        .find(|w| {
            w.profile
                .as_worker()
                .and_then(|p| p.primary_skill.as_deref())
                == Some(skill)
        })
        .map(|w| w.id)
        .ok_or_else(|| Error::Internal(format!("No seeded worker with skill {}", skill)))
}
