use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Worker,
    Recruiter,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Worker => "worker",
            Role::Recruiter => "recruiter",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "worker" => Ok(Role::Worker),
            "recruiter" => Ok(Role::Recruiter),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "recruiter_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RecruiterType {
    Individual,
    Contractor,
    Business,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerProfile {
    pub locality: Option<String>,
    pub primary_skill: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub experience_years: Option<Decimal>,
    pub availability: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub daily_wage: Option<Decimal>,
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruiterProfile {
    pub organization_name: Option<String>,
    pub recruiter_type: Option<RecruiterType>,
}

/// Role-specific part of a user record. The variant is the user's role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum UserProfile {
    Worker(WorkerProfile),
    Recruiter(RecruiterProfile),
}

impl UserProfile {
    pub fn role(&self) -> Role {
        match self {
            UserProfile::Worker(_) => Role::Worker,
            UserProfile::Recruiter(_) => Role::Recruiter,
        }
    }

    pub fn as_worker(&self) -> Option<&WorkerProfile> {
        match self {
            UserProfile::Worker(profile) => Some(profile),
            UserProfile::Recruiter(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub phone: String,
    pub city: String,
    #[serde(flatten)]
    pub profile: UserProfile,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn role(&self) -> Role {
        self.profile.role()
    }

    pub fn is_recruiter(&self) -> bool {
        self.role() == Role::Recruiter
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub city: String,
    pub profile: UserProfile,
}

/// Flat row shape of the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub phone: String,
    pub city: String,
    pub locality: Option<String>,
    pub primary_skill: Option<String>,
    pub experience_years: Option<Decimal>,
    pub availability: Option<String>,
    pub daily_wage: Option<Decimal>,
    pub bio: Option<String>,
    pub organization_name: Option<String>,
    pub recruiter_type: Option<RecruiterType>,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        let profile = match row.role {
            Role::Worker => UserProfile::Worker(WorkerProfile {
                locality: row.locality,
                primary_skill: row.primary_skill,
                experience_years: row.experience_years,
                availability: row.availability,
                daily_wage: row.daily_wage,
                bio: row.bio,
            }),
            Role::Recruiter => UserProfile::Recruiter(RecruiterProfile {
                organization_name: row.organization_name,
                recruiter_type: row.recruiter_type,
            }),
        };

        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            password: row.password,
            phone: row.phone,
            city: row.city,
            profile,
            created_at: row.created_at,
        }
    }
}
