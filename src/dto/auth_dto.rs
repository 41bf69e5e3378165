use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::{Error, Result};
use crate::models::user::{
    NewUser, RecruiterProfile, RecruiterType, Role, User, UserProfile, WorkerProfile,
};
use crate::utils::validation::{non_blank, validate_non_blank};

use super::lenient_number;

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";

/// Registration body. Role-specific fields sit next to the common ones and
/// are only kept for the matching role.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterPayload {
    #[validate(required, custom(function = "validate_non_blank"))]
    pub name: Option<String>,
    #[validate(required, custom(function = "validate_non_blank"))]
    pub email: Option<String>,
    #[validate(required, custom(function = "validate_non_blank"))]
    pub password: Option<String>,
    #[validate(required, custom(function = "validate_non_blank"))]
    pub role: Option<String>,
    #[validate(required, custom(function = "validate_non_blank"))]
    pub phone: Option<String>,
    #[validate(required, custom(function = "validate_non_blank"))]
    pub city: Option<String>,
    pub locality: Option<String>,
    pub primary_skill: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub experience_years: Option<Decimal>,
    pub availability: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub daily_wage: Option<Decimal>,
    pub bio: Option<String>,
    pub organization_name: Option<String>,
    pub recruiter_type: Option<RecruiterType>,
}

fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn required(value: Option<String>) -> Result<String> {
    non_blank(value.as_deref())
        .map(str::to_string)
        .ok_or_else(|| Error::BadRequest(MISSING_FIELDS_MESSAGE.to_string()))
}

impl RegisterPayload {
    /// Builds the user record from a payload that passed `validate()`.
    pub fn into_new_user(self) -> Result<NewUser> {
        let role: Role = required(self.role)?
            .parse()
            .map_err(|_| Error::BadRequest("Invalid role".to_string()))?;
        // Compared verbatim at login, so it is not trimmed.
        let password = optional_text(self.password)
            .ok_or_else(|| Error::BadRequest(MISSING_FIELDS_MESSAGE.to_string()))?;

        let profile = match role {
            Role::Worker => UserProfile::Worker(WorkerProfile {
                locality: optional_text(self.locality),
                primary_skill: optional_text(self.primary_skill),
                experience_years: self.experience_years,
                availability: optional_text(self.availability),
                daily_wage: self.daily_wage,
                bio: optional_text(self.bio),
            }),
            Role::Recruiter => UserProfile::Recruiter(RecruiterProfile {
                organization_name: optional_text(self.organization_name),
                recruiter_type: self.recruiter_type,
            }),
        };

        Ok(NewUser {
            name: required(self.name)?,
            email: required(self.email)?,
            password,
            phone: required(self.phone)?,
            city: required(self.city)?,
            profile,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginPayload {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Identity returned by registration and login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            role: user.role(),
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub user: UserSummary,
}

impl From<User> for AuthResponse {
    fn from(user: User) -> Self {
        Self {
            success: true,
            user: user.into(),
        }
    }
}
