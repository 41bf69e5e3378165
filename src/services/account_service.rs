use std::sync::Arc;

use crate::database::UserStore;
use crate::dto::auth_dto::{LoginPayload, RegisterPayload};
use crate::error::{Error, Result};
use crate::models::user::User;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Clone)]
pub struct AccountService {
    users: Arc<dyn UserStore>,
}

impl AccountService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    pub async fn register(&self, payload: RegisterPayload) -> Result<User> {
        let new_user = payload.into_new_user()?;
        let user = self.users.insert_user(new_user).await?;
        tracing::info!(user_id = %user.id, role = %user.role(), "User registered");
        Ok(user)
    }

    /// Unknown email and wrong password are indistinguishable to the caller.
    pub async fn login(&self, payload: LoginPayload) -> Result<User> {
        let (Some(email), Some(password)) = (payload.email, payload.password) else {
            return Err(Error::Unauthorized(INVALID_CREDENTIALS.to_string()));
        };

        match self.users.find_user_by_email(email.trim()).await? {
            Some(user) if user.password == password => {
                tracing::info!(user_id = %user.id, "User logged in");
                Ok(user)
            }
            _ => {
                tracing::debug!("Login rejected");
                Err(Error::Unauthorized(INVALID_CREDENTIALS.to_string()))
            }
        }
    }
}
