pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::database::Stores;
use crate::services::{
    account_service::AccountService, application_service::ApplicationService,
    job_service::JobService, seed_service::SeedService,
};

#[derive(Clone)]
pub struct AppState {
    pub stores: Stores,
    pub job_service: JobService,
    pub application_service: ApplicationService,
    pub account_service: AccountService,
    pub seed_service: SeedService,
}

impl AppState {
    pub fn new(stores: Stores) -> Self {
        let job_service = JobService::new(stores.users.clone(), stores.jobs.clone());
        let application_service = ApplicationService::new(
            stores.users.clone(),
            stores.jobs.clone(),
            stores.applications.clone(),
        );
        let account_service = AccountService::new(stores.users.clone());
        let seed_service = SeedService::new(&stores);

        Self {
            stores,
            job_service,
            application_service,
            account_service,
            seed_service,
        }
    }
}
