pub mod account_service;
pub mod application_service;
pub mod job_service;
pub mod seed_service;
