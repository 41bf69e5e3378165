use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedSummary {
    pub recruiters: i64,
    pub workers: i64,
    pub jobs: i64,
    pub applications: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedCredentials {
    pub recruiter: String,
    pub worker: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedResponse {
    pub success: bool,
    pub message: String,
    pub summary: SeedSummary,
    pub credentials: SeedCredentials,
}
