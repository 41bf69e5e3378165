use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use marketplace_backend::{
    database::{MemoryStore, Stores},
    routes, AppState,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;
use uuid::Uuid;

fn app(enable_seed: bool) -> Router {
    let state = AppState::new(Stores::memory(MemoryStore::new()));
    routes::router(state, enable_seed)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<JsonValue>) -> (StatusCode, JsonValue) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn register(app: &Router, email: &str, role: &str, extra: JsonValue) -> Uuid {
    let mut body = json!({
        "name": format!("User {}", email),
        "email": email,
        "password": "password123",
        "role": role,
        "phone": "9876543210",
        "city": "Mumbai",
    });
    if let (Some(body), Some(extra)) = (body.as_object_mut(), extra.as_object()) {
        body.extend(extra.clone());
    }
    let (status, resp) = send(app, "POST", "/api/auth/register", Some(body)).await;
    assert_eq!(status, StatusCode::OK, "register failed: {}", resp);
    resp["user"]["id"].as_str().unwrap().parse().unwrap()
}

fn job_body(recruiter_id: Uuid, skill: &str) -> JsonValue {
    json!({
        "title": format!("{} needed", skill),
        "skillRequired": skill,
        "description": "Short engagement",
        "location": "Bandra, Mumbai",
        "duration": "2 Days",
        "paymentType": "daily",
        "budget": "800",
        "experienceRequired": 2,
        "recruiterId": recruiter_id,
    })
}

async fn post_job(app: &Router, recruiter_id: Uuid, skill: &str) -> Uuid {
    let (status, resp) = send(app, "POST", "/api/jobs", Some(job_body(recruiter_id, skill))).await;
    assert_eq!(status, StatusCode::OK, "create job failed: {}", resp);
    resp["job"]["id"].as_str().unwrap().parse().unwrap()
}

async fn apply(app: &Router, job_id: Uuid, worker_id: Uuid) -> (StatusCode, JsonValue) {
    send(
        app,
        "POST",
        "/api/applications",
        Some(json!({ "jobId": job_id, "workerId": worker_id })),
    )
    .await
}

#[tokio::test]
async fn recruiter_posts_and_browses_jobs() {
    let app = app(false);
    let recruiter = register(&app, "recruiter@demo.com", "recruiter", json!({ "recruiterType": "business" })).await;

    let (status, resp) = send(&app, "POST", "/api/jobs", Some(job_body(recruiter, "Plumber"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["success"], true);
    assert_eq!(resp["job"]["recruiterId"], recruiter.to_string());
    assert_eq!(resp["job"]["budget"], 800.0);
    let plumber_job = resp["job"]["id"].as_str().unwrap().to_string();

    post_job(&app, recruiter, "plumbing helper").await;
    post_job(&app, recruiter, "Electrician").await;

    let (status, resp) = send(&app, "GET", "/api/jobs?skill=plumb", None).await;
    assert_eq!(status, StatusCode::OK);
    let jobs = resp["jobs"].as_array().unwrap();
    assert_eq!(jobs.len(), 2);
    assert!(jobs
        .iter()
        .all(|j| j["skillRequired"].as_str().unwrap().to_lowercase().contains("plumb")));

    let (_, resp) = send(&app, "GET", &format!("/api/jobs?recruiterId={}", recruiter), None).await;
    assert_eq!(resp["jobs"].as_array().unwrap().len(), 3);
    assert_eq!(resp["jobs"][0]["skillRequired"], "Electrician");

    let (status, resp) = send(&app, "GET", &format!("/api/jobs/{}", plumber_job), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["job"]["title"], "Plumber needed");

    let (status, resp) = send(&app, "GET", &format!("/api/jobs/{}", Uuid::new_v4()), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(resp["error"], "Job not found");
}

#[tokio::test]
async fn only_recruiters_can_post_jobs() {
    let app = app(false);
    let worker = register(&app, "worker@demo.com", "worker", json!({ "primarySkill": "Painter" })).await;

    for poster in [worker, Uuid::new_v4()] {
        let (status, resp) = send(&app, "POST", "/api/jobs", Some(job_body(poster, "Painter"))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert!(resp["error"].as_str().unwrap().contains("Recruiter account not found"));
    }

    let (_, resp) = send(&app, "GET", "/api/jobs", None).await;
    assert!(resp["jobs"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn incomplete_job_payload_is_rejected() {
    let app = app(false);
    let recruiter = register(&app, "r@demo.com", "recruiter", json!({})).await;
    let (status, resp) = send(
        &app,
        "POST",
        "/api/jobs",
        Some(json!({ "title": "Painter", "recruiterId": recruiter })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(resp["error"].is_string());
}

#[tokio::test]
async fn whitespace_only_job_text_is_rejected() {
    let app = app(false);
    let recruiter = register(&app, "r@demo.com", "recruiter", json!({})).await;
    let mut body = job_body(recruiter, "Painter");
    body["title"] = json!("   ");

    let (status, resp) = send(&app, "POST", "/api/jobs", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(resp["error"].is_string());

    let (_, resp) = send(&app, "GET", "/api/jobs", None).await;
    assert!(resp["jobs"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn fractional_years_are_accepted_on_jobs_and_workers() {
    let app = app(false);
    let recruiter = register(&app, "r@demo.com", "recruiter", json!({})).await;
    let worker = register(
        &app,
        "w@demo.com",
        "worker",
        json!({ "primarySkill": "Electrician", "experienceYears": 2.5 }),
    )
    .await;

    let mut body = job_body(recruiter, "Electrician");
    body["experienceRequired"] = json!(1.5);
    let (status, resp) = send(&app, "POST", "/api/jobs", Some(body)).await;
    assert_eq!(status, StatusCode::OK, "create job failed: {}", resp);
    assert_eq!(resp["job"]["experienceRequired"], 1.5);
    let job: Uuid = resp["job"]["id"].as_str().unwrap().parse().unwrap();

    apply(&app, job, worker).await;
    let (_, resp) = send(&app, "GET", &format!("/api/applications?jobId={}", job), None).await;
    assert_eq!(resp["applications"][0]["experience"], "2.5 Years");
}

#[tokio::test]
async fn worker_applies_once_and_recruiter_decides() {
    let app = app(false);
    let recruiter = register(&app, "r@demo.com", "recruiter", json!({})).await;
    let worker = register(
        &app,
        "w@demo.com",
        "worker",
        json!({ "primarySkill": "Carpenter", "experienceYears": "5" }),
    )
    .await;
    let job = post_job(&app, recruiter, "Carpenter").await;

    let (status, resp) = apply(&app, job, worker).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["application"]["status"], "pending");
    assert_eq!(resp["application"]["recruiterId"], recruiter.to_string());
    let application_id = resp["application"]["id"].as_str().unwrap().to_string();

    let (status, resp) = apply(&app, job, worker).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["error"], "Already applied");

    let (_, resp) = send(&app, "GET", &format!("/api/workers/{}/applications", worker), None).await;
    assert_eq!(resp["applications"].as_array().unwrap().len(), 1);

    let status_uri = format!("/api/applications/{}/status", application_id);

    let stranger = register(&app, "other@demo.com", "recruiter", json!({})).await;
    let (status, _) = send(
        &app,
        "PATCH",
        &status_uri,
        Some(json!({ "status": "accepted", "recruiterId": stranger })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, resp) = send(
        &app,
        "PATCH",
        &status_uri,
        Some(json!({ "status": "accepted", "recruiterId": recruiter })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["application"]["status"], "accepted");

    let (status, resp) = send(
        &app,
        "PATCH",
        &status_uri,
        Some(json!({ "status": "accepted", "recruiterId": recruiter })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["application"]["status"], "accepted");

    let (status, resp) = send(
        &app,
        "PATCH",
        &status_uri,
        Some(json!({ "status": "rejected", "recruiterId": recruiter })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["error"], "Application is already accepted");

    let (status, _) = send(
        &app,
        "PATCH",
        &format!("/api/applications/{}/status", Uuid::new_v4()),
        Some(json!({ "status": "accepted", "recruiterId": recruiter })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn applicant_list_is_newest_first_and_formatted() {
    let app = app(false);
    let recruiter = register(&app, "r@demo.com", "recruiter", json!({})).await;
    let veteran = register(
        &app,
        "vet@demo.com",
        "worker",
        json!({ "primarySkill": "Plumber", "experienceYears": 5 }),
    )
    .await;
    let newcomer = register(&app, "new@demo.com", "worker", json!({})).await;
    let job = post_job(&app, recruiter, "Plumber").await;

    apply(&app, job, veteran).await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    apply(&app, job, newcomer).await;

    let (status, resp) = send(&app, "GET", &format!("/api/applications?jobId={}", job), None).await;
    assert_eq!(status, StatusCode::OK);
    let applicants = resp["applications"].as_array().unwrap();
    assert_eq!(applicants.len(), 2);
    assert_eq!(applicants[0]["workerId"], newcomer.to_string());
    assert_eq!(applicants[0]["experience"], "N/A");
    assert_eq!(applicants[0]["skill"], "Generic");
    assert_eq!(applicants[1]["experience"], "5 Years");
    assert_eq!(applicants[1]["skill"], "Plumber");
    assert_eq!(applicants[1]["phone"], "9876543210");

    let (status, resp) = send(&app, "GET", "/api/applications", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["error"], "Job ID required");
}

#[tokio::test]
async fn registration_and_login() {
    let app = app(false);
    let body = json!({
        "name": "Carpenter Person A",
        "email": "worker1@demo.com",
        "password": "password123",
        "role": "worker",
        "phone": "9000000010",
        "city": "Mumbai",
    });

    let (status, resp) = send(&app, "POST", "/api/auth/register", Some(body.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["user"]["role"], "worker");
    assert!(resp["user"].get("password").is_none());

    let (status, resp) = send(&app, "POST", "/api/auth/register", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["error"], "User already exists");

    let (status, resp) = send(
        &app,
        "POST",
        "/api/auth/login",
        Some(json!({ "email": "worker1@demo.com", "password": "password123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["user"]["email"], "worker1@demo.com");

    let (status, resp) = send(
        &app,
        "POST",
        "/api/auth/login",
        Some(json!({ "email": "worker1@demo.com", "password": "nope" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(resp["error"], "Invalid credentials");

    let (status, resp) = send(
        &app,
        "POST",
        "/api/auth/register",
        Some(json!({ "email": "x@demo.com", "role": "admin" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["error"], "Missing required fields");

    let (status, resp) = send(
        &app,
        "POST",
        "/api/auth/register",
        Some(json!({
            "name": "   ",
            "email": "blank@demo.com",
            "password": "password123",
            "role": "worker",
            "phone": "9000000011",
            "city": "Pune",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["error"], "Missing required fields");
}

#[tokio::test]
async fn seeding_builds_the_demo_marketplace() {
    let app = app(true);
    let (status, resp) = send(&app, "POST", "/api/seed", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["summary"]["recruiters"], 3);
    assert_eq!(resp["summary"]["workers"], 16);
    assert_eq!(resp["summary"]["jobs"], 8);
    assert_eq!(resp["summary"]["applications"], 4);

    let (status, resp) = send(
        &app,
        "POST",
        "/api/auth/login",
        Some(json!({ "email": "recruiter1@demo.com", "password": "password123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let recruiter = resp["user"]["id"].as_str().unwrap().to_string();

    let (_, resp) = send(&app, "GET", &format!("/api/jobs?recruiterId={}", recruiter), None).await;
    let jobs = resp["jobs"].as_array().unwrap();
    assert_eq!(jobs.len(), 4);
    let carpentry = jobs
        .iter()
        .find(|j| j["skillRequired"] == "Carpenter")
        .unwrap();

    let (_, resp) = send(
        &app,
        "GET",
        &format!("/api/applications?jobId={}", carpentry["id"].as_str().unwrap()),
        None,
    )
    .await;
    let applicants = resp["applications"].as_array().unwrap();
    assert_eq!(applicants.len(), 2);
    let helper = applicants
        .iter()
        .find(|a| a["skill"] == "Helper")
        .unwrap();
    assert_eq!(helper["status"], "pending");
    assert_eq!(helper["name"], "Helper Person A");
}

#[tokio::test]
async fn seed_route_is_hidden_unless_enabled() {
    let app = app(false);
    let (status, _) = send(&app, "POST", "/api/seed", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_input_gets_an_error_body() {
    let app = app(false);

    let (status, resp) = send(&app, "GET", "/api/jobs/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(resp["error"].is_string());

    let (status, resp) = send(&app, "GET", "/api/jobs?recruiterId=abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["error"], "Invalid recruiterId");

    let (status, resp) = send(
        &app,
        "POST",
        "/api/applications",
        Some(json!({ "jobId": "nope" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(resp["error"].is_string());
}

#[tokio::test]
async fn health_and_openapi_are_served() {
    let app = app(false);
    let (status, resp) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["status"], "ok");

    let (status, resp) = send(&app, "GET", "/api/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(resp["paths"].get("/api/jobs").is_some());
}
