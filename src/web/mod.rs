// src/web/mod.rs
pub mod handlers;
pub mod types;

pub use types::*;

use crate::config::ConfigManager;
use crate::inference::{HttpTransport, ModelInvoker};
use crate::store::{DatabaseConfig, DocumentStore};
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, get, options, patch, post, routes, Request, Response, State};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, info};

/// Shared state for all request handlers
pub struct AppState {
    pub invoker: Arc<ModelInvoker<HttpTransport>>,
    pub pool: SqlitePool,
    pub documents: DocumentStore,
    pub max_tokens: u32,
    pub temperature: f32,
}

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, PATCH, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
    }
}

#[post("/chat", data = "<request>")]
pub async fn chat(request: Json<ChatRequest>, state: &State<AppState>) -> Json<ChatResponse> {
    handlers::chat_handler(request, state).await
}

#[post("/analyze-skills", data = "<request>")]
pub async fn analyze_skills(
    request: Json<SkillAnalysisRequest>,
    state: &State<AppState>,
) -> Json<ReportResponse> {
    handlers::analyze_skills_handler(request, state).await
}

#[post("/career-paths", data = "<request>")]
pub async fn career_paths(
    request: Json<CareerPathsRequest>,
    state: &State<AppState>,
) -> Result<Json<ReportResponse>, Json<ErrorResponse>> {
    handlers::career_paths_handler(request, state).await
}

#[post("/resume", data = "<request>")]
pub async fn resume(
    request: Json<ResumeRequest>,
    state: &State<AppState>,
) -> Result<Json<ReportResponse>, Json<ErrorResponse>> {
    handlers::resume_handler(request, state).await
}

#[post("/cover-letter", data = "<request>")]
pub async fn cover_letter(
    request: Json<CoverLetterRequest>,
    state: &State<AppState>,
) -> Result<Json<ReportResponse>, Json<ErrorResponse>> {
    handlers::cover_letter_handler(request, state).await
}

#[post("/linkedin-summary", data = "<request>")]
pub async fn linkedin_summary(
    request: Json<LinkedinSummaryRequest>,
    state: &State<AppState>,
) -> Json<ReportResponse> {
    handlers::linkedin_summary_handler(request, state).await
}

#[post("/job-search", data = "<request>")]
pub async fn job_search(
    request: Json<JobSearchRequest>,
    state: &State<AppState>,
) -> Json<ReportResponse> {
    handlers::job_search_handler(request, state).await
}

#[post("/application-tips", data = "<request>")]
pub async fn application_tips(
    request: Json<ApplicationTipsRequest>,
    state: &State<AppState>,
) -> Json<ReportResponse> {
    handlers::application_tips_handler(request, state).await
}

#[post("/profile", data = "<request>")]
pub async fn save_profile(
    request: Json<SaveProfileRequest>,
    state: &State<AppState>,
) -> Result<Json<ActionResponse>, Json<ErrorResponse>> {
    handlers::save_profile_handler(request, state).await
}

#[get("/profile/<user_id>")]
pub async fn get_profile(
    user_id: &str,
    state: &State<AppState>,
) -> Result<Json<DataResponse<crate::store::StoredProfile>>, Json<ErrorResponse>> {
    handlers::get_profile_handler(user_id, state).await
}

#[post("/applications", data = "<request>")]
pub async fn track_application(
    request: Json<TrackApplicationRequest>,
    state: &State<AppState>,
) -> Result<Json<DataResponse<crate::store::JobApplication>>, Json<ErrorResponse>> {
    handlers::track_application_handler(request, state).await
}

#[get("/applications/<user_id>")]
pub async fn list_applications(
    user_id: &str,
    state: &State<AppState>,
) -> Result<Json<DataResponse<Vec<crate::store::JobApplication>>>, Json<ErrorResponse>> {
    handlers::list_applications_handler(user_id, state).await
}

#[patch("/applications/<application_id>/status", data = "<request>")]
pub async fn update_application_status(
    application_id: &str,
    request: Json<UpdateApplicationStatusRequest>,
    state: &State<AppState>,
) -> Result<Json<ActionResponse>, Json<ErrorResponse>> {
    handlers::update_application_status_handler(application_id, request, state).await
}

#[get("/health")]
pub async fn health() -> Json<ActionResponse> {
    handlers::health_handler().await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
        vec![
            "Check your request JSON format".to_string(),
            "Verify all required fields are present".to_string(),
        ],
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec![
            "Try again in a few moments".to_string(),
            "Contact support if the problem persists".to_string(),
        ],
    ))
}

// Main server start function
pub async fn start_web_server(config: ConfigManager) -> Result<()> {
    config.ensure_directories().await?;

    let mut db_config = DatabaseConfig::new(config.environment.database_path.clone());

    if let Err(e) = db_config.init_pool().await {
        error!("Failed to initialize database: {}", e);
        return Err(e);
    }

    if let Err(e) = db_config.migrate().await {
        error!("Failed to run database migrations: {}", e);
        return Err(e);
    }

    let pool = db_config.pool()?.clone();
    let invoker = Arc::new(ModelInvoker::from_config(&config.model)?);
    let documents = DocumentStore::new(config.environment.documents_path.clone());

    let state = AppState {
        invoker,
        pool,
        documents,
        max_tokens: config.model.max_tokens,
        temperature: config.model.temperature,
    };

    info!("Starting LaunchPad.AI career assistant API server");
    info!("Database: {}", config.environment.database_path.display());
    info!("Model endpoint: {}", config.model.endpoint_url);
    info!("Primary model: {}", config.model.primary_model);

    let _rocket = rocket::build()
        .attach(Cors)
        .manage(state)
        .register("/api", catchers![bad_request, internal_error])
        .mount(
            "/api",
            routes![
                chat,
                analyze_skills,
                career_paths,
                resume,
                cover_letter,
                linkedin_summary,
                job_search,
                application_tips,
                save_profile,
                get_profile,
                track_application,
                list_applications,
                update_application_status,
                health,
                options,
            ],
        )
        .launch()
        .await;

    Ok(())
}
