// src/web/handlers.rs
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};

use crate::services::{
    CareerAgent, CareerPlanner, DocumentGenerator, JobSearcher, SkillAnalyzer, UserProfile,
};
use crate::store::{ApplicationRepository, CareerPlanRepository, ProfileRepository};
use crate::web::types::*;
use crate::web::AppState;

pub async fn chat_handler(request: Json<ChatRequest>, state: &State<AppState>) -> Json<ChatResponse> {
    let history: Vec<_> = request.history.iter().map(Into::into).collect();
    let agent = CareerAgent::new(state.invoker.clone(), state.max_tokens, state.temperature);

    let reply = agent.process_message(&request.message, &history).await;

    Json(ChatResponse {
        success: true,
        reply,
    })
}

pub async fn analyze_skills_handler(
    request: Json<SkillAnalysisRequest>,
    state: &State<AppState>,
) -> Json<ReportResponse> {
    let analyzer = SkillAnalyzer::new(state.invoker.clone());

    let report = analyzer
        .analyze(&request.user_input, &request.resume_text)
        .await;

    Json(ReportResponse {
        success: true,
        report,
    })
}

pub async fn career_paths_handler(
    request: Json<CareerPathsRequest>,
    state: &State<AppState>,
) -> Result<Json<ReportResponse>, Json<ErrorResponse>> {
    let planner = CareerPlanner::new(state.invoker.clone());

    let report = planner
        .suggest_paths(&request.skills, &request.interests, &request.experience)
        .await;

    if let Some(user_id) = &request.user_id {
        let repo = CareerPlanRepository::new(&state.pool);
        if let Err(e) = repo.save(user_id, "Career Path Suggestions", &report).await {
            error!("Failed to persist career plan: {}", e);
            return Err(Json(ErrorResponse::storage(e)));
        }
        info!("Persisted career plan for user: {}", user_id);
    }

    Ok(Json(ReportResponse {
        success: true,
        report,
    }))
}

pub async fn resume_handler(
    request: Json<ResumeRequest>,
    state: &State<AppState>,
) -> Result<Json<ReportResponse>, Json<ErrorResponse>> {
    let generator = DocumentGenerator::new(state.invoker.clone());

    let report = generator
        .create_resume(&request.personal_info, &request.experience, &request.skills)
        .await;

    if let Some(user_id) = &request.user_id {
        if let Err(e) = state.documents.save(user_id, "resume", &report).await {
            error!("Failed to store resume: {}", e);
            return Err(Json(ErrorResponse::storage(e)));
        }
    }

    Ok(Json(ReportResponse {
        success: true,
        report,
    }))
}

pub async fn cover_letter_handler(
    request: Json<CoverLetterRequest>,
    state: &State<AppState>,
) -> Result<Json<ReportResponse>, Json<ErrorResponse>> {
    let generator = DocumentGenerator::new(state.invoker.clone());
    let profile = UserProfile {
        skills: request.skills.clone(),
        experience: request.experience.clone(),
        achievements: request.achievements.clone(),
        ..Default::default()
    };

    let report = generator
        .create_cover_letter(&request.job_description, &profile)
        .await;

    if let Some(user_id) = &request.user_id {
        if let Err(e) = state.documents.save(user_id, "cover_letter", &report).await {
            error!("Failed to store cover letter: {}", e);
            return Err(Json(ErrorResponse::storage(e)));
        }
    }

    Ok(Json(ReportResponse {
        success: true,
        report,
    }))
}

pub async fn linkedin_summary_handler(
    request: Json<LinkedinSummaryRequest>,
    state: &State<AppState>,
) -> Json<ReportResponse> {
    let generator = DocumentGenerator::new(state.invoker.clone());
    let profile = UserProfile {
        skills: request.skills.clone(),
        experience: request.experience.clone(),
        goals: request.goals.clone(),
        industry: request.industry.clone(),
        ..Default::default()
    };

    let report = generator.create_linkedin_summary(&profile).await;

    Json(ReportResponse {
        success: true,
        report,
    })
}

pub async fn job_search_handler(
    request: Json<JobSearchRequest>,
    state: &State<AppState>,
) -> Json<ReportResponse> {
    let searcher = JobSearcher::new(state.invoker.clone());
    let level = crate::utils::parse_experience_level(&request.experience_level);

    let report = searcher.search(&request.role, &request.location, level).await;

    Json(ReportResponse {
        success: true,
        report,
    })
}

pub async fn application_tips_handler(
    request: Json<ApplicationTipsRequest>,
    state: &State<AppState>,
) -> Json<ReportResponse> {
    let searcher = JobSearcher::new(state.invoker.clone());

    let report = searcher.application_tips(&request.job_title).await;

    Json(ReportResponse {
        success: true,
        report,
    })
}

pub async fn save_profile_handler(
    request: Json<SaveProfileRequest>,
    state: &State<AppState>,
) -> Result<Json<ActionResponse>, Json<ErrorResponse>> {
    let repo = ProfileRepository::new(&state.pool);

    match repo
        .save(
            &request.user_id,
            &request.skills,
            &request.interests,
            &request.experience,
            &request.goals,
        )
        .await
    {
        Ok(profile) => Ok(Json(ActionResponse {
            success: true,
            message: format!("Profile saved for {}", profile.user_id),
        })),
        Err(e) => {
            error!("Failed to save profile: {}", e);
            Err(Json(ErrorResponse::storage(e)))
        }
    }
}

pub async fn get_profile_handler(
    user_id: &str,
    state: &State<AppState>,
) -> Result<Json<DataResponse<crate::store::StoredProfile>>, Json<ErrorResponse>> {
    let repo = ProfileRepository::new(&state.pool);

    match repo.get(user_id).await {
        Ok(Some(profile)) => Ok(Json(DataResponse::new(profile))),
        Ok(None) => Err(Json(ErrorResponse::new(
            format!("No profile found for user: {}", user_id),
            "NOT_FOUND".to_string(),
            vec!["Save a profile first via POST /api/profile".to_string()],
        ))),
        Err(e) => {
            error!("Failed to load profile: {}", e);
            Err(Json(ErrorResponse::storage(e)))
        }
    }
}

pub async fn track_application_handler(
    request: Json<TrackApplicationRequest>,
    state: &State<AppState>,
) -> Result<Json<DataResponse<crate::store::JobApplication>>, Json<ErrorResponse>> {
    let repo = ApplicationRepository::new(&state.pool);

    match repo
        .track(&request.user_id, &request.job_title, &request.company)
        .await
    {
        Ok(application) => Ok(Json(DataResponse::new(application))),
        Err(e) => {
            error!("Failed to track application: {}", e);
            Err(Json(ErrorResponse::storage(e)))
        }
    }
}

pub async fn list_applications_handler(
    user_id: &str,
    state: &State<AppState>,
) -> Result<Json<DataResponse<Vec<crate::store::JobApplication>>>, Json<ErrorResponse>> {
    let repo = ApplicationRepository::new(&state.pool);

    match repo.list_for_user(user_id).await {
        Ok(applications) => Ok(Json(DataResponse::new(applications))),
        Err(e) => {
            error!("Failed to list applications: {}", e);
            Err(Json(ErrorResponse::storage(e)))
        }
    }
}

pub async fn update_application_status_handler(
    application_id: &str,
    request: Json<UpdateApplicationStatusRequest>,
    state: &State<AppState>,
) -> Result<Json<ActionResponse>, Json<ErrorResponse>> {
    let repo = ApplicationRepository::new(&state.pool);

    match repo
        .update_status(application_id, &request.status, request.notes.as_deref())
        .await
    {
        Ok(true) => Ok(Json(ActionResponse {
            success: true,
            message: format!("Application moved to: {}", request.status),
        })),
        Ok(false) => Err(Json(ErrorResponse::new(
            format!("No application found with id: {}", application_id),
            "NOT_FOUND".to_string(),
            vec!["Check the application id".to_string()],
        ))),
        Err(e) => {
            error!("Failed to update application: {}", e);
            Err(Json(ErrorResponse::storage(e)))
        }
    }
}

pub async fn health_handler() -> Json<ActionResponse> {
    Json(ActionResponse {
        success: true,
        message: "LaunchPad.AI career service is running".to_string(),
    })
}
