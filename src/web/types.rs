// src/web/types.rs
use rocket::serde::{Deserialize, Serialize};

use crate::prompt::Turn;

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct TurnDto {
    pub user: String,
    pub agent: String,
}

impl From<&TurnDto> for Turn {
    fn from(dto: &TurnDto) -> Self {
        Turn {
            user: dto.user.clone(),
            agent: dto.agent.clone(),
        }
    }
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<TurnDto>,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct SkillAnalysisRequest {
    pub user_input: String,
    #[serde(default)]
    pub resume_text: String,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct CareerPathsRequest {
    pub skills: String,
    pub interests: String,
    pub experience: String,
    /// When present, the generated plan is persisted for this user
    pub user_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct ResumeRequest {
    pub personal_info: String,
    pub experience: String,
    pub skills: String,
    /// When present, the document is stored for this user
    pub user_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct CoverLetterRequest {
    pub job_description: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub achievements: String,
    pub user_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct LinkedinSummaryRequest {
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub goals: String,
    #[serde(default)]
    pub industry: String,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct JobSearchRequest {
    pub role: String,
    pub location: String,
    #[serde(default)]
    pub experience_level: String,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct ApplicationTipsRequest {
    pub job_title: String,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct SaveProfileRequest {
    pub user_id: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub interests: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub goals: String,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct TrackApplicationRequest {
    pub user_id: String,
    pub job_title: String,
    pub company: String,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct UpdateApplicationStatusRequest {
    pub status: String,
    pub notes: Option<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ChatResponse {
    pub success: bool,
    pub reply: String,
}

/// Rendered markdown report from one of the feature services
#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ReportResponse {
    pub success: bool,
    pub report: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub suggestions: Vec<String>,
}

impl ErrorResponse {
    pub fn new(error: String, error_code: String, suggestions: Vec<String>) -> Self {
        Self {
            success: false,
            error,
            error_code,
            suggestions,
        }
    }

    pub fn storage(error: anyhow::Error) -> Self {
        Self::new(
            format!("Storage operation failed: {}", error),
            "STORAGE_ERROR".to_string(),
            vec!["Try again in a few moments".to_string()],
        )
    }
}
