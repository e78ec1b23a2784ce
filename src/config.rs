// src/config.rs
//! Unified configuration management - all settings come from the environment

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

const DEFAULT_MAX_TOKENS: u32 = 1000;
const DEFAULT_TEMPERATURE: f32 = 0.7;

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment: EnvironmentConfig,
    pub model: ModelConfig,
}

#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub database_path: PathBuf,
    pub documents_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub endpoint_url: String,
    pub primary_model: String,
    pub fallback_models: Vec<String>,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl ConfigManager {
    /// Load all configurations
    pub fn load() -> Result<Self> {
        let environment = Self::load_environment()?;
        let model = Self::load_model()?;

        Ok(Self { environment, model })
    }

    /// Load environment configuration
    fn load_environment() -> Result<EnvironmentConfig> {
        let env = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "local".to_string());
        info!("Loading environment configuration for: {}", env);

        let base_dir = if env == "production" {
            PathBuf::from("/app")
        } else {
            std::env::current_dir().context("Failed to get current directory")?
        };

        Ok(EnvironmentConfig {
            database_path: base_dir.join("launchpad.db"),
            documents_path: base_dir.join("documents"),
        })
    }

    /// Load model endpoint configuration
    fn load_model() -> Result<ModelConfig> {
        let endpoint_url = std::env::var("MODEL_ENDPOINT_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8400".to_string());

        let primary_model =
            std::env::var("PRIMARY_MODEL_ID").unwrap_or_else(|_| "nova-micro".to_string());

        let fallback_models = std::env::var("FALLBACK_MODEL_IDS")
            .unwrap_or_else(|_| "claude-haiku,claude-sonnet".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_tokens = match std::env::var("MAX_TOKENS") {
            Ok(v) => v
                .parse::<u32>()
                .context("MAX_TOKENS must be a positive integer")?,
            Err(_) => DEFAULT_MAX_TOKENS,
        };

        let temperature = match std::env::var("TEMPERATURE") {
            Ok(v) => v
                .parse::<f32>()
                .context("TEMPERATURE must be a number in [0, 1]")?,
            Err(_) => DEFAULT_TEMPERATURE,
        };

        Ok(ModelConfig {
            endpoint_url,
            primary_model,
            fallback_models,
            max_tokens,
            temperature,
        })
    }

    /// Ensure all required directories exist
    pub async fn ensure_directories(&self) -> Result<()> {
        crate::utils::ensure_directory(&self.environment.documents_path).await?;

        if let Some(db_parent) = self.environment.database_path.parent() {
            crate::utils::ensure_directory(&db_parent.to_path_buf()).await?;
        }

        Ok(())
    }
}

impl ModelConfig {
    /// Ordered candidate list: primary first, then fallbacks
    pub fn candidate_models(&self) -> Vec<String> {
        let mut candidates = Vec::with_capacity(1 + self.fallback_models.len());
        candidates.push(self.primary_model.clone());
        candidates.extend(self.fallback_models.iter().cloned());
        candidates
    }
}
