use std::env;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

pub const API_KEY_VAR: &str = "GOOGLE_AI_TOKEN";
pub const MODEL_VAR: &str = "GENIE_GEMINI_MODEL";
pub const LOG_VAR: &str = "GENIE_LOG";

pub const API_KEY_URL: &str = "https://aistudio.google.com/apikey";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub workspace_root: PathBuf,
}

impl AppConfig {
    pub fn load(workspace_hint: &Path) -> AppResult<Self> {
        let gemini_api_key = env::var(API_KEY_VAR)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(AppError::MissingApiKey {
                variable: API_KEY_VAR,
            })?;

        let gemini_model = env::var(MODEL_VAR)
            .ok()
            .map(|model| model.trim().to_string())
            .filter(|model| !model.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self {
            gemini_api_key,
            gemini_model,
            workspace_root: workspace_hint.to_path_buf(),
        })
    }
}
