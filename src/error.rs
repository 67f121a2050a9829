use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not a git repository")]
    NotARepository,
    #[error("{variable} environment variable not set")]
    MissingApiKey { variable: &'static str },
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("version control error: {0}")]
    VersionControl(String),
    #[error("language model error: {0}")]
    LanguageModel(String),
    #[error("API error: {message}")]
    Api { code: i64, message: String },
    #[error("no response from Gemini API")]
    EmptyResponse,
    #[error("{0}")]
    Clipboard(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
