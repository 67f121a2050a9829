use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, header::CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::change::ChangeSet;
use crate::domain::commit::CommitMessage;
use crate::domain::prompt::build_commit_prompt;
use crate::error::{AppError, AppResult};
use crate::services::LanguageModelService;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct GeminiClient {
    http: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> AppResult<Self> {
        Self::with_base_url(GEMINI_BASE_URL.to_string(), api_key, model)
    }

    pub fn with_base_url(base_url: String, api_key: String, model: String) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| {
                AppError::Configuration(format!("failed to build HTTP client: {err}"))
            })?;
        Ok(Self {
            http,
            base_url,
            api_key,
            model,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl LanguageModelService for GeminiClient {
    async fn generate_commit_message(&self, changes: &ChangeSet) -> AppResult<CommitMessage> {
        let prompt = build_commit_prompt(changes);
        debug!(model = %self.model, prompt_len = prompt.len(), "calling Gemini");

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .header(CONTENT_TYPE, "application/json")
            .json(&GenerateContentRequest::new(prompt))
            .send()
            .await
            .map_err(|err| AppError::LanguageModel(format!("failed to call Gemini: {err}")))?;

        let status = response.status();
        let body = response.text().await.map_err(|err| {
            AppError::LanguageModel(format!("failed to read Gemini response: {err}"))
        })?;

        let payload: GenerateContentResponse = match serde_json::from_str(&body) {
            Ok(payload) => payload,
            Err(_) if !status.is_success() => {
                return Err(AppError::LanguageModel(format!(
                    "Gemini responded with {status}: {body}"
                )));
            }
            Err(err) => {
                return Err(AppError::LanguageModel(format!(
                    "failed to parse Gemini response: {err}"
                )));
            }
        };

        match payload.into_outcome() {
            GenerationOutcome::Text(text) => Ok(CommitMessage::from_reply(&text)),
            GenerationOutcome::Failed(error) => Err(AppError::Api {
                code: error.code,
                message: error.message,
            }),
            GenerationOutcome::Empty if !status.is_success() => Err(AppError::LanguageModel(
                format!("Gemini responded with {status}: {body}"),
            )),
            GenerationOutcome::Empty => Err(AppError::EmptyResponse),
        }
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
}

impl GenerateContentRequest {
    fn new(prompt: String) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        }
    }
}

#[derive(Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    error: Option<ErrorInfo>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Deserialize, Default)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct ErrorInfo {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

enum GenerationOutcome {
    Text(String),
    Failed(ErrorInfo),
    Empty,
}

impl GenerateContentResponse {
    fn into_outcome(self) -> GenerationOutcome {
        if let Some(error) = self.error {
            return GenerationOutcome::Failed(error);
        }
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| GenerationOutcome::Text(part.text))
            .unwrap_or(GenerationOutcome::Empty)
    }
}
