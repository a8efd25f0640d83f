//! Tips module - short coaching tip from a text-generation API
//!
//! One request per tip, no retry and no cancellation. Failures never escape
//! [`request_tip`]: they become a [`TipState::Failed`] message for the user.

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::ActivityType;

pub const FAILURE_MESSAGE: &str =
    "Sorry, I couldn't fetch a tip right now. Please check your connection and API key.";

const TEMPERATURE: f32 = 0.7;

/// Observable states of one tip request
#[derive(Debug, Clone, PartialEq)]
pub enum TipState {
    Pending,
    Ready(String),
    Failed(String),
}

impl TipState {
    /// Text to show the user for this state
    pub fn message(&self) -> &str {
        match self {
            TipState::Pending => "fetching...",
            TipState::Ready(tip) => tip.as_str(),
            TipState::Failed(msg) => msg.as_str(),
        }
    }
}

pub fn prompt_for(kind: ActivityType) -> &'static str {
    match kind {
        ActivityType::WeightLifting => {
            "Provide a short, actionable tip for improving weight lifting form or results. \
             Focus on one specific aspect. For example, \"Focus on a slow, controlled negative \
             on your next set of bicep curls to maximize muscle growth.\""
        }
        ActivityType::Swimming => {
            "Give a concise, helpful tip for a swimmer looking to improve their technique or \
             endurance. Focus on one specific aspect. For example, \"To improve your freestyle \
             rotation, imagine your body is a log rolling in the water, driven by your hips \
             and core.\""
        }
        ActivityType::Running => {
            "Offer a brief, practical tip for a runner aiming to increase speed or prevent injury. \
             Focus on one specific aspect. For example, \"Try to increase your running cadence by \
             about 5% to reduce over-striding and lower impact on your joints.\""
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Text of the first candidate, parts joined
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

/// Client for the `generateContent` endpoint
#[derive(Clone)]
pub struct TipClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl TipClient {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    /// Fails when the API key is not configured
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.api_key()?;
        Ok(Self::new(&config.tip_base_url, &config.tip_model, api_key))
    }

    pub async fn fetch_tip(&self, kind: ActivityType) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let body = GenerateRequest {
            contents: [Content { parts: [Part { text: prompt_for(kind) }] }],
            generation_config: GenerationConfig { temperature: TEMPERATURE },
        };

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::TipService(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Error::TipService(format!("{}: {}", status, text)));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| Error::TipService(format!("Invalid response: {}", e)))?;

        parsed
            .into_text()
            .ok_or_else(|| Error::TipService("Response contained no text".to_string()))
    }
}

/// Fetch a tip and resolve it to a final state
pub async fn request_tip(config: &Config, kind: ActivityType) -> TipState {
    let result = match TipClient::from_config(config) {
        Ok(client) => client.fetch_tip(kind).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(tip) => {
            info!(kind = kind.label(), "Tip received");
            TipState::Ready(tip)
        }
        Err(e) => {
            error!(error = %e, kind = kind.label(), "Failed to fetch workout tip");
            TipState::Failed(FAILURE_MESSAGE.to_string())
        }
    }
}
