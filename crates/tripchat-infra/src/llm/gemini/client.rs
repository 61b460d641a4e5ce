//! GeminiProvider -- [`GenerativeBackend`] for Google Gemini.
//!
//! Calls `POST /v1beta/models/{model}:generateContent`. The API key is held
//! in a [`SecretString`] and only exposed when building the request header.

use secrecy::{ExposeSecret, SecretString};
use tracing::{Instrument, Span, debug, field, info_span};

use tripchat_core::llm::provider::GenerativeBackend;
use tripchat_observe::genai_attrs::{
    GEN_AI_RESPONSE_FINISH_REASONS, GEN_AI_USAGE_INPUT_TOKENS, GEN_AI_USAGE_OUTPUT_TOKENS, OP_CHAT,
    PROVIDER_GEMINI,
};
use tripchat_types::chat::TurnRole;
use tripchat_types::llm::{GenerationRequest, GenerationResponse, LlmError, Usage};

use super::types::{
    GeminiContent, GeminiErrorEnvelope, GeminiGenerationConfig, GeminiPart, GeminiRequest,
    GeminiResponse, GeminiSystemInstruction,
};

/// Public Generative Language API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Google Gemini backend. Deliberately not `Debug`.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl GeminiProvider {
    pub fn new(api_key: SecretString) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the base URL (proxies, local fakes).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{model}:generateContent", self.base_url)
    }

    fn to_gemini_request(request: &GenerationRequest) -> GeminiRequest {
        let contents = request
            .contents
            .iter()
            .map(|turn| GeminiContent {
                role: Some(
                    match turn.role() {
                        TurnRole::User => "user",
                        TurnRole::Model => "model",
                    }
                    .to_string(),
                ),
                parts: vec![GeminiPart {
                    text: Some(turn.text().to_string()),
                }],
            })
            .collect();

        GeminiRequest {
            contents,
            system_instruction: request.system_instruction.as_ref().map(|s| {
                GeminiSystemInstruction {
                    parts: vec![GeminiPart {
                        text: Some(s.clone()),
                    }],
                }
            }),
            generation_config: request.temperature.map(|t| GeminiGenerationConfig {
                temperature: Some(t),
            }),
        }
    }
}

/// Map a non-2xx status and its body to an [`LlmError`].
fn error_for_status(status: u16, body: &str) -> LlmError {
    let message = serde_json::from_str::<GeminiErrorEnvelope>(body)
        .map(|env| env.error.message)
        .unwrap_or_else(|_| body.to_string());
    match status {
        400 => LlmError::InvalidRequest(message),
        401 | 403 => LlmError::AuthenticationFailed,
        429 => LlmError::RateLimited,
        503 => LlmError::Overloaded(message),
        _ => LlmError::Provider {
            message: format!("HTTP {status}: {message}"),
        },
    }
}

impl GeminiProvider {
    async fn send(&self, request: &GenerationRequest) -> Result<GenerationResponse, LlmError> {
        let body = Self::to_gemini_request(request);
        let url = self.url(&request.model);
        debug!(turns = body.contents.len(), "Sending generateContent");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status.as_u16(), &error_body));
        }

        let gemini_resp: GeminiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))?;

        let usage = gemini_resp
            .usage_metadata
            .as_ref()
            .map(|u| Usage {
                input_tokens: u.prompt_token_count,
                output_tokens: u.candidates_token_count,
            })
            .unwrap_or_default();
        record_response(&Span::current(), &usage, gemini_resp.finish_reason());

        Ok(GenerationResponse {
            text: gemini_resp.first_text(),
            model: gemini_resp
                .model_version
                .clone()
                .unwrap_or_else(|| request.model.clone()),
            finish_reason: gemini_resp.finish_reason().map(str::to_string),
            usage,
        })
    }
}

impl GenerativeBackend for GeminiProvider {
    fn name(&self) -> &str {
        PROVIDER_GEMINI
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse, LlmError> {
        let span = info_span!(
            "gen_ai.chat",
            gen_ai.operation.name = OP_CHAT,
            gen_ai.provider.name = PROVIDER_GEMINI,
            gen_ai.request.model = %request.model,
            gen_ai.request.temperature = ?request.temperature,
            gen_ai.usage.input_tokens = field::Empty,
            gen_ai.usage.output_tokens = field::Empty,
            gen_ai.response.finish_reasons = field::Empty,
        );
        self.send(request).instrument(span).await
    }
}

fn record_response(span: &Span, usage: &Usage, finish_reason: Option<&str>) {
    span.record(GEN_AI_USAGE_INPUT_TOKENS, usage.input_tokens);
    span.record(GEN_AI_USAGE_OUTPUT_TOKENS, usage.output_tokens);
    if let Some(reason) = finish_reason {
        span.record(GEN_AI_RESPONSE_FINISH_REASONS, reason);
    }
}
