//! GenAI semantic-convention attribute names.
//!
//! Spans around backend calls declare these as fields (dotted literals in
//! `info_span!`) and fill in the response-side ones with `Span::record`.

pub const GEN_AI_OPERATION_NAME: &str = "gen_ai.operation.name";

pub const GEN_AI_PROVIDER_NAME: &str = "gen_ai.provider.name";

pub const GEN_AI_REQUEST_MODEL: &str = "gen_ai.request.model";

pub const GEN_AI_REQUEST_TEMPERATURE: &str = "gen_ai.request.temperature";

/// Prompt tokens billed for the request.
pub const GEN_AI_USAGE_INPUT_TOKENS: &str = "gen_ai.usage.input_tokens";

/// Tokens generated in the reply.
pub const GEN_AI_USAGE_OUTPUT_TOKENS: &str = "gen_ai.usage.output_tokens";

/// Why generation stopped (Gemini reports e.g. "STOP", "MAX_TOKENS").
pub const GEN_AI_RESPONSE_FINISH_REASONS: &str = "gen_ai.response.finish_reasons";

pub const OP_CHAT: &str = "chat";

pub const PROVIDER_GEMINI: &str = "gemini";
