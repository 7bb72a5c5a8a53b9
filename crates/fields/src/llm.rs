use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("LLM API call failed: {0}")]
    Api(String),
}

/// Abstraction over the LLM collaborator. Only the response content string
/// crosses this seam; prompt templates, retries, and timeouts are the
/// implementation's business.
pub trait LlmBackend: Send + Sync {
    fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

// ── Mock backend (always available, used for tests) ───────────────────────────

/// Returns a preset response so the normalization pipeline can be exercised
/// without a live model.
pub struct MockLlm {
    pub response: String,
}

impl MockLlm {
    pub fn new(response: impl Into<String>) -> Self {
        Self { response: response.into() }
    }
}

impl LlmBackend for MockLlm {
    fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
        Ok(self.response.clone())
    }
}
