use serde::{Deserialize, Serialize};

use crate::chat::faq;

/// Request body for the chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub user_message: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    faq::DEFAULT_LANGUAGE.to_string()
}

/// Response body for the chat endpoint.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub bot_response: String,
}
