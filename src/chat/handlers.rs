use axum::{extract::State, routing::post, Json, Router};
use tracing::{debug, info, instrument};

use crate::{
    chat::{
        dto::{ChatRequest, ChatResponse},
        faq,
    },
    error::AppError,
    state::AppState,
};

const SYSTEM_PROMPT: &str = "You are a helpful customer support assistant.";

pub fn routes() -> Router<AppState> {
    Router::new().route("/chat/", post(chat))
}

#[instrument(skip(state, payload))]
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    debug!(language = %payload.language, "chat message received");

    let language = faq::resolve_language(&payload.language);

    if let Some(answer) = faq::lookup(language, &payload.user_message) {
        info!(language = %language, "answered from faq table");
        state.notifier.spawn_notify(&payload.user_message, answer);
        return Ok(Json(ChatResponse {
            bot_response: answer.to_string(),
        }));
    }

    let bot_response = state
        .completions
        .complete(SYSTEM_PROMPT, &payload.user_message)
        .await?;

    info!("answered from completion backend");
    state.notifier.spawn_notify(&payload.user_message, &bot_response);
    Ok(Json(ChatResponse { bot_response }))
}
