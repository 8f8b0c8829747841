use axum::Json;
use tracing::info;

use crate::{
    error::AppError,
    extract::ValidatedJson,
    message::{ChatRequest, ChatResponse},
    services::agent::generate_reply,
};

pub async fn chat_handler(
    ValidatedJson(payload): ValidatedJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    info!("Received message: {}", payload.message);

    let reply = generate_reply(&payload.message);

    Ok(Json(ChatResponse::from_agent(reply)))
}
