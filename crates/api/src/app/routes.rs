//! Webhook + health handlers.

use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    routing::{get, post},
};
use uuid::Uuid;

use despensa_interpreter::{ResponseEnvelope, SpeechResponse, speech};

use crate::app::AppServices;
use crate::app::dto::RequestEnvelope;

pub fn router() -> Router {
    Router::new()
        .route("/", post(webhook))
        .route("/health", get(health))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// One conversational turn.
///
/// Always answers 200 with a well-formed envelope: an unreadable body, a
/// missing user and any interpreter-internal failure all resolve to spoken
/// apologies, because the platform turns transport errors into a much worse
/// user experience than an apology.
pub async fn webhook(
    Extension(services): Extension<Arc<AppServices>>,
    Json(raw): Json<serde_json::Value>,
) -> Json<ResponseEnvelope> {
    let turn_id = Uuid::now_v7();
    let span = tracing::info_span!("turn", %turn_id);
    let _guard = span.enter();

    let envelope: RequestEnvelope = match serde_json::from_value(raw) {
        Ok(envelope) => envelope,
        Err(error) => {
            tracing::warn!(%error, "unreadable request envelope");
            return apology();
        }
    };

    let Some(user) = envelope.user_id() else {
        tracing::warn!("request envelope carried no user id");
        return apology();
    };

    let utterance = envelope.into_utterance();
    let response = services.interpreter.handle_turn(&user, &utterance);
    Json(response.into_envelope())
}

fn apology() -> Json<ResponseEnvelope> {
    Json(SpeechResponse::open(speech::store_trouble()).into_envelope())
}
