//! HTTP API endpoint handlers.
//!
//! Handlers translate between DTOs and use cases and map use case errors
//! to status codes. The `user` header carries the acting participant's
//! name; a missing header is treated the same as an unregistered user.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

use crate::{
    infrastructure::dto::http::{
        MessageDto, MessagesQuery, NewMessageRequest, NewParticipantRequest, ParticipantDto,
    },
    usecase::{
        FetchMessagesError, MessageDraft, PostMessageError, RefreshPresenceError, RegisterError,
    },
};

use super::state::AppState;

fn user_header(headers: &HeaderMap) -> Option<&str> {
    headers.get("user").and_then(|value| value.to_str().ok())
}

/// `POST /participants`
pub async fn register_participant(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewParticipantRequest>,
) -> Response {
    match state.register_participant_usecase.execute(body.name).await {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(RegisterError::NameTaken(name)) => {
            tracing::debug!("Rejected registration, name '{}' is taken", name);
            StatusCode::CONFLICT.into_response()
        }
        Err(RegisterError::Validation(errors)) => {
            (StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response()
        }
        Err(RegisterError::Repository(err)) => {
            tracing::error!("Registration failed: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// `GET /participants`
pub async fn list_participants(State(state): State<Arc<AppState>>) -> Response {
    match state.list_participants_usecase.execute().await {
        Ok(participants) => {
            let dtos: Vec<ParticipantDto> =
                participants.into_iter().map(ParticipantDto::from).collect();
            Json(dtos).into_response()
        }
        Err(err) => {
            tracing::error!("Failed to list participants: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// `POST /messages`
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<NewMessageRequest>,
) -> Response {
    // No header means no registered sender
    let Some(user) = user_header(&headers) else {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    };

    let draft = MessageDraft {
        to: body.to,
        text: body.text,
        kind: body.kind,
    };

    match state.post_message_usecase.execute(user, draft).await {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(PostMessageError::Unauthorized(_)) => StatusCode::UNPROCESSABLE_ENTITY.into_response(),
        Err(PostMessageError::Validation(errors)) => {
            (StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response()
        }
        Err(PostMessageError::Repository(err)) => {
            tracing::error!("Failed to post message: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// `GET /messages`
pub async fn fetch_messages(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<MessagesQuery>,
) -> Response {
    let Some(user) = user_header(&headers) else {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    };

    let limit = query.effective_limit();
    match state.fetch_messages_usecase.execute(user, limit).await {
        Ok(messages) => {
            let dtos: Vec<MessageDto> = messages.into_iter().map(MessageDto::from).collect();
            Json(dtos).into_response()
        }
        Err(FetchMessagesError::Unauthorized(_)) => StatusCode::UNPROCESSABLE_ENTITY.into_response(),
        Err(FetchMessagesError::Repository(err)) => {
            tracing::error!("Failed to fetch messages: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// `POST /status` (heartbeat)
pub async fn refresh_presence(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let Some(user) = user_header(&headers) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match state.refresh_presence_usecase.execute(user).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(RefreshPresenceError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(RefreshPresenceError::Repository(err)) => {
            tracing::error!("Failed to refresh presence: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}
