//! Shared application state for request handlers.

use std::sync::Arc;

use crate::usecase::{
    FetchMessagesUseCase, ListParticipantsUseCase, PostMessageUseCase, RefreshPresenceUseCase,
    RegisterParticipantUseCase,
};

/// Shared application state
pub struct AppState {
    pub register_participant_usecase: Arc<RegisterParticipantUseCase>,
    pub list_participants_usecase: Arc<ListParticipantsUseCase>,
    pub post_message_usecase: Arc<PostMessageUseCase>,
    pub fetch_messages_usecase: Arc<FetchMessagesUseCase>,
    pub refresh_presence_usecase: Arc<RefreshPresenceUseCase>,
}
