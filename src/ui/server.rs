//! Server assembly and execution.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::usecase::{
    FetchMessagesUseCase, ListParticipantsUseCase, PostMessageUseCase, RefreshPresenceUseCase,
    RegisterParticipantUseCase, SweepInactiveUseCase,
};

use super::{
    handler::{
        fetch_messages, health_check, list_participants, post_message, refresh_presence,
        register_participant,
    },
    signal::shutdown_signal,
    state::AppState,
    sweeper::InactivitySweeper,
};

/// Chat HTTP server.
///
/// Owns the use cases and wires them into an axum router plus the
/// background inactivity sweeper.
pub struct Server {
    register_participant_usecase: Arc<RegisterParticipantUseCase>,
    list_participants_usecase: Arc<ListParticipantsUseCase>,
    post_message_usecase: Arc<PostMessageUseCase>,
    fetch_messages_usecase: Arc<FetchMessagesUseCase>,
    refresh_presence_usecase: Arc<RefreshPresenceUseCase>,
    sweep_inactive_usecase: Arc<SweepInactiveUseCase>,
}

impl Server {
    pub fn new(
        register_participant_usecase: Arc<RegisterParticipantUseCase>,
        list_participants_usecase: Arc<ListParticipantsUseCase>,
        post_message_usecase: Arc<PostMessageUseCase>,
        fetch_messages_usecase: Arc<FetchMessagesUseCase>,
        refresh_presence_usecase: Arc<RefreshPresenceUseCase>,
        sweep_inactive_usecase: Arc<SweepInactiveUseCase>,
    ) -> Self {
        Self {
            register_participant_usecase,
            list_participants_usecase,
            post_message_usecase,
            fetch_messages_usecase,
            refresh_presence_usecase,
            sweep_inactive_usecase,
        }
    }

    /// Build the HTTP router. Exposed so tests can serve the API
    /// in-process without signal handling or the sweeper.
    pub fn router(&self) -> Router {
        let app_state = Arc::new(AppState {
            register_participant_usecase: self.register_participant_usecase.clone(),
            list_participants_usecase: self.list_participants_usecase.clone(),
            post_message_usecase: self.post_message_usecase.clone(),
            fetch_messages_usecase: self.fetch_messages_usecase.clone(),
            refresh_presence_usecase: self.refresh_presence_usecase.clone(),
        });

        Router::new()
            .route(
                "/participants",
                post(register_participant).get(list_participants),
            )
            .route("/messages", post(post_message).get(fetch_messages))
            .route("/status", post(refresh_presence))
            .route("/health", get(health_check))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state)
    }

    /// Run the server until Ctrl+C or SIGTERM, then stop the sweeper.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.router();

        let sweeper = InactivitySweeper::new(self.sweep_inactive_usecase.clone());
        let sweeper_handle = sweeper.spawn();

        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        tracing::info!("Chat server listening on {}", listener.local_addr()?);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        // Stop the background sweeper before reporting shutdown
        sweeper_handle.shutdown().await;
        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
