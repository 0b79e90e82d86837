//! Chat backend server.
//!
//! Participants register, post and poll messages over HTTP, and are
//! evicted by a periodic inactivity sweep.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin server
//! cargo run --bin server -- --host 0.0.0.0 --port 5000
//! ```

use std::sync::Arc;

use batepapo::{
    common::{logger::setup_logger, time::SystemClock},
    infrastructure::repository::{InMemoryMessageRepository, InMemoryParticipantRepository},
    ui::Server,
    usecase::{
        FetchMessagesUseCase, ListParticipantsUseCase, PostMessageUseCase,
        RefreshPresenceUseCase, RegisterParticipantUseCase, SweepInactiveUseCase,
    },
};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "Minimal chat backend with inactivity pruning", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "5000")]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Repositories (the document store)
    // 2. Clock
    // 3. UseCases
    // 4. Server

    // 1. Repositories: participants keyed by name, append-only message log
    let participants = Arc::new(InMemoryParticipantRepository::new());
    let messages = Arc::new(InMemoryMessageRepository::new());

    // 2. Clock
    let clock = Arc::new(SystemClock);

    // 3. UseCases
    let register_participant_usecase = Arc::new(RegisterParticipantUseCase::new(
        participants.clone(),
        messages.clone(),
        clock.clone(),
    ));
    let list_participants_usecase = Arc::new(ListParticipantsUseCase::new(participants.clone()));
    let post_message_usecase = Arc::new(PostMessageUseCase::new(
        participants.clone(),
        messages.clone(),
        clock.clone(),
    ));
    let fetch_messages_usecase = Arc::new(FetchMessagesUseCase::new(
        participants.clone(),
        messages.clone(),
    ));
    let refresh_presence_usecase = Arc::new(RefreshPresenceUseCase::new(
        participants.clone(),
        clock.clone(),
    ));
    let sweep_inactive_usecase = Arc::new(SweepInactiveUseCase::new(
        participants.clone(),
        messages.clone(),
        clock.clone(),
    ));

    // 4. Create and run the server
    let server = Server::new(
        register_participant_usecase,
        list_participants_usecase,
        post_message_usecase,
        fetch_messages_usecase,
        refresh_presence_usecase,
        sweep_inactive_usecase,
    );
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
