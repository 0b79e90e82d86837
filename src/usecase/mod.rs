//! Use cases, one per operation of the chat backend.
//!
//! Each use case holds `Arc` handles to the repositories and the clock it
//! needs (explicit dependency injection, no process-wide store handle).

mod error;
mod fetch_messages;
mod list_participants;
mod post_message;
mod refresh_presence;
mod register_participant;
mod sweep_inactive;

pub use error::{FetchMessagesError, PostMessageError, RefreshPresenceError, RegisterError};
pub use fetch_messages::FetchMessagesUseCase;
pub use list_participants::ListParticipantsUseCase;
pub use post_message::{MessageDraft, PostMessageUseCase};
pub use refresh_presence::RefreshPresenceUseCase;
pub use register_participant::RegisterParticipantUseCase;
pub use sweep_inactive::{SweepInactiveUseCase, SweepReport};
