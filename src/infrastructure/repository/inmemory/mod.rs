//! In-memory document store.
//!
//! Two collections, mirroring the persisted layout: `participants` keyed by
//! name and an append-only `messages` log keyed by synthetic id. Each
//! repository method takes the collection lock once, which gives the
//! per-operation atomicity the domain relies on.

mod message;
mod participant;

pub use message::InMemoryMessageRepository;
pub use participant::InMemoryParticipantRepository;
