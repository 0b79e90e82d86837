//! Repository implementations.
//!
//! Currently in-memory only; a DBMS-backed implementation would slot in
//! behind the same domain traits.

pub mod inmemory;

pub use inmemory::{InMemoryMessageRepository, InMemoryParticipantRepository};
