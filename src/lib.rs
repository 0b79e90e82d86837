//! Minimal chat backend library.
//!
//! Participants register over HTTP, post and poll messages, and are evicted
//! by a periodic inactivity sweep when they stop sending heartbeats.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// shared library
pub mod common;
