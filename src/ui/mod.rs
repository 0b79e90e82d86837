//! HTTP delivery layer: router, handlers, and the background sweeper.

mod handler;
mod server;
mod signal;
pub mod state;
pub mod sweeper;

pub use server::Server;
pub use sweeper::{InactivitySweeper, SweeperHandle};
