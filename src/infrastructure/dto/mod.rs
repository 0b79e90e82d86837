//! Data Transfer Objects for the HTTP API.
//!
//! - `http`: request and response bodies
//! - `conversion`: domain model → DTO conversions

pub mod conversion;
pub mod http;
