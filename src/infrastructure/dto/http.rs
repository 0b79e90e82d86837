//! HTTP request and response DTOs.
//!
//! Field names follow the wire format of the original service
//! (`lastStatus`, `type`, `time`); request fields are optional so that
//! validation can report every missing field instead of failing at
//! deserialization.

use serde::{Deserialize, Serialize};

/// Body of `POST /participants`
#[derive(Debug, Deserialize)]
pub struct NewParticipantRequest {
    pub name: Option<String>,
}

/// Body of `POST /messages`
#[derive(Debug, Deserialize)]
pub struct NewMessageRequest {
    pub to: Option<String>,
    pub text: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Query string of `GET /messages`
#[derive(Debug, Deserialize)]
pub struct MessagesQuery {
    /// Raw `limit` value; parsed leniently (absent, unparsable, or
    /// non-positive all mean "no cap")
    pub limit: Option<String>,
}

impl MessagesQuery {
    /// Effective message cap, if any.
    pub fn effective_limit(&self) -> Option<usize> {
        self.limit
            .as_deref()
            .and_then(|raw| raw.parse::<i64>().ok())
            .filter(|n| *n > 0)
            .map(|n| n as usize)
    }
}

/// Participant record returned by `GET /participants`
#[derive(Debug, Serialize)]
pub struct ParticipantDto {
    pub name: String,
    #[serde(rename = "lastStatus")]
    pub last_status: i64,
}

/// Message record returned by `GET /messages`
#[derive(Debug, Serialize)]
pub struct MessageDto {
    pub from: String,
    pub to: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Local wall-clock `HH:MM:SS` at creation
    pub time: String,
}
