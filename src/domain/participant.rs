//! Participant entity and its name value object.

use thiserror::Error;

use super::Timestamp;

/// Error raised when a participant name fails validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParticipantNameError {
    #[error("participant name must not be empty")]
    Empty,
}

/// Unique participant name (primary key of the registry)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticipantName(String);

impl ParticipantName {
    /// Create a validated participant name.
    ///
    /// Fails if the name is empty or whitespace-only.
    pub fn new(name: String) -> Result<Self, ParticipantNameError> {
        if name.trim().is_empty() {
            return Err(ParticipantNameError::Empty);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ParticipantName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registered chat participant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// Unique name
    pub name: ParticipantName,
    /// Timestamp of registration or last heartbeat
    pub last_status: Timestamp,
}

impl Participant {
    /// Create a new participant with the given heartbeat timestamp
    pub fn new(name: ParticipantName, last_status: Timestamp) -> Self {
        Self { name, last_status }
    }

    /// Whether this participant's last heartbeat is strictly older than
    /// the given cutoff.
    pub fn is_stale(&self, cutoff: Timestamp) -> bool {
        self.last_status < cutoff
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_name_accepts_non_empty() {
        // given:
        let raw = "alice".to_string();

        // when:
        let result = ParticipantName::new(raw);

        // then:
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), "alice");
    }

    #[test]
    fn test_participant_name_rejects_empty() {
        // given:
        let raw = "".to_string();

        // when:
        let result = ParticipantName::new(raw);

        // then:
        assert_eq!(result, Err(ParticipantNameError::Empty));
    }

    #[test]
    fn test_participant_name_rejects_whitespace_only() {
        // given:
        let raw = "   ".to_string();

        // when:
        let result = ParticipantName::new(raw);

        // then:
        assert_eq!(result, Err(ParticipantNameError::Empty));
    }

    #[test]
    fn test_is_stale_strictly_before_cutoff() {
        // given: a participant last seen at t=1000
        let name = ParticipantName::new("alice".to_string()).unwrap();
        let participant = Participant::new(name, Timestamp::new(1000));

        // when / then: stale only when strictly older than the cutoff
        assert!(participant.is_stale(Timestamp::new(1001)));
        assert!(!participant.is_stale(Timestamp::new(1000)));
        assert!(!participant.is_stale(Timestamp::new(999)));
    }
}
