//! In-memory participant collection.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    Participant, ParticipantName, ParticipantRepository, RepositoryError, Timestamp,
};

/// In-memory `participants` collection, keyed by name.
#[derive(Default)]
pub struct InMemoryParticipantRepository {
    participants: Mutex<HashMap<ParticipantName, Participant>>,
}

impl InMemoryParticipantRepository {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ParticipantRepository for InMemoryParticipantRepository {
    async fn insert(&self, participant: Participant) -> Result<(), RepositoryError> {
        let mut participants = self.participants.lock().await;
        if participants.contains_key(&participant.name) {
            return Err(RepositoryError::DuplicateParticipant(
                participant.name.as_str().to_string(),
            ));
        }
        participants.insert(participant.name.clone(), participant);
        Ok(())
    }

    async fn find_by_name(
        &self,
        name: &ParticipantName,
    ) -> Result<Option<Participant>, RepositoryError> {
        let participants = self.participants.lock().await;
        Ok(participants.get(name).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Participant>, RepositoryError> {
        let participants = self.participants.lock().await;
        Ok(participants.values().cloned().collect())
    }

    async fn update_last_status(
        &self,
        name: &ParticipantName,
        last_status: Timestamp,
    ) -> Result<(), RepositoryError> {
        let mut participants = self.participants.lock().await;
        match participants.get_mut(name) {
            Some(participant) => {
                participant.last_status = last_status;
                Ok(())
            }
            None => Err(RepositoryError::ParticipantNotFound(
                name.as_str().to_string(),
            )),
        }
    }

    async fn remove(&self, name: &ParticipantName) -> Result<(), RepositoryError> {
        let mut participants = self.participants.lock().await;
        participants.remove(name);
        Ok(())
    }

    async fn find_stale(&self, cutoff: Timestamp) -> Result<Vec<Participant>, RepositoryError> {
        let participants = self.participants.lock().await;
        Ok(participants
            .values()
            .filter(|p| p.is_stale(cutoff))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> ParticipantName {
        ParticipantName::new(s.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_find_participant() {
        // given:
        let repo = InMemoryParticipantRepository::new();
        let alice = Participant::new(name("alice"), Timestamp::new(1000));

        // when:
        repo.insert(alice.clone()).await.unwrap();
        let found = repo.find_by_name(&name("alice")).await.unwrap();

        // then:
        assert_eq!(found, Some(alice));
    }

    #[tokio::test]
    async fn test_insert_duplicate_name_fails() {
        // given: alice is already registered
        let repo = InMemoryParticipantRepository::new();
        repo.insert(Participant::new(name("alice"), Timestamp::new(1000)))
            .await
            .unwrap();

        // when: inserting the same name again
        let result = repo
            .insert(Participant::new(name("alice"), Timestamp::new(2000)))
            .await;

        // then:
        assert_eq!(
            result,
            Err(RepositoryError::DuplicateParticipant("alice".to_string()))
        );

        // the original record is untouched
        let found = repo.find_by_name(&name("alice")).await.unwrap().unwrap();
        assert_eq!(found.last_status, Timestamp::new(1000));
    }

    #[tokio::test]
    async fn test_update_last_status_refreshes_heartbeat() {
        // given:
        let repo = InMemoryParticipantRepository::new();
        repo.insert(Participant::new(name("alice"), Timestamp::new(1000)))
            .await
            .unwrap();

        // when:
        repo.update_last_status(&name("alice"), Timestamp::new(5000))
            .await
            .unwrap();

        // then:
        let found = repo.find_by_name(&name("alice")).await.unwrap().unwrap();
        assert_eq!(found.last_status, Timestamp::new(5000));
    }

    #[tokio::test]
    async fn test_update_last_status_of_unknown_participant_fails() {
        // given:
        let repo = InMemoryParticipantRepository::new();

        // when:
        let result = repo
            .update_last_status(&name("ghost"), Timestamp::new(5000))
            .await;

        // then:
        assert_eq!(
            result,
            Err(RepositoryError::ParticipantNotFound("ghost".to_string()))
        );
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        // given:
        let repo = InMemoryParticipantRepository::new();
        repo.insert(Participant::new(name("alice"), Timestamp::new(1000)))
            .await
            .unwrap();

        // when: removing twice
        repo.remove(&name("alice")).await.unwrap();
        let second = repo.remove(&name("alice")).await;

        // then: no error either time
        assert!(second.is_ok());
        assert!(repo.find_by_name(&name("alice")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_stale_uses_strict_cutoff() {
        // given: one stale and one fresh participant
        let repo = InMemoryParticipantRepository::new();
        repo.insert(Participant::new(name("old"), Timestamp::new(1000)))
            .await
            .unwrap();
        repo.insert(Participant::new(name("fresh"), Timestamp::new(9000)))
            .await
            .unwrap();

        // when:
        let stale = repo.find_stale(Timestamp::new(5000)).await.unwrap();

        // then: only the participant strictly older than the cutoff
        assert_eq!(stale.len(), 1);
        assert_eq!(stale[0].name.as_str(), "old");
    }

    #[tokio::test]
    async fn test_list_all_returns_every_participant() {
        // given:
        let repo = InMemoryParticipantRepository::new();
        repo.insert(Participant::new(name("alice"), Timestamp::new(1)))
            .await
            .unwrap();
        repo.insert(Participant::new(name("bob"), Timestamp::new(2)))
            .await
            .unwrap();

        // when:
        let all = repo.list_all().await.unwrap();

        // then:
        assert_eq!(all.len(), 2);
    }
}
