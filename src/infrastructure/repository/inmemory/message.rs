//! In-memory message collection.

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::{ChatMessage, MessageRepository, ParticipantName, RepositoryError};

/// Stored record: the log keys messages by a synthetic id
#[derive(Debug, Clone)]
struct MessageRecord {
    #[allow(dead_code)]
    id: Uuid,
    message: ChatMessage,
}

/// In-memory append-only `messages` collection.
#[derive(Default)]
pub struct InMemoryMessageRepository {
    messages: Mutex<Vec<MessageRecord>>,
}

impl InMemoryMessageRepository {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn append(&self, message: ChatMessage) -> Result<(), RepositoryError> {
        let mut messages = self.messages.lock().await;
        messages.push(MessageRecord {
            id: Uuid::new_v4(),
            message,
        });
        Ok(())
    }

    async fn find_visible_to(
        &self,
        user: &ParticipantName,
        limit: Option<usize>,
    ) -> Result<Vec<ChatMessage>, RepositoryError> {
        let messages = self.messages.lock().await;
        let mut visible: Vec<ChatMessage> = messages
            .iter()
            .map(|record| &record.message)
            .filter(|message| message.visible_to(user))
            .cloned()
            .collect();

        // Creation time ascending; appends with equal timestamps keep
        // insertion order
        visible.sort_by_key(|message| message.sent_at);

        if let Some(limit) = limit {
            visible.truncate(limit);
        }

        Ok(visible)
    }
}
