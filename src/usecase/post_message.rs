//! UseCase: post a user-submitted message.
//!
//! Authorization runs first (the sender must be registered), then field
//! validation collects every violated field before anything is stored.
//! System-generated `status` notices never pass through here.

use std::sync::Arc;

use crate::common::time::Clock;
use crate::domain::{
    ChatMessage, MessageKind, MessageRepository, MessageText, ParticipantName,
    ParticipantRepository, Timestamp,
};

use super::error::PostMessageError;

/// Raw, not-yet-validated message fields from the request body
#[derive(Debug, Clone, Default)]
pub struct MessageDraft {
    pub to: Option<String>,
    pub text: Option<String>,
    pub kind: Option<String>,
}

pub struct PostMessageUseCase {
    participants: Arc<dyn ParticipantRepository>,
    messages: Arc<dyn MessageRepository>,
    clock: Arc<dyn Clock>,
}

impl PostMessageUseCase {
    pub fn new(
        participants: Arc<dyn ParticipantRepository>,
        messages: Arc<dyn MessageRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            participants,
            messages,
            clock,
        }
    }

    /// Validate and append a message from `user`.
    pub async fn execute(&self, user: &str, draft: MessageDraft) -> Result<(), PostMessageError> {
        // 1. Sender must be registered
        let from = ParticipantName::new(user.to_string())
            .map_err(|_| PostMessageError::Unauthorized(user.to_string()))?;
        if self.participants.find_by_name(&from).await?.is_none() {
            return Err(PostMessageError::Unauthorized(user.to_string()));
        }

        // 2. Validate the draft, collecting every violated field
        let (to, text, kind) = validate_draft(draft).map_err(PostMessageError::Validation)?;

        // 3. Append with the current timestamp
        let sent_at = Timestamp::new(self.clock.now_millis());
        self.messages
            .append(ChatMessage::new(from, to, text, kind, sent_at))
            .await?;

        Ok(())
    }
}

/// Joi-style per-field validation; returns either the validated fields or
/// the full list of violations.
fn validate_draft(draft: MessageDraft) -> Result<(String, MessageText, MessageKind), Vec<String>> {
    let mut errors = Vec::new();

    let to = match draft.to {
        None => {
            errors.push("\"to\" is required".to_string());
            None
        }
        Some(to) if to.trim().is_empty() => {
            errors.push("\"to\" is not allowed to be empty".to_string());
            None
        }
        Some(to) => Some(to),
    };

    let text = match draft.text {
        None => {
            errors.push("\"text\" is required".to_string());
            None
        }
        Some(raw) => match MessageText::new(raw) {
            Ok(text) => Some(text),
            Err(_) => {
                errors.push("\"text\" is not allowed to be empty".to_string());
                None
            }
        },
    };

    let kind = match draft.kind {
        None => {
            errors.push("\"type\" is required".to_string());
            None
        }
        Some(raw) => match raw.parse::<MessageKind>() {
            Ok(kind) if kind.is_user_submittable() => Some(kind),
            _ => {
                errors.push("\"type\" must be one of [message, private_message]".to_string());
                None
            }
        },
    };

    match (to, text, kind) {
        (Some(to), Some(text), Some(kind)) => Ok((to, text, kind)),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::time::FixedClock;
    use crate::domain::Participant;
    use crate::infrastructure::repository::{
        InMemoryMessageRepository, InMemoryParticipantRepository,
    };

    fn name(s: &str) -> ParticipantName {
        ParticipantName::new(s.to_string()).unwrap()
    }

    fn draft(to: &str, text: &str, kind: &str) -> MessageDraft {
        MessageDraft {
            to: Some(to.to_string()),
            text: Some(text.to_string()),
            kind: Some(kind.to_string()),
        }
    }

    async fn create_usecase_with_alice() -> (PostMessageUseCase, Arc<InMemoryMessageRepository>) {
        let participants = Arc::new(InMemoryParticipantRepository::new());
        participants
            .insert(Participant::new(name("alice"), Timestamp::new(1)))
            .await
            .unwrap();
        let messages = Arc::new(InMemoryMessageRepository::new());
        let usecase = PostMessageUseCase::new(
            participants,
            messages.clone(),
            Arc::new(FixedClock::new(777)),
        );
        (usecase, messages)
    }

    #[tokio::test]
    async fn test_post_valid_message_appends_to_log() {
        // given:
        let (usecase, messages) = create_usecase_with_alice().await;

        // when:
        let result = usecase.execute("alice", draft("bob", "oi", "message")).await;

        // then:
        assert!(result.is_ok());
        let log = messages.find_visible_to(&name("alice"), None).await.unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].from.as_str(), "alice");
        assert_eq!(log[0].to, "bob");
        assert_eq!(log[0].kind, MessageKind::Message);
        assert_eq!(log[0].sent_at, Timestamp::new(777));
    }

    #[tokio::test]
    async fn test_post_from_unregistered_user_rejected_despite_valid_body() {
        // given:
        let (usecase, messages) = create_usecase_with_alice().await;

        // when: a perfectly valid body from an unknown sender
        let result = usecase.execute("ghost", draft("bob", "oi", "message")).await;

        // then:
        assert_eq!(
            result,
            Err(PostMessageError::Unauthorized("ghost".to_string()))
        );
        let log = messages.find_visible_to(&name("alice"), None).await.unwrap();
        assert!(log.is_empty());
    }

    #[tokio::test]
    async fn test_post_with_status_type_rejected_naming_type_field() {
        // given:
        let (usecase, _messages) = create_usecase_with_alice().await;

        // when: users may not submit status messages
        let result = usecase.execute("alice", draft("bob", "oi", "status")).await;

        // then:
        assert_eq!(
            result,
            Err(PostMessageError::Validation(vec![
                "\"type\" must be one of [message, private_message]".to_string()
            ]))
        );
    }

    #[tokio::test]
    async fn test_post_with_unknown_type_rejected() {
        // given:
        let (usecase, _messages) = create_usecase_with_alice().await;

        // when:
        let result = usecase
            .execute("alice", draft("bob", "oi", "broadcast"))
            .await;

        // then:
        assert_eq!(
            result,
            Err(PostMessageError::Validation(vec![
                "\"type\" must be one of [message, private_message]".to_string()
            ]))
        );
    }

    #[tokio::test]
    async fn test_validation_collects_every_violated_field() {
        // given:
        let (usecase, _messages) = create_usecase_with_alice().await;

        // when: all three fields are invalid at once
        let result = usecase
            .execute(
                "alice",
                MessageDraft {
                    to: Some("".to_string()),
                    text: None,
                    kind: Some("bogus".to_string()),
                },
            )
            .await;

        // then: one message per field, not just the first
        let Err(PostMessageError::Validation(errors)) = result else {
            panic!("expected validation error, got {result:?}");
        };
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.contains("\"to\"")));
        assert!(errors.iter().any(|e| e.contains("\"text\"")));
        assert!(errors.iter().any(|e| e.contains("\"type\"")));
    }

    #[tokio::test]
    async fn test_private_message_type_is_accepted() {
        // given:
        let (usecase, messages) = create_usecase_with_alice().await;

        // when:
        let result = usecase
            .execute("alice", draft("bob", "segredo", "private_message"))
            .await;

        // then:
        assert!(result.is_ok());
        let log = messages.find_visible_to(&name("bob"), None).await.unwrap();
        assert_eq!(log[0].kind, MessageKind::PrivateMessage);
    }
}
