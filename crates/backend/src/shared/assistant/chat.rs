use serde::{Deserialize, Serialize};

use super::knowledge_base::{get_ai_response, AiResponse};

/// Роль сообщения в чате
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// Сообщение чата
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Transcript of one assistant session, bound to the page it was opened on.
#[derive(Debug, Clone, Default)]
pub struct AssistantChat {
    context: String,
    messages: Vec<ChatMessage>,
}

impl AssistantChat {
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            messages: Vec::new(),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Appends the question and the dispatched answer. Blank questions are ignored.
    pub fn ask(&mut self, question: &str) -> Option<AiResponse> {
        let question = question.trim();
        if question.is_empty() {
            return None;
        }
        let response = get_ai_response(question, &self.context);
        tracing::debug!("Assistant: '{}' -> {:?}", question, response.topic);
        self.messages.push(ChatMessage::user(question));
        self.messages.push(ChatMessage::assistant(response.answer));
        Some(response)
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_appends_both_sides() {
        let mut chat = AssistantChat::new("/dashboard/payments");
        let response = chat.ask("  Why is collection rate 78%? ").unwrap();
        assert_eq!(response.topic, Some("collection"));
        assert_eq!(chat.messages().len(), 2);
        assert_eq!(chat.messages()[0], ChatMessage::user("Why is collection rate 78%?"));
        assert_eq!(chat.messages()[1].role, ChatRole::Assistant);

        assert!(chat.ask("   ").is_none());
        assert_eq!(chat.messages().len(), 2);

        chat.clear();
        assert!(chat.messages().is_empty());
    }

    #[test]
    fn test_role_wire_format() {
        let json = serde_json::to_string(&ChatMessage::assistant("hi")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"hi"}"#);
    }
}
