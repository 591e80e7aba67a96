pub mod chat;
pub mod contextual;
pub mod knowledge_base;

pub use chat::{AssistantChat, ChatMessage, ChatRole};
pub use contextual::get_contextual_questions;
pub use knowledge_base::{get_ai_response, AiResponse};
