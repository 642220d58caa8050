use serde::Serialize;

use crate::core::{ChatRole, Message};

#[derive(Debug, Clone, Serialize)]
pub struct Request<'a> {
    pub model: &'a str,

    pub messages: Vec<RequestMessage<'a>>,

    pub temperature: f32,

    pub max_tokens: u32,
}

/// A message reduced to the two fields the endpoint accepts.
#[derive(Debug, Clone, Serialize)]
pub struct RequestMessage<'a> {
    pub role: ChatRole,
    pub content: &'a str,
}

impl<'a> From<&'a Message> for RequestMessage<'a> {
    fn from(message: &'a Message) -> Self {
        Self {
            role: message.role,
            content: &message.content,
        }
    }
}
