use std::future::Future;

use serde::Serialize;

use crate::advisor::{GenerationConfig, ModelError};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelRole {
    User,
    Model
}

/// One entry of the conversation history as the hosted model expects it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct ModelTurn {
    pub role: ModelRole,
    pub text: String
}

impl ModelTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ModelRole::User,
            text: text.into()
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ModelRole::Model,
            text: text.into()
        }
    }
}

/// A single chat turn: prior history plus the message to answer.
#[derive(Debug, Clone, Copy)]
pub struct ModelRequest<'a> {
    pub model: &'a str,
    pub history: &'a [ModelTurn],
    pub message: &'a str,
    pub generation: GenerationConfig
}

/// A hosted generative chat model.
pub trait ChatModel: Send + Sync {
    /// Starts a chat seeded with `request.history` and returns the reply text to `request.message`.
    fn send(&self, request: ModelRequest<'_>) -> impl Future<Output = Result<String, ModelError>> + Send;
}
