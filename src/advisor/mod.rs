//! The advisory chat flow.
//!
//! Gathers a snapshot of the caller's finances, renders it into a system
//! prompt and relays a single conversation turn to a hosted chat model.

mod chat;
mod config;
mod errors;
mod model;
mod prompt;

pub use chat::{Advisor, ChatMessage, ChatResponse, ChatRole, FinancialSnapshot, FinancialSummary};
pub use config::{AdvisorConfig, GenerationConfig};
pub use errors::{AdvisorError, ModelError};
pub use model::{ChatModel, ModelRequest, ModelRole, ModelTurn};
pub use prompt::system_prompt;
