use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, error, info};

use crate::advisor::{system_prompt, AdvisorConfig, AdvisorError, ChatModel, ModelError, ModelRequest, ModelTurn};
use crate::models::{Account, Budget, Transaction};
use crate::records::Caller;
use crate::stats::{aggregate, MonthWindow, MonthlyStats};
use crate::storage::Storage;

const FAILURE_REPLY: &str = "I'm sorry, I encountered an error while processing your request. Please try again later.";

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    #[serde(other)]
    Assistant
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into()
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into()
        }
    }
}

impl From<&ChatMessage> for ModelTurn {
    fn from(message: &ChatMessage) -> Self {
        match message.role {
            ChatRole::User => ModelTurn::user(message.content.as_str()),
            ChatRole::Assistant => ModelTurn::model(message.content.as_str())
        }
    }
}

/// The figures returned next to every successful reply.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub accounts: Vec<Account>,
    pub budget: Option<Budget>,
    pub current_month_stats: MonthlyStats,
    pub previous_month_stats: MonthlyStats
}

/// Always well-formed: failures set `error` instead of escaping the chat call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_summary: Option<FinancialSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>
}

impl ChatResponse {
    fn reply(content: String, summary: FinancialSummary) -> Self {
        Self {
            content,
            financial_summary: Some(summary),
            error: None
        }
    }

    fn failure(error: &AdvisorError) -> Self {
        Self {
            content: FAILURE_REPLY.to_string(),
            financial_summary: None,
            error: Some(error.to_string())
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Everything the advisor knows about a user for one request.
#[derive(Debug, Clone)]
pub struct FinancialSnapshot {
    pub user_name: String,
    pub accounts: Vec<Account>,
    pub budget: Option<Budget>,
    pub current_month: MonthWindow,
    pub previous_month: MonthWindow,
    /// Newest first, capped at the configured recent limit.
    pub recent_transactions: Vec<Transaction>,
    pub current_month_stats: MonthlyStats,
    pub previous_month_stats: MonthlyStats
}

impl FinancialSnapshot {
    /// Collects the caller's accounts, budget and the stats of the month of
    /// `today` and the month before.
    ///
    /// # Errors
    /// `AdvisorError::Unauthorized` without a caller, `AdvisorError::UserNotFound`
    /// when nothing is stored for the caller.
    pub fn collect<S: Storage>(
        storage: &S,
        caller: Option<&Caller>,
        today: NaiveDate,
        recent_limit: usize
    ) -> Result<Self, AdvisorError> {
        let caller = caller.ok_or(AdvisorError::Unauthorized)?;
        let record = storage.load(&caller.uid)
            .ok_or_else(|| AdvisorError::UserNotFound { user_id: caller.uid.clone() })?;

        let current_month = MonthWindow::containing(today);
        let previous_month = current_month.previous();

        let current_transactions = record.transactions_in(current_month);
        let previous_transactions = record.transactions_in(previous_month);

        let mut recent_transactions = current_transactions.clone();
        recent_transactions.truncate(recent_limit);

        debug!(
            "Snapshot for user [{}]: {} transactions in {current_month}, {} in {previous_month}",
            caller.uid, current_transactions.len(), previous_transactions.len()
        );

        Ok(Self {
            user_name: record.display_name().to_string(),
            accounts: record.accounts.clone(),
            budget: record.primary_budget().cloned(),
            current_month,
            previous_month,
            recent_transactions,
            current_month_stats: aggregate(&current_transactions),
            previous_month_stats: aggregate(&previous_transactions)
        })
    }

    pub fn summary(&self) -> FinancialSummary {
        FinancialSummary {
            accounts: self.accounts.clone(),
            budget: self.budget.clone(),
            current_month_stats: self.current_month_stats.clone(),
            previous_month_stats: self.previous_month_stats.clone()
        }
    }
}

/// Chat front end over a user's stored finances.
///
/// Storage, model client and configuration are handed in explicitly; the
/// advisor keeps no state between calls.
pub struct Advisor<S: Storage, M: ChatModel> {
    storage: Arc<S>,
    model: M,
    config: AdvisorConfig
}

impl<S: Storage, M: ChatModel> Advisor<S, M> {
    pub fn new(storage: Arc<S>, model: M) -> Self {
        Self {
            storage,
            model,
            config: AdvisorConfig::default()
        }
    }

    pub fn with_config(mut self, config: AdvisorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// See [`FinancialSnapshot::collect`].
    pub fn snapshot(&self, caller: Option<&Caller>, today: NaiveDate) -> Result<FinancialSnapshot, AdvisorError> {
        FinancialSnapshot::collect(self.storage.as_ref(), caller, today, self.config.recent_limit)
    }

    /// Answers the last message of `messages` in the context of the caller's finances.
    ///
    /// Never fails: any error is logged and turned into an apology carrying
    /// the error text.
    pub async fn chat(&self, caller: Option<&Caller>, today: NaiveDate, messages: &[ChatMessage]) -> ChatResponse {
        match self.try_chat(caller, today, messages).await {
            Ok(response) => response,
            Err(error) => {
                error!("Error in advisor chat: {error}");
                ChatResponse::failure(&error)
            }
        }
    }

    async fn try_chat(&self, caller: Option<&Caller>, today: NaiveDate, messages: &[ChatMessage]) -> Result<ChatResponse, AdvisorError> {
        let snapshot = self.snapshot(caller, today)?;

        let Some((last, earlier)) = messages.split_last() else {
            let greeting = format!(
                "Hello! I'm your {} AI Financial Advisor. How can I help you with your finances today?",
                self.config.assistant_name
            );

            return Ok(ChatResponse::reply(greeting, snapshot.summary()))
        };

        let prompt = system_prompt(&snapshot, &self.config);
        let history: Vec<ModelTurn> = std::iter::once(ModelTurn::user(prompt))
            .chain(earlier.iter().map(ModelTurn::from))
            .collect();

        let request = ModelRequest {
            model: &self.config.model,
            history: &history,
            message: &last.content,
            generation: self.config.generation
        };

        let reply = timeout(self.config.request_timeout, self.model.send(request)).await
            .map_err(|_| ModelError::Timeout(self.config.request_timeout))??;

        if reply.trim().is_empty() {
            return Err(ModelError::EmptyResponse.into())
        }

        info!("Advisor answered {} messages for [{}]", messages.len(), snapshot.user_name);

        Ok(ChatResponse::reply(reply, snapshot.summary()))
    }
}
