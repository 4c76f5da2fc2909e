use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

use crate::types::{Money, RecordId};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountType {
    Current,
    Savings
}

impl Display for AccountType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AccountType::Current => write!(formatter, "CURRENT"),
            AccountType::Savings => write!(formatter, "SAVINGS")
        }
    }
}

/// A bank account with its latest known balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: RecordId,
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub balance: Money
}

impl Account {
    pub fn new(name: impl Into<String>, account_type: AccountType, balance: Money) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            account_type,
            balance
        }
    }
}
