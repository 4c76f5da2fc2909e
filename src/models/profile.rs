use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::errors::RecordError;
use crate::models::require_non_negative;
use crate::types::Money;

const DEFAULT_CURRENCY: &str = "USD";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub display_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub monthly_income: Money,
    pub savings_goal: Money,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub preferred_currency: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub monthly_income: Option<Money>,
    pub savings_goal: Option<Money>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub preferred_currency: Option<String>
}

impl UserProfile {
    pub fn new(display_name: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();

        Self {
            display_name: display_name.into(),
            email: email.into(),
            phone_number: None,
            monthly_income: Money::ZERO,
            savings_goal: Money::ZERO,
            avatar_url: None,
            bio: None,
            preferred_currency: DEFAULT_CURRENCY.to_string(),
            created_at: now,
            updated_at: now
        }
    }

    pub fn apply(&mut self, update: ProfileUpdate) -> Result<(), RecordError> {
        if let Some(monthly_income) = update.monthly_income {
            require_non_negative("monthly income", monthly_income)?;
        }

        if let Some(savings_goal) = update.savings_goal {
            require_non_negative("savings goal", savings_goal)?;
        }

        if let Some(monthly_income) = update.monthly_income {
            self.monthly_income = monthly_income;
        }

        if let Some(savings_goal) = update.savings_goal {
            self.savings_goal = savings_goal;
        }

        if let Some(display_name) = update.display_name {
            self.display_name = display_name;
        }

        if let Some(email) = update.email {
            self.email = email;
        }

        if let Some(phone_number) = update.phone_number {
            self.phone_number = Some(phone_number);
        }

        if let Some(avatar_url) = update.avatar_url {
            self.avatar_url = Some(avatar_url);
        }

        if let Some(bio) = update.bio {
            self.bio = Some(bio);
        }

        if let Some(preferred_currency) = update.preferred_currency {
            self.preferred_currency = preferred_currency;
        }

        self.updated_at = Utc::now();

        Ok(())
    }
}
