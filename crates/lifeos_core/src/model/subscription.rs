//! Subscription model.
//!
//! # Invariants
//! - `price` is finite and non-negative.
//! - Prices are stored in their own `currency`; nothing converts between
//!   currencies.

use super::{new_record_id, require_id, require_text, ModelValidationError, RecordId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Cny,
}

impl Currency {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Cny => "¥",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    Monthly,
    Yearly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionCategory {
    Entertainment,
    Productivity,
    Utility,
    Life,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionItem {
    pub id: RecordId,
    pub name: String,
    pub price: f64,
    pub currency: Currency,
    pub cycle: BillingCycle,
    /// Unix epoch milliseconds of the next charge.
    pub next_billing_date: i64,
    pub category: SubscriptionCategory,
    pub is_private: bool,
    /// Emoji or image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Creation time.
    #[serde(default)]
    pub timestamp: i64,
}

/// Input for registering a new subscription.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSubscription {
    pub name: String,
    pub price: f64,
    pub currency: Currency,
    pub cycle: BillingCycle,
    pub next_billing_date: i64,
    pub category: SubscriptionCategory,
    pub is_private: bool,
    pub icon: Option<String>,
}

impl SubscriptionItem {
    pub fn create(input: NewSubscription, timestamp: i64) -> Result<Self, ModelValidationError> {
        let item = Self {
            id: new_record_id(),
            name: input.name,
            price: input.price,
            currency: input.currency,
            cycle: input.cycle,
            next_billing_date: input.next_billing_date,
            category: input.category,
            is_private: input.is_private,
            icon: input.icon,
            timestamp,
        };
        item.validate()?;
        Ok(item)
    }

    pub fn validate(&self) -> Result<(), ModelValidationError> {
        require_id(&self.id)?;
        require_text("name", &self.name)?;
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ModelValidationError::InvalidPrice(self.price));
        }
        Ok(())
    }
}
