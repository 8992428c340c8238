use crate::Money;

use chrono::{DateTime, Local};

use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Credit,
    Debit,
}

/// A single statement entry. Owned by exactly one statement and never edited after recording.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Operation {
    #[serde(rename = "type")]
    pub op_type: OperationType,

    pub amount: Money,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub created_at: DateTime<Local>,
}

impl Operation {
    pub fn credit(amount: Money, description: Option<String>, created_at: DateTime<Local>) -> Self {
        Self {
            op_type: OperationType::Credit,
            amount,
            description,
            created_at,
        }
    }

    pub fn debit(amount: Money, created_at: DateTime<Local>) -> Self {
        Self {
            op_type: OperationType::Debit,
            amount,
            description: None,
            created_at,
        }
    }
}
