use crate::input::CommandKind;
use crate::services::LedgerError;

use serde::{Deserialize, Serialize};

/// Outcome codes reported for each command
pub mod status {
    pub const OK: u16 = 200;
    pub const CREATED: u16 = 201;
    pub const DUPLICATE_ACCOUNT: u16 = 400;
    pub const INSUFFICIENT_FUNDS: u16 = 403;
    pub const ACCOUNT_NOT_FOUND: u16 = 404;
    pub const BALANCE_OVERFLOW: u16 = 422;
}

/// One output row per processed command
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reply {
    pub command: String,
    pub tax_id: String,
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn new(command: CommandKind, tax_id: &str, status: u16, body: String) -> Self {
        Self {
            command: command.as_str().to_string(),
            tax_id: tax_id.to_string(),
            status,
            body,
        }
    }

    pub fn from_error(command: CommandKind, error: &LedgerError) -> Self {
        let (tax_id, status) = match error {
            LedgerError::AccountNotFound(tax_id) => (tax_id, status::ACCOUNT_NOT_FOUND),
            LedgerError::DuplicateAccount(tax_id) => (tax_id, status::DUPLICATE_ACCOUNT),
            LedgerError::InsufficientFunds { tax_id, .. } => (tax_id, status::INSUFFICIENT_FUNDS),
            LedgerError::BalanceOverflow(tax_id) => (tax_id, status::BALANCE_OVERFLOW),
        };

        let body = serde_json::json!({ "error": error.to_string() }).to_string();

        Self::new(command, tax_id.as_str(), status, body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ids::TaxId;
    use crate::Money;

    #[test]
    fn from_error() {
        let error = LedgerError::InsufficientFunds {
            tax_id: TaxId::from("111"),
            balance: Money::ZERO,
            requested: Money(10_000),
        };

        let reply = Reply::from_error(CommandKind::Withdraw, &error);

        assert_eq!(reply.command, "withdraw");
        assert_eq!(reply.tax_id, "111");
        assert_eq!(reply.status, status::INSUFFICIENT_FUNDS);
        assert!(!reply.is_success());

        let body: serde_json::Value = serde_json::from_str(&reply.body).unwrap();
        assert_eq!(
            body["error"],
            "Insufficient funds: cannot withdraw 1.0000 from 111 when balance is 0.0000"
        );
    }

    #[test]
    fn status_per_error() {
        let tax_id = TaxId::from("222");

        let cases = vec![
            (LedgerError::AccountNotFound(tax_id.clone()), status::ACCOUNT_NOT_FOUND),
            (LedgerError::DuplicateAccount(tax_id.clone()), status::DUPLICATE_ACCOUNT),
            (LedgerError::BalanceOverflow(tax_id.clone()), status::BALANCE_OVERFLOW),
        ];

        for (error, expected) in cases {
            assert_eq!(Reply::from_error(CommandKind::Open, &error).status, expected);
        }
    }
}
