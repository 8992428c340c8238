use crate::ids::TaxId;
use crate::Money;
use crate::Result;

use chrono::NaiveDate;

use serde::Deserialize;

use thiserror::Error;

/// Calendar-day format accepted by `statement_date` commands
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Represents an input row that a CSV record would deserialize into
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CommandRecord {
    pub command: CommandKind,
    pub tax_id: String,

    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    Open,
    Account,
    Update,
    Delete,
    Deposit,
    Withdraw,
    Balance,
    Statement,
    StatementDate,
}

/// Typed ledger command, forcing correct handling through the type-system
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerCommand {
    Open { tax_id: TaxId, name: String },
    Account { tax_id: TaxId },
    Update { tax_id: TaxId, name: String },
    Delete { tax_id: TaxId },
    Deposit { tax_id: TaxId, description: Option<String>, amount: Money },
    Withdraw { tax_id: TaxId, amount: Money },
    Balance { tax_id: TaxId },
    Statement { tax_id: TaxId },
    StatementDate { tax_id: TaxId, date: NaiveDate },
}

#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("Error parsing input command: tax_id missing: {0:?}")]
    NoTaxId(CommandRecord),

    #[error("Error parsing input command: name missing: {0:?}")]
    NoName(CommandRecord),

    #[error("Error parsing input command: amount missing: {0:?}")]
    NoAmount(CommandRecord),

    #[error("Error parsing input command: negative amount values not supported: {0:?}")]
    NegativeAmount(CommandRecord),

    #[error("Error parsing input command: date missing: {0:?}")]
    NoDate(CommandRecord),

    #[error("Error parsing input command: date must be YYYY-MM-DD: {0:?}")]
    InvalidDate(CommandRecord),
}

impl LedgerCommand {
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::Open { .. } => CommandKind::Open,
            Self::Account { .. } => CommandKind::Account,
            Self::Update { .. } => CommandKind::Update,
            Self::Delete { .. } => CommandKind::Delete,
            Self::Deposit { .. } => CommandKind::Deposit,
            Self::Withdraw { .. } => CommandKind::Withdraw,
            Self::Balance { .. } => CommandKind::Balance,
            Self::Statement { .. } => CommandKind::Statement,
            Self::StatementDate { .. } => CommandKind::StatementDate,
        }
    }

    pub fn tax_id(&self) -> &TaxId {
        match self {
            Self::Open { tax_id, .. }
            | Self::Account { tax_id }
            | Self::Update { tax_id, .. }
            | Self::Delete { tax_id }
            | Self::Deposit { tax_id, .. }
            | Self::Withdraw { tax_id, .. }
            | Self::Balance { tax_id }
            | Self::Statement { tax_id }
            | Self::StatementDate { tax_id, .. } => tax_id,
        }
    }
}

impl CommandKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Account => "account",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Deposit => "deposit",
            Self::Withdraw => "withdraw",
            Self::Balance => "balance",
            Self::Statement => "statement",
            Self::StatementDate => "statement_date",
        }
    }
}

impl CommandRecord {
    pub fn parse_command(self) -> Result<LedgerCommand> {
        let tax_id = non_empty(&self.tax_id)
            .map(TaxId::new)
            .ok_or_else(|| InputParseError::NoTaxId(self.clone()))?;

        let command = match self.command {
            CommandKind::Open => LedgerCommand::Open {
                tax_id,
                name: self.required_name()?,
            },
            CommandKind::Account => LedgerCommand::Account { tax_id },
            CommandKind::Update => LedgerCommand::Update {
                tax_id,
                name: self.required_name()?,
            },
            CommandKind::Delete => LedgerCommand::Delete { tax_id },
            CommandKind::Deposit => LedgerCommand::Deposit {
                tax_id,
                description: self.description.as_deref().and_then(non_empty).map(str::to_string),
                amount: self.required_amount()?,
            },
            CommandKind::Withdraw => LedgerCommand::Withdraw {
                tax_id,
                amount: self.required_amount()?,
            },
            CommandKind::Balance => LedgerCommand::Balance { tax_id },
            CommandKind::Statement => LedgerCommand::Statement { tax_id },
            CommandKind::StatementDate => LedgerCommand::StatementDate {
                tax_id,
                date: self.required_date()?,
            },
        };

        Ok(command)
    }

    fn required_name(&self) -> Result<String> {
        let name = self
            .name
            .as_deref()
            .and_then(non_empty)
            .ok_or_else(|| InputParseError::NoName(self.clone()))?;

        Ok(name.to_string())
    }

    fn required_amount(&self) -> Result<Money> {
        let amount = self
            .amount
            .as_deref()
            .and_then(non_empty)
            .ok_or_else(|| InputParseError::NoAmount(self.clone()))?;

        let amount = Money::parse(amount)?;

        if amount.is_negative() {
            Err(InputParseError::NegativeAmount(self.clone()))?;
        }

        Ok(amount)
    }

    fn required_date(&self) -> Result<NaiveDate> {
        let date = self
            .date
            .as_deref()
            .and_then(non_empty)
            .ok_or_else(|| InputParseError::NoDate(self.clone()))?;

        let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|_| InputParseError::InvalidDate(self.clone()))?;

        Ok(date)
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let value = value.trim();

    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
