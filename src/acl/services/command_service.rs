use super::{AccountLedger, SharedLedger};

use crate::ids::TaxId;
use crate::input::{CommandKind, LedgerCommand};
use crate::models::Account;
use crate::reply::{status, Reply};
use crate::{LedgerResult, Result};

use serde::Serialize;

/// Resolves each command against the shared ledger and renders the outcome as a `Reply`
#[derive(Debug, Clone)]
pub struct CommandService {
    ledger: SharedLedger,
}

impl CommandService {
    pub fn new(ledger: SharedLedger) -> Self {
        return Self { ledger };
    }

    pub fn ledger(&self) -> &SharedLedger {
        return &self.ledger;
    }

    pub fn process(&self, command: LedgerCommand) -> Result<Reply> {
        log::debug!("Processing ledger command: {command:?}");

        let reply = self.ledger.with(|ledger| execute(ledger, &command))?;

        if reply.is_success() {
            log::debug!("Command succeeded: {reply:?}");
        } else {
            log::warn!("Command rejected: {} {} -> {}", reply.command, reply.tax_id, reply.body);
        }

        return Ok(reply);
    }
}

fn execute(ledger: &mut AccountLedger, command: &LedgerCommand) -> Result<Reply> {
    let kind = command.kind();

    let reply = match command {
        LedgerCommand::Open { tax_id, name } => {
            let outcome = ledger.create_account(tax_id.clone(), name.clone()).map(|_| ());
            confirm(kind, tax_id, outcome)
        }

        LedgerCommand::Account { tax_id } => render(kind, tax_id, ledger.find_account(tax_id))?,

        LedgerCommand::Update { tax_id, name } => {
            confirm(kind, tax_id, ledger.update_account_name(tax_id, name.clone()))
        }

        LedgerCommand::Delete { tax_id } => {
            let outcome = match ledger.delete_account(tax_id) {
                Ok(_) => Ok(remaining_accounts(ledger)),
                Err(e) => Err(e),
            };
            render(kind, tax_id, outcome)?
        }

        LedgerCommand::Deposit {
            tax_id,
            description,
            amount,
        } => confirm(
            kind,
            tax_id,
            ledger.record_deposit(tax_id, description.clone(), *amount),
        ),

        LedgerCommand::Withdraw { tax_id, amount } => {
            confirm(kind, tax_id, ledger.record_withdrawal(tax_id, *amount))
        }

        LedgerCommand::Balance { tax_id } => render(kind, tax_id, ledger.balance(tax_id))?,

        LedgerCommand::Statement { tax_id } => render(kind, tax_id, ledger.statement(tax_id))?,

        LedgerCommand::StatementDate { tax_id, date } => {
            render(kind, tax_id, ledger.statement_on(tax_id, *date))?
        }
    };

    Ok(reply)
}

/// Accounts left after a deletion, ordered by tax id
fn remaining_accounts(ledger: &AccountLedger) -> Vec<&Account> {
    let mut accounts: Vec<&Account> = ledger.accounts().collect();
    accounts.sort_by(|a, b| a.tax_id.cmp(&b.tax_id));
    accounts
}

fn confirm(kind: CommandKind, tax_id: &TaxId, outcome: LedgerResult) -> Reply {
    match outcome {
        Ok(()) => Reply::new(kind, tax_id.as_str(), status::CREATED, String::new()),
        Err(e) => Reply::from_error(kind, &e),
    }
}

fn render<T: Serialize>(kind: CommandKind, tax_id: &TaxId, outcome: LedgerResult<T>) -> Result<Reply> {
    let reply = match outcome {
        Ok(value) => Reply::new(kind, tax_id.as_str(), status::OK, serde_json::to_string(&value)?),
        Err(e) => Reply::from_error(kind, &e),
    };

    Ok(reply)
}
