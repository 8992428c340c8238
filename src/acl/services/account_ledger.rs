use crate::clock::{Clock, SystemClock};
use crate::ids::TaxId;
use crate::models::{Account, Operation, Statement};
use crate::{LedgerResult, Money};

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;

use thiserror::Error;

pub type AccountDataStore = HashMap<TaxId, Account>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Account not found: {0}")]
    AccountNotFound(TaxId),

    #[error("Account already exists: {0}")]
    DuplicateAccount(TaxId),

    #[error("Insufficient funds: cannot withdraw {requested} from {tax_id} when balance is {balance}")]
    InsufficientFunds {
        tax_id: TaxId,
        balance: Money,
        requested: Money,
    },

    #[error("Balance overflow: deposit would exceed the maximum balance for {0}")]
    BalanceOverflow(TaxId),
}

/// Authoritative collection of accounts, keyed by tax id.
///
/// Every operation besides `create_account` resolves its account through `find_account`
/// first, and leaves the ledger untouched when it fails.
pub struct AccountLedger {
    repository: AccountDataStore,
    clock: Box<dyn Clock + Send>,
}

impl AccountLedger {
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock + Send>) -> Self {
        Self {
            repository: AccountDataStore::new(),
            clock,
        }
    }

    pub fn set_clock(&mut self, clock: Box<dyn Clock + Send>) {
        self.clock = clock;
    }

    pub fn create_account(&mut self, tax_id: TaxId, name: String) -> LedgerResult<&Account> {
        if self.repository.contains_key(&tax_id) {
            return Err(LedgerError::DuplicateAccount(tax_id));
        }

        let account = Account::new(tax_id.clone(), name);

        Ok(&*self.repository.entry(tax_id).or_insert(account))
    }

    pub fn find_account(&self, tax_id: &TaxId) -> LedgerResult<&Account> {
        self.repository
            .get(tax_id)
            .ok_or_else(|| LedgerError::AccountNotFound(tax_id.clone()))
    }

    fn find_account_mut(&mut self, tax_id: &TaxId) -> LedgerResult<&mut Account> {
        self.repository
            .get_mut(tax_id)
            .ok_or_else(|| LedgerError::AccountNotFound(tax_id.clone()))
    }

    /// Appends a credit. Deposits are unconditional apart from the money type's range.
    pub fn record_deposit(
        &mut self,
        tax_id: &TaxId,
        description: Option<String>,
        amount: Money,
    ) -> LedgerResult {
        let created_at = self.clock.now();
        let account = self.find_account_mut(tax_id)?;

        account
            .statement
            .balance()
            .checked_add(amount)
            .map_err(|_| LedgerError::BalanceOverflow(tax_id.clone()))?;

        account
            .statement
            .push(Operation::credit(amount, description, created_at));

        Ok(())
    }

    /// Appends a debit, unless the freshly computed balance is strictly less than `amount`.
    pub fn record_withdrawal(&mut self, tax_id: &TaxId, amount: Money) -> LedgerResult {
        let created_at = self.clock.now();
        let account = self.find_account_mut(tax_id)?;

        let balance = account.statement.balance();

        if balance < amount {
            return Err(LedgerError::InsufficientFunds {
                tax_id: tax_id.clone(),
                balance,
                requested: amount,
            });
        }

        account.statement.push(Operation::debit(amount, created_at));

        Ok(())
    }

    pub fn statement(&self, tax_id: &TaxId) -> LedgerResult<&Statement> {
        Ok(&self.find_account(tax_id)?.statement)
    }

    pub fn statement_on(&self, tax_id: &TaxId, date: NaiveDate) -> LedgerResult<Vec<&Operation>> {
        Ok(self.find_account(tax_id)?.statement.on_date(date))
    }

    pub fn balance(&self, tax_id: &TaxId) -> LedgerResult<Money> {
        Ok(self.find_account(tax_id)?.statement.balance())
    }

    pub fn update_account_name(&mut self, tax_id: &TaxId, name: String) -> LedgerResult {
        self.find_account_mut(tax_id)?.name = name;

        Ok(())
    }

    /// Removes the account stored under `tax_id` and hands it back to the caller.
    pub fn delete_account(&mut self, tax_id: &TaxId) -> LedgerResult<Account> {
        self.repository
            .remove(tax_id)
            .ok_or_else(|| LedgerError::AccountNotFound(tax_id.clone()))
    }

    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.repository.values()
    }

    pub fn len(&self) -> usize {
        self.repository.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for AccountLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AccountLedger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("AccountLedger")
            .field("repository", &self.repository)
            .finish_non_exhaustive()
    }
}
