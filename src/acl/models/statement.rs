use super::{Operation, OperationType};

use crate::Money;

use chrono::NaiveDate;

use serde::Serialize;

/// Derives the balance of a statement by folding over it from zero.
///
/// Credits add and debits subtract. Nothing is cached, so the result can never
/// drift from the operations it was computed from.
pub fn compute_balance(operations: &[Operation]) -> Money {
    operations
        .iter()
        .fold(Money::ZERO, |balance, operation| match operation.op_type {
            OperationType::Credit => balance.saturating_add(operation.amount),
            OperationType::Debit => balance.saturating_sub(operation.amount),
        })
}

/// Returns the operations recorded on `date`, in the local time zone, keeping their order.
pub fn filter_statement_by_date(operations: &[Operation], date: NaiveDate) -> Vec<&Operation> {
    operations
        .iter()
        .filter(|operation| operation.created_at.date_naive() == date)
        .collect()
}

/// Append-only, chronologically ordered list of an account's operations
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Statement {
    operations: Vec<Operation>,
}

impl Statement {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, operation: Operation) {
        self.operations.push(operation);
    }

    pub fn balance(&self) -> Money {
        compute_balance(&self.operations)
    }

    pub fn on_date(&self, date: NaiveDate) -> Vec<&Operation> {
        filter_statement_by_date(&self.operations, date)
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn iter(&self) -> impl Iterator<Item = &Operation> {
        self.operations.iter()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
