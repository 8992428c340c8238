mod account;
mod operation;
mod statement;

pub use account::Account;
pub use operation::{Operation, OperationType};
pub use statement::{compute_balance, filter_statement_by_date, Statement};
