mod account_ledger;
mod command_service;
mod shared_ledger;

pub use account_ledger::{AccountDataStore, AccountLedger, LedgerError};
pub use command_service::CommandService;
pub use shared_ledger::SharedLedger;
