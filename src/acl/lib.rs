pub mod clock;
pub mod ids;
pub mod input;
pub mod models;
mod money;
pub mod reply;
mod result;
pub mod services;

pub use money::{Money, MoneyError};
pub use reply::Reply;
pub use result::{LedgerResult, Result};

pub fn build_command_service() -> services::CommandService {
    let ledger = services::AccountLedger::new();
    let shared_ledger = services::SharedLedger::new(ledger);

    return services::CommandService::new(shared_ledger);
}
