use crate::services::LedgerError;

/// Convenience type to make error mapping cleaner
pub type Result<T = ()> = anyhow::Result<T>;

/// Typed outcome of every ledger operation
pub type LedgerResult<T = ()> = std::result::Result<T, LedgerError>;
