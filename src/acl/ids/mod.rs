mod account_id;
mod tax_id;

pub use account_id::AccountId;
pub use tax_id::TaxId;
