use super::Statement;

use crate::ids::{AccountId, TaxId};

use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Account {
    pub id: AccountId,
    pub tax_id: TaxId,
    pub name: String,
    pub statement: Statement,
}

impl Account {
    pub fn new(tax_id: TaxId, name: String) -> Self {
        Self {
            id: AccountId::generate(),
            tax_id,
            name,
            statement: Statement::new(),
        }
    }
}
