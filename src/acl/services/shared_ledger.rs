use super::AccountLedger;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle to one `AccountLedger` behind a single lock.
///
/// Each call to `with` holds the lock for the whole closure, so resolving an account,
/// checking its balance and appending to its statement happen as one step.
#[derive(Debug, Clone, Default)]
pub struct SharedLedger {
    inner: Arc<Mutex<AccountLedger>>,
}

impl SharedLedger {
    pub fn new(ledger: AccountLedger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    pub fn with<T>(&self, f: impl FnOnce(&mut AccountLedger) -> T) -> T {
        f(&mut self.lock())
    }

    // The ledger validates before it mutates, so a panic elsewhere cannot leave it half-written.
    fn lock(&self) -> MutexGuard<'_, AccountLedger> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ids::TaxId;
    use crate::services::LedgerError;
    use crate::Money;

    use std::thread;

    const THREADS: usize = 8;
    const ROUNDS: usize = 250;

    #[test]
    fn concurrent_deposits_and_withdrawals() {
        let shared = SharedLedger::default();
        let tax_id = TaxId::from("111");

        shared
            .with(|ledger| ledger.create_account(tax_id.clone(), "Alice".to_string()).map(|_| ()))
            .unwrap();

        let handles: Vec<_> = (0..THREADS)
            .map(|n| {
                let shared = shared.clone();
                let tax_id = tax_id.clone();

                thread::spawn(move || {
                    let mut rejected = 0;

                    for _ in 0..ROUNDS {
                        let res = shared.with(|ledger| {
                            if n % 2 == 0 {
                                ledger.record_deposit(&tax_id, None, Money(2))
                            } else {
                                ledger.record_withdrawal(&tax_id, Money(3))
                            }
                        });

                        match res {
                            Ok(()) => {}
                            Err(LedgerError::InsufficientFunds { .. }) => rejected += 1,
                            Err(e) => panic!("unexpected error: {e}"),
                        }
                    }

                    rejected
                })
            })
            .collect();

        let rejected: i64 = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .sum();

        let deposited = (THREADS / 2 * ROUNDS) as i64 * 2;
        let withdrawn = ((THREADS / 2 * ROUNDS) as i64 - rejected) * 3;

        let balance = shared.with(|ledger| ledger.balance(&tax_id)).unwrap();

        assert_eq!(balance, Money(deposited - withdrawn));
        assert!(!balance.is_negative());

        let operations = shared.with(|ledger| ledger.statement(&tax_id).unwrap().len());
        assert_eq!(operations as i64, (THREADS * ROUNDS) as i64 - rejected);
    }
}
