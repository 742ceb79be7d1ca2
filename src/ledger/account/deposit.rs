use crate::ledger::Amount;

use super::account::{Account, TransactionError};
use rust_decimal_macros::dec;

impl Account {
    /// Credit the balance. Only positive amounts are accepted.
    pub(crate) fn deposit(&mut self, amount: Amount) -> Result<(), TransactionError> {
        if amount <= dec!(0) {
            return Err(TransactionError::InvalidAmount);
        }

        self.balance.add(amount)
    }
}
