use crate::ledger::Amount;

use super::account::TransactionError;
use rust_decimal_macros::dec;

/// Money held by an account. It never goes below zero: a subtraction that
/// would is refused and leaves the balance untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Balance(Amount);

impl Balance {
    pub const fn new(amount: Amount) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> Amount {
        self.0
    }

    pub fn add(&mut self, amount: Amount) -> Result<(), TransactionError> {
        self.0 = self
            .0
            .checked_add(amount)
            .ok_or(TransactionError::Overflow)?;

        Ok(())
    }

    pub fn subtract(&mut self, amount: Amount) -> Result<(), TransactionError> {
        let remaining = self
            .0
            .checked_sub(amount)
            .ok_or(TransactionError::Overflow)?;
        if remaining < dec!(0) {
            return Err(TransactionError::InsufficientFunds);
        }

        self.0 = remaining;
        Ok(())
    }
}
