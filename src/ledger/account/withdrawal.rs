use crate::ledger::{transaction::Kind, Amount};

use super::account::{Account, AccountKind, TransactionError};
use rust_decimal_macros::dec;

impl Account {
    /// Debit the balance, after the account variant's own rules agree.
    pub(crate) fn withdraw(&mut self, amount: Amount) -> Result<(), TransactionError> {
        match &self.kind {
            AccountKind::Checking(limits) => {
                limits.check(amount, self.history.count(Kind::Withdrawal))?
            }
        }

        self.withdraw_funds(amount)
    }

    /// Rules shared by every account: the amount is positive and covered by the balance.
    fn withdraw_funds(&mut self, amount: Amount) -> Result<(), TransactionError> {
        if amount > self.balance.amount() {
            return Err(TransactionError::InsufficientFunds);
        }

        if amount <= dec!(0) {
            return Err(TransactionError::InvalidAmount);
        }

        self.balance.subtract(amount)
    }
}
