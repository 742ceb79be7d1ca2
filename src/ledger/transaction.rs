use super::account::{Account, TransactionError};
use super::Amount;
use chrono::Local;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Deposit,    // Add money to the balance.
    Withdrawal, // Take money from the balance.
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Deposit => f.write_str("Deposit"),
            Kind::Withdrawal => f.write_str("Withdrawal"),
        }
    }
}

/// A transaction is an immutable value: what to do, and how much.
///
/// It knows how to apply itself to an account. The account validates and
/// mutates its balance; only when that succeeds does the transaction land in
/// the account history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    kind: Kind,
    amount: Amount,
}

impl Transaction {
    // The new() function ensures we can only create amounts with a decimal precision of 2.
    pub fn new(kind: Kind, amount: Amount) -> Self {
        Self {
            kind,
            amount: amount.round_dp(super::DECIMAL_PRECISION),
        }
    }

    pub fn deposit(amount: Amount) -> Self {
        Self::new(Kind::Deposit, amount)
    }

    pub fn withdrawal(amount: Amount) -> Self {
        Self::new(Kind::Withdrawal, amount)
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Apply the transaction to the account, recording it on success.
    /// On error, neither the balance nor the history have changed.
    pub fn apply(&self, account: &mut Account) -> Result<(), TransactionError> {
        match self.kind {
            Kind::Deposit => account.deposit(self.amount)?,
            Kind::Withdrawal => account.withdraw(self.amount)?,
        }

        account.history.record(self.kind, self.amount, Local::now());
        tracing::debug!(
            account = account.number(),
            kind = %self.kind,
            amount = %self.amount,
            "recorded transaction"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Kind, Transaction};
    use crate::ledger::account::{Account, TransactionError};
    use rust_decimal_macros::dec;

    #[test]
    // Decimal precision is 2 places. We should be unable to have more precise amounts.
    fn test_transaction_decimal_precision() {
        for (raw_amount, want_amount) in vec![
            (dec!(1.0), dec!(1.0)),
            (dec!(0.999), dec!(1.00)),
            (dec!(1.0000001), dec!(1.0)),
            (dec!(1.23), dec!(1.23)),
            (dec!(1.235), dec!(1.24)),
        ] {
            let tx = Transaction::withdrawal(raw_amount);
            assert_eq!(want_amount, tx.amount());
            assert_eq!(Kind::Withdrawal, tx.kind());
        }
    }

    #[test]
    fn test_apply_records_in_execution_order() {
        let mut acc = Account::checking("111".to_string(), 1);

        Transaction::deposit(dec!(100)).apply(&mut acc).unwrap();
        Transaction::withdrawal(dec!(30)).apply(&mut acc).unwrap();

        let got: Vec<_> = acc
            .history()
            .entries()
            .iter()
            .map(|entry| (entry.kind, entry.amount))
            .collect();
        assert_eq!(
            vec![(Kind::Deposit, dec!(100)), (Kind::Withdrawal, dec!(30))],
            got
        );
        assert_eq!(dec!(70), acc.balance());
    }

    #[test]
    fn test_apply_failure_records_nothing() {
        let mut acc = Account::checking("111".to_string(), 1);

        for tx in vec![
            Transaction::deposit(dec!(-5)),
            Transaction::deposit(dec!(0)),
            Transaction::withdrawal(dec!(10)),
        ] {
            assert!(tx.apply(&mut acc).is_err());
        }

        assert_eq!(dec!(0), acc.balance());
        assert!(acc.history().is_empty());
    }

    #[test]
    // An amount that rounds to zero is rejected like any other non-positive amount.
    fn test_apply_amount_rounding_to_zero() {
        let mut acc = Account::checking("111".to_string(), 1);

        for transaction in vec![
            Transaction::deposit(dec!(0.001)),
            Transaction::deposit(dec!(0.004)),
            Transaction::withdrawal(dec!(0.004)),
        ] {
            assert_eq!(Err(TransactionError::InvalidAmount), transaction.apply(&mut acc));
        }
        assert!(acc.history().is_empty());
    }

    #[test]
    // The withdrawal limit is checked against the rounded amount.
    fn test_apply_rounding_at_withdrawal_limit() {
        let mut acc = Account::checking("111".to_string(), 1);
        Transaction::deposit(dec!(1000)).apply(&mut acc).unwrap();

        assert_eq!(
            Ok(()),
            Transaction::withdrawal(dec!(500.004)).apply(&mut acc)
        );
        assert_eq!(
            Err(TransactionError::LimitExceeded { limit: dec!(500) }),
            Transaction::withdrawal(dec!(500.006)).apply(&mut acc)
        );

        assert_eq!(dec!(500), acc.balance());
        let entries = acc.history().entries();
        assert_eq!(2, entries.len());
        assert_eq!(dec!(500.00), entries[1].amount);
    }
}
