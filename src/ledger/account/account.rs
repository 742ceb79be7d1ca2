use crate::ledger::{history::History, AccountNumber, Amount, ClientId, AGENCY};

use super::{balance::Balance, checking::CheckingLimits};
use rust_decimal_macros::dec;
use thiserror::Error;

/// Reasons a transaction can be refused.
///
/// Every variant is recoverable: the account is left exactly as it was, and
/// nothing is added to its history. The `Display` output is meant for the
/// person at the counter.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransactionError {
    /// The amount is zero or negative.
    #[error("the amount informed is invalid")]
    InvalidAmount,

    /// Funds in the account are insufficient for a withdrawal.
    #[error("there are not enough funds in the account")]
    InsufficientFunds,

    /// A checking account refuses withdrawals above its per-transaction limit.
    #[error("the withdrawal exceeds the limit of {limit:.2}")]
    LimitExceeded { limit: Amount },

    /// A checking account refuses withdrawals once its ceiling is reached.
    #[error("the maximum number of daily withdrawals ({max}) has been reached")]
    DailyWithdrawalCountExceeded { max: u32 },

    /// Adding more money to the balance would overflow.
    #[error("the amount is too large to be processed")]
    Overflow,
}

/// The account variants the ledger knows about, with the rules specific to each.
#[derive(Debug, Clone, PartialEq)]
pub enum AccountKind {
    Checking(CheckingLimits),
}

/// An account holds a balance that never goes negative, and the history of
/// every transaction that succeeded against it.
///
/// The owning client is stored as its identifier, not as a reference: the
/// bank owns both clients and accounts, and looks one up from the other.
#[derive(Debug, Clone)]
pub struct Account {
    number: AccountNumber,
    agency: &'static str,
    client_id: ClientId,
    pub(super) kind: AccountKind,
    pub(super) balance: Balance,
    pub(in crate::ledger) history: History,
}

impl Account {
    /// Open a checking account with the default limits.
    pub fn checking(client_id: ClientId, number: AccountNumber) -> Self {
        Self::checking_with_limits(client_id, number, CheckingLimits::default())
    }

    /// Open a checking account with custom limits.
    ///
    /// `number` is expected to be unique: the caller assigns it.
    pub fn checking_with_limits(
        client_id: ClientId,
        number: AccountNumber,
        limits: CheckingLimits,
    ) -> Self {
        Self {
            number,
            agency: AGENCY,
            client_id,
            kind: AccountKind::Checking(limits),
            balance: Balance::new(dec!(0)),
            history: History::new(),
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn agency(&self) -> &str {
        self.agency
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    /// Current balance. Always zero or positive.
    pub fn balance(&self) -> Amount {
        self.balance.amount()
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}
