//! Accounts: a balance, a history, and the rules deciding whether a deposit or
//! a withdrawal may touch them.
//!
//! Each operation lives in its own file as an `impl Account` block, so the
//! rules for one operation can be read (and tested) in isolation.

#[allow(clippy::module_inception)]
mod account;
mod balance;
mod checking;
mod deposit;
mod withdrawal;

pub use account::{Account, AccountKind, TransactionError};
pub use balance::Balance;
pub use checking::{CheckingLimits, LimitsError};
