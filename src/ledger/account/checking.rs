use crate::ledger::Amount;

use super::account::TransactionError;
use rust_decimal_macros::dec;
use thiserror::Error;

const DEFAULT_WITHDRAWAL_LIMIT: Amount = dec!(500);
const DEFAULT_MAX_DAILY_WITHDRAWALS: u32 = 3;

/// Why a set of withdrawal ceilings was refused.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LimitsError {
    #[error("the withdrawal limit must be positive")]
    NonPositiveLimit,
    #[error("the maximum number of withdrawals must be positive")]
    NonPositiveCount,
}

/// Withdrawal ceilings of a checking account.
///
/// Note: the "daily" count is not reset when the day changes. It covers every
/// withdrawal the account has recorded during the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckingLimits {
    withdrawal_limit: Amount,
    max_daily_withdrawals: u32,
}

impl Default for CheckingLimits {
    fn default() -> Self {
        Self {
            withdrawal_limit: DEFAULT_WITHDRAWAL_LIMIT,
            max_daily_withdrawals: DEFAULT_MAX_DAILY_WITHDRAWALS,
        }
    }
}

impl CheckingLimits {
    /// Both ceilings must be strictly positive.
    pub fn new(withdrawal_limit: Amount, max_daily_withdrawals: u32) -> Result<Self, LimitsError> {
        if withdrawal_limit <= dec!(0) {
            return Err(LimitsError::NonPositiveLimit);
        }
        if max_daily_withdrawals == 0 {
            return Err(LimitsError::NonPositiveCount);
        }

        Ok(Self {
            withdrawal_limit,
            max_daily_withdrawals,
        })
    }

    pub fn withdrawal_limit(&self) -> Amount {
        self.withdrawal_limit
    }

    pub fn max_daily_withdrawals(&self) -> u32 {
        self.max_daily_withdrawals
    }

    /// Check a withdrawal against both ceilings, given the number of
    /// withdrawals already recorded.
    /// The per-transaction limit wins when both are violated.
    pub(super) fn check(&self, amount: Amount, withdrawals: usize) -> Result<(), TransactionError> {
        if amount > self.withdrawal_limit {
            return Err(TransactionError::LimitExceeded {
                limit: self.withdrawal_limit,
            });
        }

        if withdrawals >= self.max_daily_withdrawals as usize {
            return Err(TransactionError::DailyWithdrawalCountExceeded {
                max: self.max_daily_withdrawals,
            });
        }

        Ok(())
    }
}
