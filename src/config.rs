//! Settings for the accounts a session opens.
//!
//! Every value can come from the command line or the environment; the ledger
//! core only ever sees the resulting [`CheckingLimits`].

use crate::ledger::{account::CheckingLimits, Amount};

use clap::Args;

#[derive(Debug, Clone, Args)]
pub struct Config {
    /// Largest amount a single withdrawal may take from a checking account
    #[arg(long, env = "LEDGER_WITHDRAWAL_LIMIT", default_value = "500")]
    pub withdrawal_limit: Amount,

    /// Number of withdrawals a checking account allows per session
    #[arg(long, env = "LEDGER_MAX_WITHDRAWALS", default_value_t = 3)]
    pub max_withdrawals: u32,
}

impl Config {
    pub fn limits(&self) -> anyhow::Result<CheckingLimits> {
        Ok(CheckingLimits::new(
            self.withdrawal_limit,
            self.max_withdrawals,
        )?)
    }
}
