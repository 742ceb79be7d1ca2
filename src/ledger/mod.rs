pub mod account;
pub mod bank;
pub mod client;
pub mod history;
pub mod process;
pub mod statement;
pub mod transaction;

// Named types keep signatures readable:
// (1) accounts: Vec<u32>
// (2) accounts: Vec<AccountNumber>
// Implementation (2) is self-explanatory, and changing the underlying type
// stays a one-line edit.
pub type ClientId = String;
pub type AccountNumber = u32;

// Money is a decimal, never a float.
pub type Amount = rust_decimal::Decimal;
const DECIMAL_PRECISION: u32 = 2;

/// Branch code attached to every account.
pub const AGENCY: &str = "0001";
