//! An in-memory bank ledger for a single teller session.
//!
//! The `ledger` module holds the domain: clients, checking accounts, the
//! transactions applied to them and the history they leave behind. The other
//! modules are ways in and out of it: an interactive menu (`shell`), and a
//! CSV replay pipeline (`input` -> `ledger::process` -> `output`, wired by `run`).

pub mod config;
pub mod error_handler;
pub mod input;
pub mod ledger;
pub mod output;
pub mod run;
pub mod shell;
