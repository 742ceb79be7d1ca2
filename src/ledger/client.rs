use super::account::{Account, TransactionError};
use super::transaction::Transaction;
use super::{AccountNumber, ClientId};
use chrono::NaiveDate;

/// A natural person holding accounts at the bank, identified by their tax ID.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    identifier: ClientId,
    pub name: String,
    pub birthdate: NaiveDate,
    pub address: String,

    // Opening order: the first account is the default one.
    accounts: Vec<AccountNumber>,
}

impl Client {
    pub fn new(
        identifier: impl Into<ClientId>,
        name: impl Into<String>,
        birthdate: NaiveDate,
        address: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
            birthdate,
            address: address.into(),
            accounts: Vec::new(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn accounts(&self) -> &[AccountNumber] {
        &self.accounts
    }

    pub fn default_account(&self) -> Option<AccountNumber> {
        self.accounts.first().copied()
    }

    pub(super) fn add_account(&mut self, number: AccountNumber) {
        self.accounts.push(number);
    }

    /// Execute a transaction against one of the client's accounts.
    ///
    /// The client doesn't validate anything itself: the transaction applies
    /// itself, and the account enforces its own rules. New transaction kinds
    /// therefore don't need the client to know about them.
    pub fn execute(
        &self,
        account: &mut Account,
        transaction: &Transaction,
    ) -> Result<(), TransactionError> {
        transaction.apply(account)
    }
}
