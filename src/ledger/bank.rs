//! The bank owns every client and every account opened during the session.
//!
//! It is the only place where clients and accounts meet: accounts refer to
//! their owner by identifier, and clients list their accounts by number.

use super::account::{Account, CheckingLimits, TransactionError};
use super::client::Client;
use super::statement::Statement;
use super::transaction::Transaction;
use super::{AccountNumber, Amount, ClientId};
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LookupError {
    #[error("the client identifier must not be empty")]
    EmptyIdentifier,

    #[error("client {0} was not found")]
    ClientNotFound(ClientId),

    #[error("a client with identifier {0} already exists")]
    DuplicateClient(ClientId),

    #[error("client {0} has no account")]
    NoAccountForClient(ClientId),

    #[error("client {client} has no account number {number}")]
    UnknownAccount {
        client: ClientId,
        number: AccountNumber,
    },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum OperationError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Transaction(#[from] TransactionError),
}

pub struct Bank {
    limits: CheckingLimits,
    clients: Vec<Client>,
    accounts: Vec<Account>,
}

impl Default for Bank {
    fn default() -> Self {
        Self::new(CheckingLimits::default())
    }
}

impl Bank {
    /// Every account this bank opens gets the given limits.
    pub fn new(limits: CheckingLimits) -> Self {
        Self {
            limits,
            clients: Vec::new(),
            accounts: Vec::new(),
        }
    }

    pub fn find_client(&self, identifier: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.identifier() == identifier)
    }

    pub fn create_client(
        &mut self,
        identifier: impl Into<ClientId>,
        name: impl Into<String>,
        birthdate: NaiveDate,
        address: impl Into<String>,
    ) -> Result<&Client, LookupError> {
        let identifier = identifier.into();
        if identifier.is_empty() {
            return Err(LookupError::EmptyIdentifier);
        }
        if self.find_client(&identifier).is_some() {
            return Err(LookupError::DuplicateClient(identifier));
        }

        tracing::info!(client = %identifier, "created client");
        self.clients
            .push(Client::new(identifier, name, birthdate, address));

        // We just pushed it.
        Ok(&self.clients[self.clients.len() - 1])
    }

    /// Open a checking account for the client, numbered after the accounts
    /// already opened.
    pub fn open_account(&mut self, identifier: &str) -> Result<AccountNumber, LookupError> {
        let client = self
            .clients
            .iter_mut()
            .find(|c| c.identifier() == identifier)
            .ok_or_else(|| LookupError::ClientNotFound(identifier.to_string()))?;

        let number = self.accounts.len() as AccountNumber + 1;
        self.accounts.push(Account::checking_with_limits(
            identifier.to_string(),
            number,
            self.limits,
        ));
        client.add_account(number);

        tracing::info!(client = %identifier, account = number, "opened account");
        Ok(number)
    }

    /// The first account the client opened.
    pub fn default_account(&self, client: &Client) -> Result<&Account, LookupError> {
        self.account_of(client, None)
    }

    /// The client's account with the given number, or its default account.
    pub fn select_account(
        &self,
        identifier: &str,
        number: Option<AccountNumber>,
    ) -> Result<&Account, LookupError> {
        self.account_of(self.client(identifier)?, number)
    }

    pub fn deposit(
        &mut self,
        identifier: &str,
        amount: Amount,
        number: Option<AccountNumber>,
    ) -> Result<AccountNumber, OperationError> {
        self.execute(identifier, number, Transaction::deposit(amount))
    }

    pub fn withdraw(
        &mut self,
        identifier: &str,
        amount: Amount,
        number: Option<AccountNumber>,
    ) -> Result<AccountNumber, OperationError> {
        self.execute(identifier, number, Transaction::withdrawal(amount))
    }

    /// Hand the transaction to the client, against the selected account.
    /// Returns the number of the account it was applied to.
    pub fn execute(
        &mut self,
        identifier: &str,
        number: Option<AccountNumber>,
        transaction: Transaction,
    ) -> Result<AccountNumber, OperationError> {
        let client = self
            .clients
            .iter()
            .find(|c| c.identifier() == identifier)
            .ok_or_else(|| LookupError::ClientNotFound(identifier.to_string()))?;
        let number = Self::pick(client, number)?;
        let account = self
            .accounts
            .iter_mut()
            .find(|a| a.number() == number)
            .ok_or_else(|| LookupError::UnknownAccount {
                client: identifier.to_string(),
                number,
            })?;

        client.execute(account, &transaction)?;
        Ok(number)
    }

    pub fn statement(
        &self,
        identifier: &str,
        number: Option<AccountNumber>,
    ) -> Result<Statement<'_>, LookupError> {
        let client = self.client(identifier)?;
        let account = self.account_of(client, number)?;

        Ok(Statement::new(account, &client.name))
    }

    pub fn account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.iter().find(|a| a.number() == number)
    }

    /// All accounts, in opening order.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    /// All clients, in creation order.
    pub fn clients(&self) -> impl Iterator<Item = &Client> {
        self.clients.iter()
    }

    fn client(&self, identifier: &str) -> Result<&Client, LookupError> {
        self.find_client(identifier)
            .ok_or_else(|| LookupError::ClientNotFound(identifier.to_string()))
    }

    fn account_of(
        &self,
        client: &Client,
        number: Option<AccountNumber>,
    ) -> Result<&Account, LookupError> {
        let number = Self::pick(client, number)?;
        self.account(number).ok_or_else(|| LookupError::UnknownAccount {
            client: client.identifier().to_string(),
            number,
        })
    }

    fn pick(client: &Client, number: Option<AccountNumber>) -> Result<AccountNumber, LookupError> {
        match number {
            None => client
                .default_account()
                .ok_or_else(|| LookupError::NoAccountForClient(client.identifier().to_string())),
            Some(number) if client.accounts().contains(&number) => Ok(number),
            Some(number) => Err(LookupError::UnknownAccount {
                client: client.identifier().to_string(),
                number,
            }),
        }
    }
}
