use super::account::CheckingLimits;
use super::bank::{Bank, OperationError};
use super::transaction::Transaction;
use super::ClientId;
use chrono::NaiveDate;
use std::sync::mpsc::{self, Receiver};
use std::thread::JoinHandle;

/// Everything a teller can ask the bank to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    NewClient {
        identifier: ClientId,
        name: String,
        birthdate: NaiveDate,
        address: String,
    },
    OpenAccount {
        client: ClientId,
    },
    Execute {
        client: ClientId,
        transaction: Transaction,
    },
}

impl Bank {
    /// Apply a single operation. Transactions go to the client's default account.
    pub fn apply(&mut self, operation: Operation) -> Result<(), OperationError> {
        match operation {
            Operation::NewClient {
                identifier,
                name,
                birthdate,
                address,
            } => {
                self.create_client(identifier, name, birthdate, address)?;
            }
            Operation::OpenAccount { client } => {
                self.open_account(&client)?;
            }
            Operation::Execute {
                client,
                transaction,
            } => {
                self.execute(&client, None, transaction)?;
            }
        }

        Ok(())
    }
}

/// Build a bank from a stream of operations.
///
/// Rejected operations are streamed as they happen. Joining the returned
/// handle gives the bank back once every operation has been processed.
pub fn process(
    operations: Receiver<Operation>,
    limits: CheckingLimits,
) -> (Receiver<OperationError>, JoinHandle<Bank>) {
    let (tx, rx) = mpsc::channel();

    // We apply all operations in a new thread, to be able to stream errors as
    // we go.
    let handle = std::thread::spawn(move || {
        let mut bank = Bank::new(limits);

        for operation in operations {
            if let Err(err) = bank.apply(operation) {
                // Only fails if nobody listens to errors anymore, and then there is no one to tell.
                let _ = tx.send(err);
            }
        }

        bank
    });

    (rx, handle)
}
