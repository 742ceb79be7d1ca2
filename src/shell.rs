//! The interactive teller menu.
//!
//! The shell only collects input and prints results: every rule lives in the
//! ledger. It works over any reader and writer, so a whole session can be
//! scripted.

use crate::input::BIRTHDATE_FORMAT;
use crate::ledger::{
    bank::Bank,
    transaction::{Kind, Transaction},
    AccountNumber, Amount, ClientId,
};

use chrono::NaiveDate;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

const MENU: &str = "
================ MENU ================
[d]\tDeposit
[s]\tWithdraw
[e]\tStatement
[nc]\tNew account
[lc]\tList accounts
[nu]\tNew client
[q]\tQuit
=> ";

pub struct Shell<R, W> {
    input: R,
    output: W,
    bank: Bank,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, bank: Bank) -> Self {
        Self {
            input,
            output,
            bank,
        }
    }

    pub fn into_bank(self) -> Bank {
        self.bank
    }

    /// Run the menu until the teller quits or the input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let choice = match self.prompt(MENU)? {
                Some(choice) => choice,
                None => break,
            };

            match choice.as_str() {
                "d" => self.transact(Kind::Deposit)?,
                "s" => self.transact(Kind::Withdrawal)?,
                "e" => self.statement()?,
                "nu" => self.new_client()?,
                "nc" => self.new_account()?,
                "lc" => self.list_accounts()?,
                "q" => {
                    writeln!(self.output, "\nLeaving the system...")?;
                    break;
                }
                _ => writeln!(
                    self.output,
                    "\nInvalid operation, please select again."
                )?,
            }
        }

        self.output.flush()
    }

    fn transact(&mut self, kind: Kind) -> io::Result<()> {
        let client = match self.existing_client()? {
            Some(client) => client,
            None => return Ok(()),
        };
        let amount = match self.amount(kind)? {
            Some(amount) => amount,
            None => return Ok(()),
        };
        let number = match self.account_choice(&client)? {
            Some(number) => number,
            None => return Ok(()),
        };

        match self
            .bank
            .execute(&client, number, Transaction::new(kind, amount))
        {
            Ok(_) => writeln!(self.output, "\n{} completed successfully!", kind),
            Err(err) => writeln!(self.output, "\nOperation failed: {}.", err),
        }
    }

    fn statement(&mut self) -> io::Result<()> {
        let client = match self.existing_client()? {
            Some(client) => client,
            None => return Ok(()),
        };
        let number = match self.account_choice(&client)? {
            Some(number) => number,
            None => return Ok(()),
        };

        match self.bank.statement(&client, number) {
            Ok(statement) => {
                writeln!(self.output, "\n================ STATEMENT ================")?;
                writeln!(self.output, "{}", statement)?;
                writeln!(self.output, "===========================================")
            }
            Err(err) => writeln!(self.output, "\nOperation failed: {}.", err),
        }
    }

    fn new_client(&mut self) -> io::Result<()> {
        let identifier = match self.prompt("Client identifier (numbers only): ")? {
            Some(identifier) => identifier,
            None => return Ok(()),
        };
        if self.bank.find_client(&identifier).is_some() {
            return writeln!(
                self.output,
                "\nA client with identifier {} already exists!",
                identifier
            );
        }

        let name = match self.prompt("Full name: ")? {
            Some(name) => name,
            None => return Ok(()),
        };
        let birthdate = match self.prompt("Birthdate (dd-mm-yyyy): ")? {
            Some(raw) => match NaiveDate::parse_from_str(&raw, BIRTHDATE_FORMAT) {
                Ok(birthdate) => birthdate,
                Err(_) => {
                    return writeln!(self.output, "\nInvalid birthdate: {}.", raw);
                }
            },
            None => return Ok(()),
        };
        let address = match self.prompt("Address (street, number - district - city/state): ")? {
            Some(address) => address,
            None => return Ok(()),
        };

        match self
            .bank
            .create_client(identifier, name, birthdate, address)
        {
            Ok(_) => writeln!(self.output, "\nClient created successfully!"),
            Err(err) => writeln!(self.output, "\nOperation failed: {}.", err),
        }
    }

    fn new_account(&mut self) -> io::Result<()> {
        let identifier = match self.prompt("Client identifier: ")? {
            Some(identifier) => identifier,
            None => return Ok(()),
        };

        match self.bank.open_account(&identifier) {
            Ok(number) => writeln!(
                self.output,
                "\nAccount {} created successfully!",
                number
            ),
            Err(err) => writeln!(self.output, "\nOperation failed: {}.", err),
        }
    }

    fn list_accounts(&mut self) -> io::Result<()> {
        if self.bank.accounts().next().is_none() {
            return writeln!(self.output, "\nNo accounts opened yet.");
        }

        for account in self.bank.accounts() {
            let holder = self
                .bank
                .find_client(account.client_id())
                .map(|client| client.name.as_str())
                .unwrap_or_default();

            writeln!(self.output, "{}", "=".repeat(100))?;
            writeln!(self.output, "Agency:\t{}", account.agency())?;
            writeln!(self.output, "Account:\t{}", account.number())?;
            writeln!(self.output, "Holder:\t{}", holder)?;
        }

        Ok(())
    }

    /// Ask for a client identifier, and make sure the client exists.
    fn existing_client(&mut self) -> io::Result<Option<ClientId>> {
        let identifier = match self.prompt("Client identifier: ")? {
            Some(identifier) => identifier,
            None => return Ok(None),
        };

        if self.bank.find_client(&identifier).is_none() {
            writeln!(self.output, "\nClient {} was not found!", identifier)?;
            return Ok(None);
        }

        Ok(Some(identifier))
    }

    fn amount(&mut self, kind: Kind) -> io::Result<Option<Amount>> {
        let label = match kind {
            Kind::Deposit => "Deposit amount: ",
            Kind::Withdrawal => "Withdrawal amount: ",
        };
        let raw = match self.prompt(label)? {
            Some(raw) => raw,
            None => return Ok(None),
        };

        match Amount::from_str(&raw) {
            Ok(amount) => Ok(Some(amount)),
            Err(_) => {
                writeln!(self.output, "\nInvalid amount: {}.", raw)?;
                Ok(None)
            }
        }
    }

    /// Pick which of the client's accounts to use.
    ///
    /// `Some(None)` means the default account: clients with a single account,
    /// or none at all, are never asked. `None` means the teller gave up.
    fn account_choice(&mut self, client: &str) -> io::Result<Option<Option<AccountNumber>>> {
        let accounts = match self.bank.find_client(client) {
            Some(client) if client.accounts().len() > 1 => client.accounts().to_vec(),
            _ => return Ok(Some(None)),
        };

        let list = accounts
            .iter()
            .map(|number| number.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let label = format!("Account number ({}; blank for {}): ", list, accounts[0]);
        let raw = match self.prompt(&label)? {
            Some(raw) => raw,
            None => return Ok(None),
        };

        if raw.is_empty() {
            return Ok(Some(None));
        }
        match raw.parse::<AccountNumber>() {
            Ok(number) => Ok(Some(Some(number))),
            Err(_) => {
                writeln!(self.output, "\nInvalid account number: {}.", raw)?;
                Ok(None)
            }
        }
    }

    /// Print the label and read one trimmed line. `None` when the input is exhausted.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }
}
