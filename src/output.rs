use crate::ledger::{
    account::Account, history::TIMESTAMP_FORMAT, statement::Statement, AccountNumber, Amount,
};

use serde::Serialize;

#[derive(Serialize)]
struct AccountRecord<'a> {
    agency: &'a str,

    #[serde(rename = "account")]
    number: AccountNumber,

    #[serde(rename = "client")]
    client_id: &'a str,

    balance: Amount,

    #[serde(rename = "transactions")]
    transaction_count: usize,
}

impl<'a> AccountRecord<'a> {
    fn new(acc: &'a Account) -> Self {
        Self {
            agency: acc.agency(),
            number: acc.number(),
            client_id: acc.client_id(),
            balance: acc.balance(),
            transaction_count: acc.history().len(),
        }
    }
}

#[derive(Serialize)]
struct StatementRecord {
    #[serde(rename = "type")]
    kind: String,

    amount: Amount,

    #[serde(rename = "date")]
    timestamp: String,
}

// Writes the accounts to the given stream, in the order given.
pub fn write_accounts<'a>(
    output_stream: impl std::io::Write,
    accounts: impl IntoIterator<Item = &'a Account>,
) -> Result<(), std::io::Error> {
    let mut writer = csv::Writer::from_writer(output_stream);

    for account in accounts {
        writer.serialize(AccountRecord::new(account))?;
    }

    writer.flush()
}

// Writes the statement entries, oldest first. The balance is the sum of the
// entries, so it isn't repeated here.
pub fn write_statement(
    output_stream: impl std::io::Write,
    statement: &Statement,
) -> Result<(), std::io::Error> {
    let mut writer = csv::Writer::from_writer(output_stream);

    for entry in statement.entries {
        writer.serialize(StatementRecord {
            kind: entry.kind.to_string().to_lowercase(),
            amount: entry.amount,
            timestamp: entry.timestamp.format(TIMESTAMP_FORMAT).to_string(),
        })?;
    }

    writer.flush()
}

#[cfg(test)]
mod write_tests {
    use crate::ledger::{account::Account, statement::Statement, transaction::Transaction};

    use rust_decimal_macros::dec;

    #[test]
    fn test_write_accounts() {
        let mut accounts = Vec::new();
        let mut output_stream = Vec::new();
        for (client_id, number, deposits) in vec![
            ("111", 1, vec![dec!(5.0)]),
            ("222", 2, vec![dec!(1.23), dec!(123.4)]),
            ("111", 3, vec![]),
        ] {
            let mut account = Account::checking(client_id.to_string(), number);
            for amount in deposits {
                Transaction::deposit(amount).apply(&mut account).unwrap();
            }
            accounts.push(account);
        }

        super::write_accounts(&mut output_stream, &accounts).unwrap();

        let want = r#"agency,account,client,balance,transactions
0001,1,111,5.0,1
0001,2,222,124.63,2
0001,3,111,0,0
"#;
        assert_eq!(want.to_string(), String::from_utf8(output_stream).unwrap());
    }

    #[test]
    fn test_write_statement() {
        let mut account = Account::checking("111".to_string(), 1);
        Transaction::deposit(dec!(100)).apply(&mut account).unwrap();
        Transaction::withdrawal(dec!(30)).apply(&mut account).unwrap();
        let mut output_stream = Vec::new();

        super::write_statement(&mut output_stream, &Statement::new(&account, "Ada")).unwrap();

        let got = String::from_utf8(output_stream).unwrap();
        let lines: Vec<&str> = got.lines().collect();
        assert_eq!(3, lines.len());
        assert_eq!("type,amount,date", lines[0]);
        assert!(lines[1].starts_with("deposit,100,"), "{}", lines[1]);
        assert!(lines[2].starts_with("withdrawal,30,"), "{}", lines[2]);
    }
}
