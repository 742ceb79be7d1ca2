use crate::ledger::{process::Operation, transaction::Transaction, ClientId};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::sync::mpsc::{self, Receiver, Sender};

pub const BIRTHDATE_FORMAT: &str = "%d-%m-%Y";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// CSV is malformed
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    /// Data format is incorrect
    #[error("invalid record: {0}")]
    Format(#[from] RecordError),
}

/// A well-formed row that doesn't carry what its operation needs.
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum RecordError {
    #[error("missing client")]
    MissingClient,
    #[error("missing {field} for {operation}")]
    MissingField {
        field: &'static str,
        operation: &'static str,
    },
    #[error("invalid birthdate for client")]
    InvalidBirthdate,
}

fn missing(field: &'static str, operation: &'static str) -> RecordError {
    RecordError::MissingField { field, operation }
}

// Bad rows don't abort the replay: they are reported on the error channel,
// and the remaining rows are still applied.
pub fn parse(
    input_stream: (impl std::io::Read + Send + 'static),
) -> (Receiver<Operation>, Receiver<Error>) {
    let (operation_tx, operation_rx): (Sender<Operation>, Receiver<Operation>) =
        mpsc::channel();
    let (error_tx, error_rx): (Sender<Error>, Receiver<Error>) = mpsc::channel();

    let buffered = std::io::BufReader::new(input_stream);
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(buffered);

    // Moving to a new thread so we can start processing the operations immediately.
    std::thread::spawn(move || {
        for record in reader.deserialize::<OperationRecord>() {
            let sent = match convert(record) {
                Ok(operation) => operation_tx.send(operation).is_ok(),
                Err(err) => error_tx.send(err).is_ok(),
            };
            // The receiving side hung up, nobody wants the rest.
            if !sent {
                break;
            }
        }
    });

    (operation_rx, error_rx)
}

// Convert from a csv deserialise result into an operation result.
fn convert(record: Result<OperationRecord, csv::Error>) -> Result<Operation, Error> {
    Ok(record?.try_into()?)
}

// OperationRecord mirrors a CSV row. The csv crate can't deserialise straight
// into an enum with fields (see https://github.com/BurntSushi/rust-csv/issues/211),
// so rows land here first and are then checked and converted into Operation.
#[derive(Debug, Deserialize)]
pub struct OperationRecord {
    #[serde(rename = "type")]
    op_type: OperationRecordType,

    #[serde(rename = "client")]
    client_id: ClientId,

    amount: Option<Decimal>,
    name: Option<String>,
    birthdate: Option<String>,
    address: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationRecordType {
    Client,
    Account,
    Deposit,
    Withdrawal,
}

impl TryFrom<OperationRecord> for Operation {
    type Error = RecordError;
    fn try_from(record: OperationRecord) -> Result<Self, Self::Error> {
        let client = record.client_id;
        if client.is_empty() {
            return Err(RecordError::MissingClient);
        }

        Ok(match record.op_type {
            OperationRecordType::Client => {
                let name = record.name.ok_or_else(|| missing("name", "client"))?;
                let birthdate = record
                    .birthdate
                    .ok_or_else(|| missing("birthdate", "client"))?;
                Operation::NewClient {
                    identifier: client,
                    name,
                    birthdate: NaiveDate::parse_from_str(&birthdate, BIRTHDATE_FORMAT)
                        .map_err(|_| RecordError::InvalidBirthdate)?,
                    address: record.address.unwrap_or_default(),
                }
            }
            OperationRecordType::Account => Operation::OpenAccount { client },
            OperationRecordType::Deposit => Operation::Execute {
                client,
                transaction: Transaction::deposit(
                    record.amount.ok_or_else(|| missing("amount", "deposit"))?,
                ),
            },
            OperationRecordType::Withdrawal => Operation::Execute {
                client,
                transaction: Transaction::withdrawal(
                    record
                        .amount
                        .ok_or_else(|| missing("amount", "withdrawal"))?,
                ),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{parse, Error, Operation, OperationRecord, OperationRecordType, RecordError};
    use crate::ledger::transaction::Transaction;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    const HEADER: &str = "type,client,amount,name,birthdate,address";

    #[test]
    // Parsing well-formed data should stream every operation.
    fn test_parse_ok() {
        let data = format!(
            "{}\n{}",
            HEADER,
            r#"client,111,,Ada Lovelace,10-12-1815,"12 St James's Square, London"
account,111,,,,
deposit,111,200,,,
withdrawal,111,50.5,,,"#
        );
        let reader = std::io::Cursor::new(data);
        let (operations, errors) = parse(reader);

        let got: Vec<Operation> = operations.iter().collect();
        assert_eq!(
            vec![
                Operation::NewClient {
                    identifier: "111".to_string(),
                    name: "Ada Lovelace".to_string(),
                    birthdate: NaiveDate::from_ymd_opt(1815, 12, 10).unwrap(),
                    address: "12 St James's Square, London".to_string(),
                },
                Operation::OpenAccount {
                    client: "111".to_string()
                },
                Operation::Execute {
                    client: "111".to_string(),
                    transaction: Transaction::deposit(dec!(200)),
                },
                Operation::Execute {
                    client: "111".to_string(),
                    transaction: Transaction::withdrawal(dec!(50.5)),
                },
            ],
            got
        );
        assert_eq!(0, errors.iter().count());
    }

    #[test]
    fn test_parse_ok_with_whitespace() {
        let data = format!(
            "{}\n{}",
            "type,  client,   amount, name, birthdate, address",
            r#"account ,  111 , , , ,
    deposit,111,   1.0 ,,,
        withdrawal                  ,111,1,,,"#
        );
        let reader = std::io::Cursor::new(data);
        let (operations, errors) = parse(reader);

        assert_eq!(3, operations.iter().count());
        assert_eq!(0, errors.iter().count());
    }

    #[test]
    // Malformed CSV is reported, row by row.
    fn test_parse_invalid_format() {
        for (data, err_contains) in vec![
            ("transfer,111,1.0,,,", "unknown variant `transfer`"),
            ("deposit,111,1.0", "found record with 3 fields"),
        ] {
            let reader = std::io::Cursor::new(format!("{}\n{}", HEADER, data));
            let (operations, errors) = parse(reader);

            assert_eq!(0, operations.iter().count());

            let errs: Vec<Error> = errors.iter().collect();
            assert_eq!(1, errs.len());

            match &errs[0] {
                Error::Csv(err) => {
                    let msg = err.to_string();
                    assert!(msg.contains(err_contains), "{:?}", msg)
                }
                _ => panic!("unexpected error"),
            }
        }
    }

    #[test]
    // Rows that are valid CSV but lack what their operation needs fail to convert.
    fn test_parse_invalid_data() {
        for (data, want_err, want_msg) in vec![
            (
                "deposit,111,,,,",
                super::missing("amount", "deposit"),
                "missing amount for deposit",
            ),
            (
                "withdrawal,111,,,,",
                super::missing("amount", "withdrawal"),
                "missing amount for withdrawal",
            ),
            ("account,,,,,", RecordError::MissingClient, "missing client"),
            (
                "client,111,,,01-01-2000,",
                super::missing("name", "client"),
                "missing name for client",
            ),
            (
                "client,111,,Ada,,",
                super::missing("birthdate", "client"),
                "missing birthdate for client",
            ),
            (
                "client,111,,Ada,2000-01-01,",
                RecordError::InvalidBirthdate,
                "invalid birthdate for client",
            ),
        ] {
            let reader = std::io::Cursor::new(format!("{}\n{}", HEADER, data));
            let (operations, errors) = parse(reader);

            assert_eq!(0, operations.iter().count());

            let errs: Vec<Error> = errors.iter().collect();
            assert_eq!(1, errs.len());
            assert_eq!(format!("invalid record: {}", want_msg), errs[0].to_string());
            match &errs[0] {
                Error::Format(err) => assert_eq!(&want_err, err),
                _ => panic!("unexpected error"),
            }
        }
    }

    #[test]
    // One bad row doesn't prevent the following rows from being parsed.
    fn test_parse_continues_after_error() {
        let data = format!(
            "{}\n{}",
            HEADER,
            r#"deposit,111,,,,
deposit,111,5,,,"#
        );
        let (operations, errors) = parse(std::io::Cursor::new(data));

        assert_eq!(1, operations.iter().count());
        assert_eq!(1, errors.iter().count());
    }

    #[test]
    fn test_operation_record_into_operation() {
        let record = OperationRecord {
            op_type: OperationRecordType::Withdrawal,
            client_id: "42".to_string(),
            amount: Some(dec!(12.345)),
            name: None,
            birthdate: None,
            address: None,
        };

        // Amounts are rounded when the transaction is built.
        assert_eq!(
            Ok(Operation::Execute {
                client: "42".to_string(),
                transaction: Transaction::withdrawal(dec!(12.34)),
            }),
            Operation::try_from(record)
        );
    }
}
