use crate::{
    error_handler, input,
    ledger::{account::CheckingLimits, bank::LookupError, process},
    output,
};

use std::io;

/// Replay a CSV of operations with the default limits, and write the account
/// summary to `output`.
pub fn run(
    input: (impl io::Read + Send + 'static),
    output: impl io::Write,
) -> Result<(), io::Error> {
    run_with(input, output, CheckingLimits::default(), None)
}

/// Replay a CSV of operations.
///
/// With `statement_for`, the statement of that client's default account is
/// written instead of the account summary. An unknown client, or one without
/// an account, fails with [`io::ErrorKind::NotFound`] wrapping the
/// [`LookupError`].
pub fn run_with(
    input: (impl io::Read + Send + 'static),
    output: impl io::Write,
    limits: CheckingLimits,
    statement_for: Option<&str>,
) -> Result<(), io::Error> {
    let (operations, input_errors) = input::parse(input);
    let (operation_errors, processing) = process::process(operations, limits);
    let handles = error_handler::drain(input_errors, operation_errors);

    let bank = processing
        .join()
        .map_err(|_| io::Error::new(io::ErrorKind::Other, "operation processing panicked"))?;

    match statement_for {
        None => output::write_accounts(output, bank.accounts())?,
        Some(client) => {
            let statement = bank
                .statement(client, None)
                .map_err(|err: LookupError| io::Error::new(io::ErrorKind::NotFound, err))?;
            tracing::debug!(client, holder = statement.holder, "writing statement");
            output::write_statement(output, &statement)?
        }
    }

    for handle in handles {
        handle
            .join()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "error handler panicked"))?;
    }

    Ok(())
}
