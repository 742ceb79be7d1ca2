use crate::{input::Error, ledger::bank::OperationError};

use std::sync::mpsc::Receiver;

// Rejected rows and refused operations don't stop a replay: they are logged,
// and processing carries on with the next operation.
//
// Both channels are drained on their own thread so that neither producer
// blocks on the other.
pub fn drain(
    input_errors: Receiver<Error>,
    operation_errors: Receiver<OperationError>,
) -> Vec<std::thread::JoinHandle<()>> {
    vec![
        std::thread::spawn(move || {
            for err in input_errors {
                tracing::warn!(error = %err, "failed to read record");
            }
        }),
        std::thread::spawn(move || {
            for err in operation_errors {
                tracing::warn!(error = %err, "operation refused");
            }
        }),
    ]
}
