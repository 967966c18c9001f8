use crate::Reporter;
use did_ledger_client::LedgerClient;
use did_ledger_core::{OperationKind, SendOutcome, SendRequest};

/// The operation forwarder shared by both driver implementations.  One linear pass: dispatch on
/// the operation kind, invoke the corresponding ledger call, and report progress around it.  A
/// fault in the ledger call is printed and captured in the outcome; it does not interrupt the
/// pass, and the trailing advisory lines are emitted no matter what happened above them.
pub(crate) async fn send_operation(
    ledger_client: &dyn LedgerClient,
    request: &SendRequest,
    reporter: &dyn Reporter,
) -> SendOutcome {
    let outcome = match request.operation_kind {
        OperationKind::Create => {
            reporter.report(
                &request.options,
                "Preparing to register a DID on the ledger...",
            );
            match ledger_client.register(&request.did_document).await {
                Ok(()) => {
                    reporter.report(&request.options, "DID registration sent to ledger.");
                    SendOutcome::Submitted {
                        operation_kind: OperationKind::Create,
                    }
                }
                Err(e) => {
                    reporter.report_error(format!("An error occurred: {}", e).as_str());
                    SendOutcome::Failed {
                        operation_kind: OperationKind::Create,
                        reason: e.to_string(),
                    }
                }
            }
        }
        OperationKind::Update => {
            reporter.report(
                &request.options,
                "Preparing to update a DID Document on the ledger...",
            );
            match ledger_client.update(&request.did_document).await {
                Ok(()) => {
                    reporter.report(&request.options, "DID update sent to ledger.");
                    SendOutcome::Submitted {
                        operation_kind: OperationKind::Update,
                    }
                }
                Err(e) => {
                    reporter.report_error(format!("An error occurred: {}", e).as_str());
                    SendOutcome::Failed {
                        operation_kind: OperationKind::Update,
                        reason: e.to_string(),
                    }
                }
            }
        }
    };
    reporter.report(
        &request.options,
        "Please wait ~15-30 seconds for ledger consensus.",
    );
    reporter.report(
        &request.options,
        "You may use the `info` command to monitor the registration of your DID.",
    );
    outcome
}
