use crate::{ClientOptionsArgs, DIDDocumentArgs, Result};
use did_ledger_core::{OperationKind, SendRequest};

/// Send a DID create or update operation to the ledger.  The DID document is passed through to
/// the ledger client untouched.  Note that the ledger takes roughly 15-30 seconds to reach
/// consensus on an accepted operation; use the `info` command to monitor the registration.
#[derive(clap::Parser)]
pub struct Send {
    /// Which operation to perform for the given DID document.
    #[arg(
        name = "operation-type",
        long,
        value_enum,
        default_value_t = OperationKind::Create
    )]
    pub operation_type: OperationKind,
    #[command(flatten)]
    pub client_options_args: ClientOptionsArgs,
    #[command(flatten)]
    pub did_document_args: DIDDocumentArgs,
}

impl Send {
    pub async fn handle(self) -> Result<()> {
        let did_document = self.did_document_args.read_did_document()?;
        let request = SendRequest {
            options: self.client_options_args.client_options(),
            did_document,
            operation_kind: self.operation_type,
        };
        // A faulted ledger call is reported in the printed output and in the outcome; it is
        // deliberately not an error exit.
        let outcome = did_ledger_driver::driver().send(request).await?;
        tracing::debug!("send outcome: {:?}", outcome);
        Ok(())
    }
}
