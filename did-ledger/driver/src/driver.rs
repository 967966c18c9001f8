use crate::Result;
use did_ledger_core::{ClientOptions, RegistrationInfo, SendOutcome, SendRequest};

/// The capability set a selected driver implementation exposes: forwarding create/update
/// operations to the ledger, and the status inquiry the send output refers the user to.
/// The two implementations are functionally equivalent; which one a process gets is decided
/// once, at first use, by the driver-selection gate.
#[async_trait::async_trait]
pub trait Driver: Send + Sync {
    /// Short name of this driver implementation, for diagnostics.
    fn name(&self) -> &'static str;
    /// Forward a single create-or-update operation to the ledger, reporting progress as
    /// human-readable lines.  A fault in the ledger call itself is captured in the returned
    /// outcome, not raised; an error here means the ledger client handle couldn't be resolved
    /// at all.
    async fn send(&self, request: SendRequest) -> Result<SendOutcome>;
    /// Query the ledger for where the registration of the given DID stands.
    async fn registration_info(
        &self,
        options: &ClientOptions,
        did: &str,
    ) -> Result<RegistrationInfo>;
}
