use crate::Result;
use did_ledger_core::RegistrationInfo;

/// This trait represents the client side of the interaction with the ledger.  The DID document
/// values are passed through opaquely; validation, proof handling, and consensus are entirely
/// the ledger's business.
#[async_trait::async_trait]
pub trait LedgerClient: Send + Sync {
    /// Submit the given DID document to the ledger to register a new DID.
    async fn register(&self, did_document: &serde_json::Value) -> Result<()>;
    /// Submit the given DID document to the ledger to update an already-registered DID.
    async fn update(&self, did_document: &serde_json::Value) -> Result<()>;
    /// Query the ledger for where the registration of the given DID stands.  Note that an
    /// accepted operation remains pending until the ledger's consensus window has passed.
    async fn registration_info(&self, did: &str) -> Result<RegistrationInfo>;
}
