use crate::{LedgerClient, Result};
use did_ledger_core::ClientOptions;
use std::sync::Arc;

/// This bit of indirection exists because a ledger client handle is resolved from the
/// caller-supplied options at the point of use, once per operation.  Handles are assumed cheap
/// to (re)acquire, so implementations need not cache them; anything genuinely expensive to
/// construct (e.g. the underlying HTTP client) should be shared process-wide by the
/// implementation instead.
#[async_trait::async_trait]
pub trait LedgerClientFactory: Send + Sync {
    async fn ledger_client(&self, options: &ClientOptions) -> Result<Arc<dyn LedgerClient>>;
}
