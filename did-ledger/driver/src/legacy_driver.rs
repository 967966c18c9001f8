use crate::{send::send_operation, ConsoleReporter, Driver, Reporter, Result};
use did_ledger_client::LedgerClientFactory;
use did_ledger_core::{ClientOptions, RegistrationInfo, SendOutcome, SendRequest};
use did_ledger_http_client::HttpLedgerClientFactory;
use std::sync::Arc;

/// Driver implementation for ledger nodes that predate the modern wire layout.  Functionally
/// equivalent to ModernDriver; only the wire layout its factory resolves clients for differs.
pub struct LegacyDriver {
    ledger_client_factory_a: Arc<dyn LedgerClientFactory>,
    reporter_a: Arc<dyn Reporter>,
}

impl LegacyDriver {
    pub fn new() -> Self {
        Self::with_collaborators(
            Arc::new(HttpLedgerClientFactory::legacy()),
            Arc::new(ConsoleReporter),
        )
    }
    pub fn with_collaborators(
        ledger_client_factory_a: Arc<dyn LedgerClientFactory>,
        reporter_a: Arc<dyn Reporter>,
    ) -> Self {
        Self {
            ledger_client_factory_a,
            reporter_a,
        }
    }
}

impl Default for LegacyDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Driver for LegacyDriver {
    fn name(&self) -> &'static str {
        "legacy"
    }
    async fn send(&self, request: SendRequest) -> Result<SendOutcome> {
        let ledger_client_a = self
            .ledger_client_factory_a
            .ledger_client(&request.options)
            .await?;
        let outcome =
            send_operation(ledger_client_a.as_ref(), &request, self.reporter_a.as_ref()).await;
        tracing::debug!("LegacyDriver; send outcome: {:?}", outcome);
        Ok(outcome)
    }
    async fn registration_info(
        &self,
        options: &ClientOptions,
        did: &str,
    ) -> Result<RegistrationInfo> {
        let ledger_client_a = self.ledger_client_factory_a.ledger_client(options).await?;
        ledger_client_a.registration_info(did).await
    }
}
