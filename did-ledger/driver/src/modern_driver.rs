use crate::{send::send_operation, ConsoleReporter, Driver, Reporter, Result};
use did_ledger_client::LedgerClientFactory;
use did_ledger_core::{ClientOptions, RegistrationInfo, SendOutcome, SendRequest};
use did_ledger_http_client::HttpLedgerClientFactory;
use std::sync::Arc;

/// Driver implementation targeting ledger nodes that speak the modern wire layout.  Apart from
/// the clients its factory resolves, it is interchangeable with LegacyDriver.
pub struct ModernDriver {
    ledger_client_factory_a: Arc<dyn LedgerClientFactory>,
    reporter_a: Arc<dyn Reporter>,
}

impl ModernDriver {
    pub fn new() -> Self {
        Self::with_collaborators(
            Arc::new(HttpLedgerClientFactory::modern()),
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

impl Default for ModernDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Driver for ModernDriver {
    fn name(&self) -> &'static str {
        "modern"
    }
    async fn send(&self, request: SendRequest) -> Result<SendOutcome> {
        let ledger_client_a = self
            .ledger_client_factory_a
            .ledger_client(&request.options)
            .await?;
        let outcome =
            send_operation(ledger_client_a.as_ref(), &request, self.reporter_a.as_ref()).await;
        tracing::debug!("ModernDriver; send outcome: {:?}", outcome);
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
