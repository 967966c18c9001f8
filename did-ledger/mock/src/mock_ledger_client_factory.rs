use crate::MockLedgerClient;
use did_ledger_client::{LedgerClient, LedgerClientFactory, Result};
use did_ledger_core::ClientOptions;
use std::sync::Arc;

/// Hands out the one shared MockLedgerClient regardless of the options' endpoint, so a test can
/// inspect the calls that went through the driver.
pub struct MockLedgerClientFactory {
    mock_ledger_client_a: Arc<MockLedgerClient>,
}

impl MockLedgerClientFactory {
    pub fn new(mock_ledger_client_a: Arc<MockLedgerClient>) -> Self {
        Self {
            mock_ledger_client_a,
        }
    }
}

#[async_trait::async_trait]
impl LedgerClientFactory for MockLedgerClientFactory {
    async fn ledger_client(&self, _options: &ClientOptions) -> Result<Arc<dyn LedgerClient>> {
        Ok(self.mock_ledger_client_a.clone())
    }
}
