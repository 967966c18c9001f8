use crate::{HttpLedgerClient, WireLayout};
use did_ledger_client::{LedgerClient, LedgerClientFactory, Result};
use did_ledger_core::ClientOptions;
use std::sync::Arc;

/// Resolves HTTP ledger client handles for a fixed wire layout.  A fresh handle is constructed
/// per call; see the note on the shared reqwest client in this crate's root.
pub struct HttpLedgerClientFactory {
    wire_layout: WireLayout,
}

impl HttpLedgerClientFactory {
    pub fn new(wire_layout: WireLayout) -> Self {
        Self { wire_layout }
    }
    pub fn modern() -> Self {
        Self::new(WireLayout::Modern)
    }
    pub fn legacy() -> Self {
        Self::new(WireLayout::Legacy)
    }
}

#[async_trait::async_trait]
impl LedgerClientFactory for HttpLedgerClientFactory {
    async fn ledger_client(&self, options: &ClientOptions) -> Result<Arc<dyn LedgerClient>> {
        Ok(Arc::new(HttpLedgerClient::from_options(
            options,
            self.wire_layout,
        )))
    }
}
