use crate::MockLedger;
use did_ledger_client::{LedgerClient, Result};
use did_ledger_core::RegistrationInfo;
use std::sync::{Arc, Mutex, RwLock};

/// Mock (i.e. ephemeral, intra-process) implementation of LedgerClient.  Records every
/// register/update invocation, including faulted ones, so tests can assert exactly-once
/// delivery of operations.
pub struct MockLedgerClient {
    pub user_agent: String,
    mock_ledger_la: Arc<RwLock<MockLedger>>,
    register_call_vl: Mutex<Vec<serde_json::Value>>,
    update_call_vl: Mutex<Vec<serde_json::Value>>,
}

impl MockLedgerClient {
    pub fn new(user_agent: String, mock_ledger_la: Arc<RwLock<MockLedger>>) -> Self {
        Self {
            user_agent,
            mock_ledger_la,
            register_call_vl: Mutex::new(Vec::new()),
            update_call_vl: Mutex::new(Vec::new()),
        }
    }
    pub fn register_call_v(&self) -> Vec<serde_json::Value> {
        self.register_call_vl.lock().unwrap().clone()
    }
    pub fn update_call_v(&self) -> Vec<serde_json::Value> {
        self.update_call_vl.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl LedgerClient for MockLedgerClient {
    async fn register(&self, did_document: &serde_json::Value) -> Result<()> {
        self.register_call_vl
            .lock()
            .unwrap()
            .push(did_document.clone());
        let mut mock_ledger_g = self.mock_ledger_la.write().unwrap();
        mock_ledger_g.register(self.user_agent.as_str(), did_document)
    }
    async fn update(&self, did_document: &serde_json::Value) -> Result<()> {
        self.update_call_vl
            .lock()
            .unwrap()
            .push(did_document.clone());
        let mut mock_ledger_g = self.mock_ledger_la.write().unwrap();
        mock_ledger_g.update(self.user_agent.as_str(), did_document)
    }
    async fn registration_info(&self, did: &str) -> Result<RegistrationInfo> {
        let mock_ledger_g = self.mock_ledger_la.read().unwrap();
        Ok(mock_ledger_g.registration_info(did))
    }
}
