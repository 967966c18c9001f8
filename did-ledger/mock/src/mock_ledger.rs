use did_ledger_client::{Error, Result};
use did_ledger_core::{did_of, RegistrationInfo, RegistrationStatus};
use std::collections::HashMap;

/// One DID's history on the mock ledger.
#[derive(Clone, Debug)]
pub struct MockRegistration {
    /// Every DID document accepted for this DID, in submission order.
    pub did_document_v: Vec<serde_json::Value>,
    pub status: RegistrationStatus,
}

// Mock ledger -- purely in-memory, intra-process.  Accepted operations sit in Pending until
// run_consensus is called, which stands in for the real ledger's 15-30 second consensus window.
#[derive(Debug)]
pub struct MockLedger {
    registration_m: HashMap<String, MockRegistration>,
    /// Optional simulated network latency duration.  If present, then all ledger operations will
    /// sleep for this duration before beginning their work.
    simulated_latency_o: Option<std::time::Duration>,
    fail_next_operation_o: Option<String>,
}

impl MockLedger {
    pub fn new(simulated_latency_o: Option<std::time::Duration>) -> Self {
        Self {
            registration_m: HashMap::new(),
            simulated_latency_o,
            fail_next_operation_o: None,
        }
    }
    /// Arrange for the next register or update call to fault with the given reason, the way a
    /// real ledger node might reject an operation.
    pub fn fail_next_operation(&mut self, reason: &str) {
        self.fail_next_operation_o = Some(reason.to_string());
    }
    pub fn register(&mut self, user_agent: &str, did_document: &serde_json::Value) -> Result<()> {
        println!(
            "Ledger servicing CREATE DID request from {:?}",
            user_agent
        );
        self.simulate_latency_if_necessary();
        self.take_injected_fault()?;

        let did = did_of(did_document)?;
        if self.registration_m.contains_key(did) {
            return Err(Error::AlreadyExists(
                format!("DID already exists: {}", did).into(),
            ));
        }
        self.registration_m.insert(
            did.to_string(),
            MockRegistration {
                did_document_v: vec![did_document.clone()],
                status: RegistrationStatus::Pending,
            },
        );
        Ok(())
    }
    pub fn update(&mut self, user_agent: &str, did_document: &serde_json::Value) -> Result<()> {
        println!(
            "Ledger servicing UPDATE DID request from {:?}",
            user_agent
        );
        self.simulate_latency_if_necessary();
        self.take_injected_fault()?;

        let did = did_of(did_document)?;
        let registration = self
            .registration_m
            .get_mut(did)
            .ok_or_else(|| Error::NotFound(format!("DID not found: {}", did).into()))?;
        registration.did_document_v.push(did_document.clone());
        // The update sits in the consensus window just like a create does.
        registration.status = RegistrationStatus::Pending;
        Ok(())
    }
    pub fn registration_info(&self, did: &str) -> RegistrationInfo {
        match self.registration_m.get(did) {
            Some(registration) => RegistrationInfo {
                did: did.to_string(),
                status: registration.status,
                did_document_o: registration.did_document_v.last().cloned(),
            },
            None => RegistrationInfo {
                did: did.to_string(),
                status: RegistrationStatus::NotFound,
                did_document_o: None,
            },
        }
    }
    /// Complete the consensus window: every pending registration becomes registered.
    pub fn run_consensus(&mut self) {
        for registration in self.registration_m.values_mut() {
            if registration.status == RegistrationStatus::Pending {
                registration.status = RegistrationStatus::Registered;
            }
        }
    }
    pub fn registration_o(&self, did: &str) -> Option<&MockRegistration> {
        self.registration_m.get(did)
    }
    fn take_injected_fault(&mut self) -> Result<()> {
        if let Some(reason) = self.fail_next_operation_o.take() {
            return Err(Error::OperationFault(reason.into()));
        }
        Ok(())
    }
    fn simulate_latency_if_necessary(&self) {
        if let Some(simulated_latency) = self.simulated_latency_o.as_ref() {
            std::thread::sleep(*simulated_latency);
        }
    }
}

impl Default for MockLedger {
    fn default() -> Self {
        Self::new(None)
    }
}
