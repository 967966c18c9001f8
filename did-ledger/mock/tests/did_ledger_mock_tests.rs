use did_ledger_client::{Error, LedgerClient};
use did_ledger_core::RegistrationStatus;
use did_ledger_mock::{MockLedger, MockLedgerClient};
use std::sync::{Arc, RwLock};

fn test_did_document(did: &str, version: u32) -> serde_json::Value {
    serde_json::json!({
        "id": did,
        "version": version,
        "authentication": [format!("{}#key-{}", did, version)],
    })
}

#[test]
fn test_mock_ledger_registration_lifecycle() {
    let did = "did:ledger:zAliceEjXivDidxAi2kETdFw1o36";
    let mut mock_ledger = MockLedger::default();

    assert_eq!(
        mock_ledger.registration_info(did).status,
        RegistrationStatus::NotFound
    );

    mock_ledger
        .register("Alice's MockLedgerClient", &test_did_document(did, 0))
        .expect("pass");
    // Accepted but not final until the consensus window has passed.
    assert_eq!(
        mock_ledger.registration_info(did).status,
        RegistrationStatus::Pending
    );

    mock_ledger.run_consensus();
    let registration_info = mock_ledger.registration_info(did);
    assert_eq!(registration_info.status, RegistrationStatus::Registered);
    assert_eq!(
        registration_info.did_document_o.expect("pass"),
        test_did_document(did, 0)
    );

    // An update re-enters the consensus window.
    mock_ledger
        .update("Alice's MockLedgerClient", &test_did_document(did, 1))
        .expect("pass");
    assert_eq!(
        mock_ledger.registration_info(did).status,
        RegistrationStatus::Pending
    );
    assert_eq!(
        mock_ledger.registration_o(did).expect("pass").did_document_v.len(),
        2
    );

    mock_ledger.run_consensus();
    assert_eq!(
        mock_ledger.registration_info(did).did_document_o.expect("pass"),
        test_did_document(did, 1)
    );
}

#[test]
fn test_mock_ledger_faults() {
    let did = "did:ledger:zBobEjXivDidxAi2kETdFw1o36";
    let mut mock_ledger = MockLedger::default();

    mock_ledger
        .register("Bob's MockLedgerClient", &test_did_document(did, 0))
        .expect("pass");
    let error = mock_ledger
        .register("Bob's MockLedgerClient", &test_did_document(did, 0))
        .expect_err("pass");
    assert!(matches!(error, Error::AlreadyExists(_)));

    let error = mock_ledger
        .update(
            "Bob's MockLedgerClient",
            &test_did_document("did:ledger:zUnknown", 1),
        )
        .expect_err("pass");
    assert!(matches!(error, Error::NotFound(_)));

    let error = mock_ledger
        .register("Bob's MockLedgerClient", &serde_json::json!({"no": "id"}))
        .expect_err("pass");
    assert!(matches!(error, Error::CoreError(_)));
}

#[test]
fn test_mock_ledger_fail_next_operation_fires_once() {
    let did = "did:ledger:zCarolEjXivDidxAi2kETdFw1o36";
    let mut mock_ledger = MockLedger::default();

    mock_ledger.fail_next_operation("boom");
    let error = mock_ledger
        .register("Carol's MockLedgerClient", &test_did_document(did, 0))
        .expect_err("pass");
    assert!(error.to_string().contains("boom"));
    // The injected fault fired before the registry was touched, and is consumed.
    assert_eq!(
        mock_ledger.registration_info(did).status,
        RegistrationStatus::NotFound
    );
    mock_ledger
        .register("Carol's MockLedgerClient", &test_did_document(did, 0))
        .expect("pass");
}

#[tokio::test]
async fn test_mock_ledger_client_records_calls() {
    let did = "did:ledger:zDaveEjXivDidxAi2kETdFw1o36";
    let mock_ledger_la = Arc::new(RwLock::new(MockLedger::default()));
    let mock_ledger_client =
        MockLedgerClient::new("Dave's MockLedgerClient".to_string(), mock_ledger_la.clone());

    mock_ledger_client
        .register(&test_did_document(did, 0))
        .await
        .expect("pass");
    mock_ledger_client
        .update(&test_did_document(did, 1))
        .await
        .expect("pass");

    assert_eq!(
        mock_ledger_client.register_call_v(),
        vec![test_did_document(did, 0)]
    );
    assert_eq!(
        mock_ledger_client.update_call_v(),
        vec![test_did_document(did, 1)]
    );

    // Faulted calls are still recorded as invocations.
    mock_ledger_la.write().unwrap().fail_next_operation("boom");
    assert!(mock_ledger_client
        .update(&test_did_document(did, 2))
        .await
        .is_err());
    assert_eq!(mock_ledger_client.update_call_v().len(), 2);

    let registration_info = mock_ledger_client
        .registration_info(did)
        .await
        .expect("pass");
    assert_eq!(registration_info.status, RegistrationStatus::Pending);
}
