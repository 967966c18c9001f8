use did_ledger_core::{did_of, ClientOptions, OperationKind, SendOutcome, SendRequest};
use std::str::FromStr;

#[test]
fn test_operation_kind_round_trip() {
    for operation_kind in OperationKind::VARIANTS {
        let parsed = OperationKind::from_str(operation_kind.as_str()).expect("pass");
        assert_eq!(parsed, operation_kind);
        let json = serde_json::to_string(&operation_kind).expect("pass");
        assert_eq!(json, format!("\"{}\"", operation_kind));
        let deserialized: OperationKind = serde_json::from_str(json.as_str()).expect("pass");
        assert_eq!(deserialized, operation_kind);
    }
}

#[test]
fn test_unrecognized_operation_kinds_are_rejected_at_construction() {
    // Case-variant and misspelled kinds must fail loudly instead of silently doing nothing.
    for unrecognized in ["CREATE", "Update", "delete", "creat", ""] {
        assert!(OperationKind::from_str(unrecognized).is_err());
    }
    assert!(serde_json::from_str::<OperationKind>("\"delete\"").is_err());
    assert!(serde_json::from_str::<SendRequest>(
        r#"{"didDocument": {"id": "did:ledger:zTest"}, "operationType": "remove"}"#
    )
    .is_err());
}

#[test]
fn test_send_request_operation_kind_defaults_to_create() {
    let send_request: SendRequest =
        serde_json::from_str(r#"{"didDocument": {"id": "did:ledger:zTest"}}"#).expect("pass");
    assert_eq!(send_request.operation_kind, OperationKind::Create);
    assert_eq!(send_request.options, ClientOptions::default());

    let explicit: SendRequest = serde_json::from_str(
        r#"{"didDocument": {"id": "did:ledger:zTest"}, "operationType": "create"}"#,
    )
    .expect("pass");
    assert_eq!(explicit.operation_kind, send_request.operation_kind);
}

#[test]
fn test_send_request_deserializes_options() {
    let send_request: SendRequest = serde_json::from_str(
        r#"{
            "options": {"ledger": "https://ledger.example.com:8086", "quiet": true},
            "didDocument": {"id": "did:ledger:zTest"},
            "operationType": "update"
        }"#,
    )
    .expect("pass");
    assert_eq!(send_request.operation_kind, OperationKind::Update);
    assert!(send_request.options.quiet);
    assert_eq!(
        send_request.options.ledger_base_url.as_str(),
        "https://ledger.example.com:8086/"
    );
    assert!(send_request.options.user_agent_o.is_none());
}

#[test]
fn test_send_outcome_accessors() {
    let submitted = SendOutcome::Submitted {
        operation_kind: OperationKind::Create,
    };
    assert!(submitted.is_submitted());
    assert!(submitted.failure_reason_o().is_none());
    assert_eq!(submitted.operation_kind(), OperationKind::Create);

    let failed = SendOutcome::Failed {
        operation_kind: OperationKind::Update,
        reason: "boom".to_string(),
    };
    assert!(!failed.is_submitted());
    assert_eq!(failed.failure_reason_o(), Some("boom"));
    assert_eq!(failed.operation_kind(), OperationKind::Update);
}

#[test]
fn test_did_of() {
    let did_document = serde_json::json!({
        "id": "did:ledger:zEjXivDidxAi2kETdFw1o36",
        "authentication": [],
    });
    assert_eq!(
        did_of(&did_document).expect("pass"),
        "did:ledger:zEjXivDidxAi2kETdFw1o36"
    );

    assert!(did_of(&serde_json::json!({"authentication": []})).is_err());
    assert!(did_of(&serde_json::json!({"id": 42})).is_err());
}
