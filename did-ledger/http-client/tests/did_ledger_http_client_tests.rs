use did_ledger_core::ClientOptions;
use did_ledger_http_client::{HttpLedgerClient, WireLayout};

fn test_client_options() -> ClientOptions {
    ClientOptions {
        ledger_base_url: url::Url::parse("http://localhost:8085").expect("pass"),
        quiet: false,
        user_agent_o: None,
    }
}

#[test]
fn test_modern_wire_layout_urls() {
    let client = HttpLedgerClient::from_options(&test_client_options(), WireLayout::Modern);
    assert_eq!(
        client.operations_url().expect("pass").as_str(),
        "http://localhost:8085/operations"
    );
    assert_eq!(
        client.info_url("did:ledger:zEjXiv").expect("pass").as_str(),
        "http://localhost:8085/operations/status/did:ledger:zEjXiv"
    );
}

#[test]
fn test_legacy_wire_layout_urls() {
    let client = HttpLedgerClient::from_options(&test_client_options(), WireLayout::Legacy);
    assert_eq!(
        client.did_url("did:ledger:zEjXiv").expect("pass").as_str(),
        "http://localhost:8085/dids/did:ledger:zEjXiv"
    );
    assert_eq!(
        client.info_url("did:ledger:zEjXiv").expect("pass"),
        client.did_url("did:ledger:zEjXiv").expect("pass")
    );
}

#[test]
fn test_urls_survive_base_url_with_trailing_slash_and_path() {
    let client_options = ClientOptions {
        ledger_base_url: url::Url::parse("https://ledger.example.com/api/v1/").expect("pass"),
        quiet: false,
        user_agent_o: None,
    };
    let client = HttpLedgerClient::from_options(&client_options, WireLayout::Modern);
    assert_eq!(
        client.operations_url().expect("pass").as_str(),
        "https://ledger.example.com/api/v1/operations"
    );
}

#[tokio::test]
async fn test_legacy_update_requires_did_document_id() {
    use did_ledger_client::LedgerClient;
    let client = HttpLedgerClient::from_options(&test_client_options(), WireLayout::Legacy);
    // No "id" member means the update can't even be addressed; this fails before any request
    // is made.
    let error = client
        .update(&serde_json::json!({"authentication": []}))
        .await
        .expect_err("pass");
    assert!(matches!(error, did_ledger_client::Error::Malformed(_)));
}
