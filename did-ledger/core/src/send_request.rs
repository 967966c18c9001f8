use crate::{ClientOptions, OperationKind};

/// A single create-or-update request to be forwarded to the ledger.  Created by the caller,
/// consumed by one `send` call, and discarded; it has no identity beyond the call itself and
/// is never persisted.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct SendRequest {
    /// Configuration the ledger client handle is resolved from.
    #[serde(default)]
    pub options: ClientOptions,
    /// The DID document to submit, passed through untouched.
    #[serde(rename = "didDocument")]
    pub did_document: serde_json::Value,
    /// Which operation to perform.  Defaults to create when omitted.
    #[serde(rename = "operationType", default)]
    pub operation_kind: OperationKind,
}

impl SendRequest {
    pub fn create(options: ClientOptions, did_document: serde_json::Value) -> Self {
        Self {
            options,
            did_document,
            operation_kind: OperationKind::Create,
        }
    }
    pub fn update(options: ClientOptions, did_document: serde_json::Value) -> Self {
        Self {
            options,
            did_document,
            operation_kind: OperationKind::Update,
        }
    }
}
