use crate::{Error, Result};

/// Extract the DID a document pertains to from its `"id"` member.  DID documents are otherwise
/// passed through this crate opaquely; the `"id"` member is the only part any component reads,
/// and only where a ledger endpoint or registry key needs the DID itself.
pub fn did_of(did_document: &serde_json::Value) -> Result<&str> {
    did_document
        .get("id")
        .and_then(|id| id.as_str())
        .ok_or(Error::Malformed("DID document has no \"id\" member"))
}
