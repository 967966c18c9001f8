/// Where a DID's registration stands from the ledger's point of view.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    /// An operation for this DID has been accepted but consensus hasn't completed yet.
    Pending,
    /// The latest operation for this DID has reached consensus.
    Registered,
    /// The ledger has no record of this DID.
    NotFound,
}

impl std::fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Registered => write!(f, "registered"),
            Self::NotFound => write!(f, "notfound"),
        }
    }
}

/// Result of the `info` inquiry for a DID.  This is the status-polling counterpart to the send
/// operation; the advisory output of a send refers the user here.
#[derive(Clone, Debug, serde::Deserialize, PartialEq, serde::Serialize)]
pub struct RegistrationInfo {
    pub did: String,
    pub status: RegistrationStatus,
    /// The latest DID document the ledger holds for this DID, if any.
    #[serde(rename = "didDocument", default, skip_serializing_if = "Option::is_none")]
    pub did_document_o: Option<serde_json::Value>,
}
