/// The ledger base URL assumed when the caller doesn't specify one.  This is the conventional
/// listen address of a local development ledger node.
pub const DEFAULT_LEDGER_BASE_URL: &str = "http://localhost:8085";

/// Configuration from which a ledger client handle is resolved.  This is opaque to the operation
/// forwarder itself; it's interpreted only by the ledger client factory (which turns it into a
/// client handle) and by the progress reporter (which honors the quiet flag).
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct ClientOptions {
    /// Base URL of the ledger node that operations will be sent to.
    #[serde(rename = "ledger", default = "default_ledger_base_url")]
    pub ledger_base_url: url::Url,
    /// If true, informational progress lines are suppressed.  Error lines are still printed.
    #[serde(default)]
    pub quiet: bool,
    /// Optional User-Agent value to identify this client to the ledger node.
    #[serde(rename = "userAgent", default, skip_serializing_if = "Option::is_none")]
    pub user_agent_o: Option<String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            ledger_base_url: default_ledger_base_url(),
            quiet: false,
            user_agent_o: None,
        }
    }
}

fn default_ledger_base_url() -> url::Url {
    url::Url::parse(DEFAULT_LEDGER_BASE_URL)
        .expect("programmer error: DEFAULT_LEDGER_BASE_URL must be a well-formed URL")
}
