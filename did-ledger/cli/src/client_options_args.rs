use did_ledger_core::ClientOptions;

#[derive(clap::Args, Clone, Debug)]
pub struct ClientOptionsArgs {
    /// Specify the base URL of the ledger node to send operations to, including the scheme.
    /// The URL must not contain a query string or fragment.
    #[arg(
        name = "ledger",
        env = "DID_LEDGER_URL",
        long,
        value_name = "URL",
        default_value = did_ledger_core::DEFAULT_LEDGER_BASE_URL
    )]
    pub ledger_base_url: url::Url,
    /// Suppress informational progress lines.  Error lines are still printed.
    #[arg(env = "DID_LEDGER_QUIET", long, default_value = "false")]
    pub quiet: bool,
}

impl ClientOptionsArgs {
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            ledger_base_url: self.ledger_base_url.clone(),
            quiet: self.quiet,
            user_agent_o: None,
        }
    }
}
