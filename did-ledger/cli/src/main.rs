mod client_options_args;
mod did_document_args;
mod info;
mod send;

pub use crate::{
    client_options_args::ClientOptionsArgs, did_document_args::DIDDocumentArgs, info::Info,
    send::Send,
};
pub use anyhow::Result;

/// did-ledger CLI tool for submitting DID create/update operations to the ledger and monitoring
/// their registration.
#[derive(clap::Parser)]
enum Root {
    Send(Send),
    Info(Info),
}

impl Root {
    async fn handle(self) -> Result<()> {
        match self {
            Self::Send(x) => x.handle().await,
            Self::Info(x) => x.handle().await,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // It's necessary to specify EnvFilter::from_default_env in order to use RUST_LOG env var.
    tracing_subscriber::fmt()
        .with_target(true)
        .with_line_number(true)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .with_writer(std::io::stderr)
        .init();

    use clap::Parser;
    // Note that if the env var RUST_BACKTRACE is set to 1 (or "full"), then the backtrace will be printed
    // to stderr if this returns error.
    Root::parse().handle().await
}
