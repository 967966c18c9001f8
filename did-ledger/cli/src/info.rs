use crate::{ClientOptionsArgs, Result};

/// Query the ledger for the registration status of a DID and print it as JSON to stdout.
#[derive(clap::Parser)]
pub struct Info {
    /// The DID to query, e.g. `did:ledger:zEjXivDidxAi2kETdFw1o36`.
    pub did: String,
    #[command(flatten)]
    pub client_options_args: ClientOptionsArgs,
}

impl Info {
    pub async fn handle(self) -> Result<()> {
        let registration_info = did_ledger_driver::driver()
            .registration_info(
                &self.client_options_args.client_options(),
                self.did.as_str(),
            )
            .await?;
        serde_json::to_writer_pretty(std::io::stdout(), &registration_info)?;
        println!();
        Ok(())
    }
}
