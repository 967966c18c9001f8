mod http_ledger_client;
mod http_ledger_client_factory;
mod wire_layout;

pub use crate::{
    http_ledger_client::HttpLedgerClient, http_ledger_client_factory::HttpLedgerClientFactory,
    wire_layout::WireLayout,
};
pub use did_ledger_client::{Error, Result};

lazy_static::lazy_static! {
    /// Building a reqwest::Client is *incredibly* slow, so we use a global instance and then clone
    /// it per use, as the documentation indicates.
    pub(crate) static ref REQWEST_CLIENT: reqwest::Client = reqwest::Client::new();
}
