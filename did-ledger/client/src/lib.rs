mod error;
mod ledger_client;
mod ledger_client_factory;

pub use crate::{
    error::Error, ledger_client::LedgerClient, ledger_client_factory::LedgerClientFactory,
};

pub type Result<T> = std::result::Result<T, Error>;
