mod mock_ledger;
mod mock_ledger_client;
mod mock_ledger_client_factory;

pub use crate::{
    mock_ledger::{MockLedger, MockRegistration},
    mock_ledger_client::MockLedgerClient,
    mock_ledger_client_factory::MockLedgerClientFactory,
};
