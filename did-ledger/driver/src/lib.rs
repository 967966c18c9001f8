mod driver;
mod driver_entry;
mod legacy_driver;
mod modern_driver;
mod reporter;
mod send;

pub use crate::{
    driver::Driver,
    driver_entry::{
        driver, select_driver, targeted_ledger_api_version, DEFAULT_LEDGER_API_VERSION,
        LEDGER_API_VERSION_ENV_VAR, MIN_MODERN_LEDGER_API_VERSION,
    },
    legacy_driver::LegacyDriver,
    modern_driver::ModernDriver,
    reporter::{ConsoleReporter, Reporter},
};
pub use did_ledger_client::{Error, Result};
