use crate::{Driver, LegacyDriver, ModernDriver};

/// Minimum ledger API version for which the modern driver implementation is selected.
pub const MIN_MODERN_LEDGER_API_VERSION: &str = "2.0.0";
/// Ledger API version assumed when the environment doesn't specify one.
pub const DEFAULT_LEDGER_API_VERSION: &str = "2.1.0";
/// Env var overriding which ledger API version this process targets, e.g. for talking to a
/// not-yet-upgraded ledger node.
pub const LEDGER_API_VERSION_ENV_VAR: &str = "DID_LEDGER_API_VERSION";

lazy_static::lazy_static! {
    static ref SELECTED_DRIVER_B: Box<dyn Driver> = select_driver(&targeted_ledger_api_version());
}

/// The process-wide driver, selected exactly once at first use by comparing the targeted ledger
/// API version against MIN_MODERN_LEDGER_API_VERSION.  There is no dynamic re-evaluation; a
/// malformed version string is a fatal fault at first use.
pub fn driver() -> &'static dyn Driver {
    SELECTED_DRIVER_B.as_ref()
}

/// The ledger API version this process targets: LEDGER_API_VERSION_ENV_VAR if set, else
/// DEFAULT_LEDGER_API_VERSION.
pub fn targeted_ledger_api_version() -> semver::Version {
    let version_string = std::env::var(LEDGER_API_VERSION_ENV_VAR)
        .unwrap_or_else(|_| DEFAULT_LEDGER_API_VERSION.to_string());
    semver::Version::parse(version_string.as_str()).unwrap_or_else(|e| {
        panic!(
            "malformed ledger API version {:?}: {}",
            version_string.as_str(),
            e
        )
    })
}

/// Select between the two functionally equivalent driver implementations for the given ledger
/// API version.
pub fn select_driver(ledger_api_version: &semver::Version) -> Box<dyn Driver> {
    let min_modern_version = semver::Version::parse(MIN_MODERN_LEDGER_API_VERSION)
        .expect("programmer error: MIN_MODERN_LEDGER_API_VERSION must be a well-formed semver");
    let driver_b: Box<dyn Driver> = if *ledger_api_version >= min_modern_version {
        Box::new(ModernDriver::new())
    } else {
        Box::new(LegacyDriver::new())
    };
    tracing::debug!(
        "selected {} driver for ledger API version {}",
        driver_b.name(),
        ledger_api_version
    );
    driver_b
}
