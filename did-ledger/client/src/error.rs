use std::borrow::Cow;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Already exists: {0}")]
    AlreadyExists(Cow<'static, str>),
    #[error(transparent)]
    CoreError(did_ledger_core::Error),
    // TODO: is there an HTTP status code to include here?
    #[error("HTTP operation status: {0}")]
    HTTPOperationStatus(Cow<'static, str>),
    // TODO: is there an HTTP status code to include here?
    #[error("HTTP request error: {0}")]
    HTTPRequestError(Cow<'static, str>),
    #[error("Invalid ledger endpoint URL: {0}")]
    InvalidLedgerEndpointURL(Cow<'static, str>),
    #[error("Malformed: {0}")]
    Malformed(Cow<'static, str>),
    #[error("Not found: {0}")]
    NotFound(Cow<'static, str>),
    #[error("Ledger operation fault: {0}")]
    OperationFault(Cow<'static, str>),
}

impl From<did_ledger_core::Error> for Error {
    fn from(e: did_ledger_core::Error) -> Self {
        Self::CoreError(e)
    }
}
