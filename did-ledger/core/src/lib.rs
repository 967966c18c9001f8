mod client_options;
mod did_document;
mod error;
mod operation_kind;
mod registration_info;
mod send_outcome;
mod send_request;

pub use crate::{
    client_options::{ClientOptions, DEFAULT_LEDGER_BASE_URL},
    did_document::did_of,
    error::Error,
    operation_kind::OperationKind,
    registration_info::{RegistrationInfo, RegistrationStatus},
    send_outcome::SendOutcome,
    send_request::SendRequest,
};

pub type Result<T> = std::result::Result<T, Error>;
