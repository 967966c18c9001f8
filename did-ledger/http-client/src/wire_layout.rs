/// The two interchangeable HTTP API shapes a ledger node may speak.  Which one a process targets
/// is decided once, by the driver-selection gate, based on the ledger API version.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WireLayout {
    /// The consolidated operations endpoint: every operation is POSTed to `{base}/operations`
    /// as an operation envelope, and status is read from `{base}/operations/status/{did}`.
    Modern,
    /// The older per-resource endpoints: `POST {base}/dids` to create, `PUT {base}/dids/{did}`
    /// to update, `GET {base}/dids/{did}` for status.
    Legacy,
}
