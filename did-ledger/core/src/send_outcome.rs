use crate::OperationKind;

/// What actually happened to a forwarded operation.  A failed ledger call is reported here as a
/// value rather than re-raised, so the caller gets a typed result while the call itself still
/// completes normally.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SendOutcome {
    /// The operation was accepted by the ledger node.  Note that acceptance is not consensus;
    /// the registration isn't final until the ledger's consensus window has passed.
    Submitted { operation_kind: OperationKind },
    /// The ledger call faulted.  The reason is the fault's human-readable message, the same
    /// text that was printed on the error stream.
    Failed {
        operation_kind: OperationKind,
        reason: String,
    },
}

impl SendOutcome {
    pub fn operation_kind(&self) -> OperationKind {
        match self {
            Self::Submitted { operation_kind } | Self::Failed { operation_kind, .. } => {
                *operation_kind
            }
        }
    }
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted { .. })
    }
    pub fn failure_reason_o(&self) -> Option<&str> {
        match self {
            Self::Submitted { .. } => None,
            Self::Failed { reason, .. } => Some(reason.as_str()),
        }
    }
}
