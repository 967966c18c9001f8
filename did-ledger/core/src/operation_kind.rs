use crate::Error;

/// The requested action against the ledger for a given DID.  This is an exhaustive enumeration
/// so that an unrecognized kind is a construction-time error, not a silent no-op at the point
/// the operation is forwarded.
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Hash, serde::Deserialize, serde::Serialize,
)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Register a new DID on the ledger.  This is the kind assumed when none is specified.
    #[default]
    Create,
    /// Update the DID document of an already-registered DID.
    Update,
}

impl OperationKind {
    pub const VARIANTS: [OperationKind; 2] = [OperationKind::Create, OperationKind::Update];
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OperationKind {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(Self::Create),
            "update" => Ok(Self::Update),
            _ => Err(Error::Unrecognized(
                "operation kind must be either \"create\" or \"update\"",
            )),
        }
    }
}
