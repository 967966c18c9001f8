#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed: {0}")]
    Malformed(&'static str),
    #[error("Unrecognized: {0}")]
    Unrecognized(&'static str),
    #[error("Generic error: {0}")]
    Generic(&'static str),
}

impl From<&'static str> for Error {
    fn from(s: &'static str) -> Self {
        Self::Generic(s)
    }
}
