use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ErrorKind {
    ZeroModulus,
    InvalidStep,
}

impl From<ErrorKind> for &'static str {
    fn from(value: ErrorKind) -> Self {
        match value {
            ErrorKind::ZeroModulus => "ERR_ZERO_MODULUS",
            ErrorKind::InvalidStep => "ERR_INVALID_STEP",
        }
    }
}

#[derive(Debug)]
pub struct Error {
    error: Box<dyn std::error::Error + Send + Sync>,
    kind: ErrorKind,
}

impl Error {
    pub fn new<E>(kind: ErrorKind, error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self {
            error: error.into(),
            kind,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &str = self.kind().into();
        let message: String = self.error.to_string();
        write!(f, "{}: {}", name, message)
    }
}

impl std::error::Error for Error {}
