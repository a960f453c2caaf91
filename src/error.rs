#[derive(Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Ledger,
    Output,
}

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

impl Error {
    pub fn new<T: Into<String>>(kind: ErrorKind, message: T) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn new_ledger<T: Into<String>>(message: T) -> Self {
        Self::new(ErrorKind::Ledger, message)
    }

    pub fn new_output<T: Into<String>>(message: T) -> Self {
        Self::new(ErrorKind::Output, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} error: {}", self.kind, self.message)
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::new_output(error.to_string())
    }
}
