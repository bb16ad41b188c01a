use std::{error, fmt};

#[derive(Debug)]
pub enum InitError {
    AlreadyInitialized,
    DateFormat(String),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyInitialized => write!(f, "A process logger is already installed"),
            Self::DateFormat(fmt) => write!(f, "Invalid date format: {fmt:?}"),
        }
    }
}

impl error::Error for InitError {}

impl From<log::SetLoggerError> for InitError {
    fn from(_: log::SetLoggerError) -> Self {
        Self::AlreadyInitialized
    }
}
