use std::fmt;

use http::Method;

/// Error type for rawhttp
#[derive(Debug, PartialEq, Eq)]
#[allow(missing_docs)]
#[non_exhaustive]
pub enum Error {
    BadUrl(String),
    UnsupportedMethod(Method),
    ConnectFailed(String),
    WriteFailed(String),
    ReadFailed(String),
    BadContentLengthHeader,
    MissingStatusLine,
    BadStatusCode(String),
    IncompleteBody { expected: u64, received: u64 },
}

impl From<http::uri::InvalidUri> for Error {
    fn from(value: http::uri::InvalidUri) -> Self {
        Error::BadUrl(value.to_string())
    }
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BadUrl(v) => write!(f, "bad url: {}", v),
            Error::UnsupportedMethod(m) => write!(f, "{} is not supported, only GET and POST", m),
            Error::ConnectFailed(v) => write!(f, "connect failed: {}", v),
            Error::WriteFailed(v) => write!(f, "write failed: {}", v),
            Error::ReadFailed(v) => write!(f, "read failed: {}", v),
            Error::BadContentLengthHeader => write!(f, "content-length header not a number"),
            Error::MissingStatusLine => write!(f, "response has no status line"),
            Error::BadStatusCode(v) => write!(f, "status code is not a number: {}", v),
            Error::IncompleteBody { expected, received } => write!(
                f,
                "connection closed after {} of {} body bytes",
                received, expected
            ),
        }
    }
}
