use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the aide library
///
/// Charset-name resolution is the only fallible operation in the crate; every
/// classifier and search function is total and encodes "no meaningful answer"
/// in its documented truth table instead of an error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported charset: {0}")]
    UnsupportedCharset(String),

    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),
}

impl Error {
    pub fn unsupported_charset(name: impl Into<String>) -> Self {
        Self::UnsupportedCharset(name.into())
    }

    pub fn unsupported_encoding(name: impl Into<String>) -> Self {
        Self::UnsupportedEncoding(name.into())
    }

    /// Get error code for host applications that report coded errors
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::UnsupportedCharset(_) => "E_UNSUPPORTED_CHARSET",
            Error::UnsupportedEncoding(_) => "E_UNSUPPORTED_ENCODING",
        }
    }
}
