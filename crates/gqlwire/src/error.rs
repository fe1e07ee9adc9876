use thiserror::Error;

use std::io;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[cfg(feature = "json")]
    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("cannot convert input of type {found} to {expected}")]
    Conversion {
        found: &'static str,
        expected: &'static str,
    },

    #[error("cannot parse {input:?} as {expected}")]
    Parse { input: String, expected: &'static str },

    #[error("{value} overflows {target}")]
    Overflow { value: String, target: &'static str },

    #[error("cannot marshal infinite or NaN float values")]
    NonFiniteFloat,

    #[error("context cancelled")]
    Cancelled,

    #[error("{0}")]
    Message(String),
}

impl Error {
    pub fn message(msg: impl Into<String>) -> Self {
        Error::Message(msg.into())
    }

    pub(crate) fn conversion(found: &crate::value::Value, expected: &'static str) -> Self {
        Error::Conversion {
            found: found.kind(),
            expected,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
