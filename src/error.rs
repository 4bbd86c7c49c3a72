// ⚠️ Error taxonomy - one closed set of failure kinds
//
// Every fallible operation in the library returns one of these variants.
// Callers match on the variant (or on `kind()`) instead of string messages.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ERROR
// ============================================================================

#[derive(Debug, Error)]
pub enum Error {
    /// Insert with an id that is already present
    #[error("an item with id {id} already exists")]
    DuplicateKey { id: u32 },

    /// Lookup, remove, or update of an absent id
    #[error("no item with id {id}")]
    NotFound { id: u32 },

    /// A value breaks a field invariant (negative quantity, empty name, ...)
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    /// A line record has the wrong field count or an empty required field
    #[error("line {line}: {detail} (content: {content:?})")]
    MissingField {
        line: usize,
        content: String,
        detail: String,
    },

    /// A numeric field could not be parsed
    #[error("line {line}: field `{field}` is not a valid integer: {value:?}")]
    InvalidFormat {
        line: usize,
        field: &'static str,
        value: String,
    },

    /// The backing file could not be read or written
    #[error("I/O failure on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot content is not valid JSON for the entity type (on read), or
    /// the entities could not be encoded (on write)
    #[error("invalid snapshot data for {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Fieldless discriminant of [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    DuplicateKey,
    NotFound,
    InvalidValue,
    MissingField,
    InvalidFormat,
    IoFailure,
    DecodeFailure,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::DuplicateKey { .. } => ErrorKind::DuplicateKey,
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::InvalidValue { .. } => ErrorKind::InvalidValue,
            Error::MissingField { .. } => ErrorKind::MissingField,
            Error::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            Error::Io { .. } => ErrorKind::IoFailure,
            Error::Decode { .. } => ErrorKind::DecodeFailure,
        }
    }

    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidValue {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Line number for errors raised while parsing line records
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::MissingField { line, .. } | Error::InvalidFormat { line, .. } => Some(*line),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(Error::DuplicateKey { id: 1 }.kind(), ErrorKind::DuplicateKey);
        assert_eq!(Error::NotFound { id: 1 }.kind(), ErrorKind::NotFound);
        assert_eq!(Error::invalid("quantity", "negative").kind(), ErrorKind::InvalidValue);

        let io = Error::io("/tmp/x.json", std::io::Error::other("denied"));
        assert_eq!(io.kind(), ErrorKind::IoFailure);
    }

    #[test]
    fn test_messages_carry_context() {
        let err = Error::InvalidFormat {
            line: 3,
            field: "score",
            value: "ABC".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.contains("score"));
        assert!(msg.contains("ABC"));
        assert_eq!(err.line(), Some(3));

        let dup = Error::DuplicateKey { id: 42 };
        assert!(dup.to_string().contains("42"));
        assert_eq!(dup.line(), None);
    }
}
