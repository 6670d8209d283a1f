use std::{error::Error as StdError, fmt, slice, vec};

use thiserror::Error;

use crate::kind::FieldKind;

/// Why a parse of an integer field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCause {
    #[error("not a base-10 integer")]
    Malformed,
    #[error("out of range for {0}")]
    OutOfRange(FieldKind),
}

/// What went wrong with a single field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Reason {
    #[error("Field is not writable")]
    Unsettable,
    #[error("Missing required environment variable '{env_key}'")]
    MissingRequired { env_key: &'static str },
    #[error("Failed to parse '{env_key}'=\"{value}\": {cause}")]
    ParseFailure {
        env_key: &'static str,
        value: String,
        cause: ParseCause,
    },
    #[error("No conversion for this field type")]
    UnsupportedType,
}

/// A diagnostic for one field of one record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{record}.{field}` ({kind}): {reason}")]
pub struct FieldError {
    pub record: &'static str,
    pub field: &'static str,
    pub kind: FieldKind,
    pub reason: Reason,
}

/// Every field-level problem found by one bind, in field declaration order.
///
/// Binding never stops at the first bad field, so this holds the full list of
/// missing and invalid settings.
///
/// # Display Format
///
/// ```text
/// 2 binding errors:
///   1. `Config.db_url` (String): Missing required environment variable 'DATABASE_URL'
///   2. `Config.port` (u16): Failed to parse 'PORT'="invalid": not a base-10 integer
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[FieldError] {
        &self.0
    }

    pub(crate) fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.len() {
            1 => writeln!(f, "1 binding error:")?,
            n => writeln!(f, "{n} binding errors:")?,
        }

        for (i, error) in self.0.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl StdError for FieldErrors {}

impl IntoIterator for FieldErrors {
    type Item = FieldError;
    type IntoIter = vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The target handed to a dynamic bind is not something that can be bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidTarget {
    #[error("bind target is a null reference")]
    Null,
    #[error("bind target is not a registered record type")]
    NotARecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error(transparent)]
    InvalidTarget(#[from] InvalidTarget),
    #[error(transparent)]
    Fields(#[from] FieldErrors),
}

impl BindError {
    /// Field diagnostics, empty when the bind failed before any field was visited.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::InvalidTarget(_) => &[],
            Self::Fields(errors) => errors.as_slice(),
        }
    }
}
