use std::{fmt, num::IntErrorKind};

use crate::{error::ParseCause, truthy::truthy};

/// Bit width of an integer field. `Native` follows the platform pointer width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntWidth {
    W8,
    W16,
    W32,
    W64,
    Native,
}

impl IntWidth {
    pub const fn bits(self) -> u32 {
        match self {
            Self::W8 => 8,
            Self::W16 => 16,
            Self::W32 => 32,
            Self::W64 => 64,
            Self::Native => usize::BITS,
        }
    }
}

/// The declared type of a bindable field, as far as coercion is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Boolean,
    Signed(IntWidth),
    Unsigned(IntWidth),
    /// A type with no coercion rule. Carries the type name for diagnostics.
    Unsupported(&'static str),
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("String"),
            Self::Boolean => f.write_str("bool"),
            Self::Signed(IntWidth::Native) => f.write_str("isize"),
            Self::Unsigned(IntWidth::Native) => f.write_str("usize"),
            Self::Signed(width) => write!(f, "i{}", width.bits()),
            Self::Unsigned(width) => write!(f, "u{}", width.bits()),
            Self::Unsupported(name) => f.write_str(name),
        }
    }
}

/// A coerced environment value on its way into a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Boolean(bool),
    Signed(i64),
    Unsigned(u64),
}

/// Field types the binder knows how to fill.
pub trait Scalar: Sized {
    const KIND: FieldKind;

    /// Returns `None` if `value` is of the wrong variant or does not fit.
    fn from_value(value: Value) -> Option<Self>;
}

impl Scalar for String {
    const KIND: FieldKind = FieldKind::Text;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl Scalar for bool {
    const KIND: FieldKind = FieldKind::Boolean;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Boolean(b) => Some(b),
            _ => None,
        }
    }
}

macro_rules! impl_scalar_int {
    ($variant:ident, $($ty:ty => $width:ident),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const KIND: FieldKind = FieldKind::$variant(IntWidth::$width);

                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => <$ty>::try_from(v).ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_scalar_int!(Signed, i8 => W8, i16 => W16, i32 => W32, i64 => W64, isize => Native);
impl_scalar_int!(Unsigned, u8 => W8, u16 => W16, u32 => W32, u64 => W64, usize => Native);

pub(crate) enum CoerceError {
    Parse(ParseCause),
    Unsupported,
}

/// Converts a raw environment string according to `kind`.
pub(crate) fn coerce(kind: FieldKind, raw: &str) -> Result<Value, CoerceError> {
    match kind {
        FieldKind::Text => Ok(Value::Text(raw.to_owned())),
        FieldKind::Boolean => Ok(Value::Boolean(truthy(raw))),
        FieldKind::Signed(width) => parse_signed(raw, width.bits())
            .map(Value::Signed)
            .map_err(|cause| CoerceError::Parse(cause.with_kind(kind))),
        FieldKind::Unsigned(width) => parse_unsigned(raw, width.bits())
            .map(Value::Unsigned)
            .map_err(|cause| CoerceError::Parse(cause.with_kind(kind))),
        FieldKind::Unsupported(_) => Err(CoerceError::Unsupported),
    }
}

enum IntCause {
    Malformed,
    OutOfRange,
}

impl IntCause {
    fn with_kind(self, kind: FieldKind) -> ParseCause {
        match self {
            Self::Malformed => ParseCause::Malformed,
            Self::OutOfRange => ParseCause::OutOfRange(kind),
        }
    }
}

fn classify(kind: &IntErrorKind) -> IntCause {
    match kind {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => IntCause::OutOfRange,
        _ => IntCause::Malformed,
    }
}

fn parse_signed(raw: &str, bits: u32) -> Result<i64, IntCause> {
    let value = raw.parse::<i64>().map_err(|e| classify(e.kind()))?;
    let shift = 64 - bits;
    if (i64::MIN >> shift..=i64::MAX >> shift).contains(&value) {
        Ok(value)
    } else {
        Err(IntCause::OutOfRange)
    }
}

fn parse_unsigned(raw: &str, bits: u32) -> Result<u64, IntCause> {
    // `u64::from_str` tolerates a leading '+', unsigned input here must be bare digits.
    if raw.starts_with('+') {
        return Err(IntCause::Malformed);
    }
    let value = raw.parse::<u64>().map_err(|e| classify(e.kind()))?;
    if value <= u64::MAX >> (64 - bits) {
        Ok(value)
    } else {
        Err(IntCause::OutOfRange)
    }
}
