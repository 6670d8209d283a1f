use std::fmt::Write as _;

use crate::{
    kind::{FieldKind, Value},
    truthy::truthy,
};

/// Writes a coerced value into one field of `R`.
///
/// Returns `false`, leaving the field unchanged, when the value has the wrong
/// variant or does not fit the field's type.
pub type Setter<R> = fn(&mut R, Value) -> bool;

/// Binding metadata for one field of a record.
pub struct FieldDescriptor<R> {
    pub name: &'static str,
    /// Source key. Fields without one are never touched.
    pub env_key: Option<&'static str>,
    /// Raw required flag, read with [`truthy`](crate::truthy).
    pub required: Option<&'static str>,
    pub kind: FieldKind,
    pub writable: bool,
    pub setter: Option<Setter<R>>,
}

impl<R> FieldDescriptor<R> {
    pub fn is_required(&self) -> bool {
        self.required.is_some_and(truthy)
    }
}

/// A struct whose fields can be filled from an environment.
///
/// Usually implemented with `#[derive(Record)]`, which builds the descriptor
/// table from `#[env(...)]` attributes. A hand-written impl works the same way:
///
/// ```
/// use envbind::{FieldDescriptor, Record, Scalar, Value};
///
/// #[derive(Default)]
/// struct Limits {
///     max_conns: u32,
/// }
///
/// impl Record for Limits {
///     const NAME: &'static str = "Limits";
///     const FIELDS: &'static [FieldDescriptor<Self>] = &[FieldDescriptor {
///         name: "max_conns",
///         env_key: Some("MAX_CONNS"),
///         required: None,
///         kind: <u32 as Scalar>::KIND,
///         writable: true,
///         setter: Some(|limits: &mut Self, value: Value| {
///             u32::from_value(value)
///                 .map(|value| limits.max_conns = value)
///                 .is_some()
///         }),
///     }];
/// }
///
/// let env = std::collections::HashMap::from([("MAX_CONNS", "64")]);
/// let mut limits = Limits::default();
/// envbind::bind(&mut limits, &env).unwrap();
/// assert_eq!(limits.max_conns, 64);
/// ```
pub trait Record: Sized + 'static {
    const NAME: &'static str;
    const FIELDS: &'static [FieldDescriptor<Self>];
}

/// Lists the environment variables read by `R`, one `KEY= # kind` line per
/// bound field.
pub fn requirements<R: Record>() -> String {
    let mut out = String::new();

    for field in R::FIELDS {
        let Some(env_key) = field.env_key else {
            continue;
        };
        let _ = write!(out, "{env_key}= # {}", field.kind);
        if field.is_required() {
            out.push_str(", required");
        }
        out.push('\n');
    }

    out
}
