//! Paths used by the code `#[derive(Record)]` generates.
//!
//! Not meant to be used directly.
pub use crate::binder::bind;
pub use crate::env::ProcessEnv;
pub use crate::error::FieldErrors;
pub use crate::kind::{FieldKind, Scalar, Value};
pub use crate::record::{FieldDescriptor, Record, requirements};
