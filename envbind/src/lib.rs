//! Populate plain structs from environment variables.
//!
//! Fields opt in with `#[env(from = "KEY")]`, optionally marked
//! `required`. A bind visits every field, writes the ones it can and returns
//! every problem it found in one [`FieldErrors`] list.
//!
//! ```
//! use envbind::Record;
//!
//! #[derive(Record, Debug, Default)]
//! pub struct Config {
//!     #[env(from = "DEBUG")]
//!     pub debug: bool,
//!     #[env(from = "APP_ENV", required)]
//!     pub environment: String,
//! }
//!
//! let env = std::collections::HashMap::from([("APP_ENV", "staging")]);
//! let mut config = Config::default();
//! envbind::bind(&mut config, &env).unwrap();
//!
//! assert!(!config.debug);
//! assert_eq!(config.environment, "staging");
//! ```
mod binder;
mod env;
mod error;
mod kind;
mod record;
mod registry;
mod truthy;

#[doc(hidden)]
#[path = "private.rs"]
pub mod __private;

pub use binder::bind;
pub use env::{Environment, ProcessEnv};
pub use envbind_derive::Record;
pub use error::{BindError, FieldError, FieldErrors, InvalidTarget, ParseCause, Reason};
pub use kind::{FieldKind, IntWidth, Scalar, Value};
pub use record::{FieldDescriptor, Record, Setter, requirements};
pub use registry::Registry;
pub use truthy::truthy;
