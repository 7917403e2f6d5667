//! kitbag-value - Dynamic value model with deep equality and structural cloning.
//!
//! [`Value`] is a closed tagged union over null, booleans, numbers, strings,
//! arrays and string-keyed objects, plus two explicit variants for host data
//! that is not plain data ([`Value::Binary`], [`Value::Opaque`]).
//!
//! - [`deep_equal`] compares two values structurally.
//! - [`deep_clone`] produces a structurally equal tree that shares no
//!   container with its source.

mod clone;
mod convert;
mod deep_equal;
mod error;
mod value;

pub use clone::{deep_clone, deep_clone_with, try_deep_clone_with, CloneOptions, NonPlainPolicy};
pub use deep_equal::deep_equal;
pub use error::CloneError;
pub use value::{Map, Opaque, Value};
