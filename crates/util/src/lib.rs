//! kitbag-util - Small, independent, stateless utilities.
//!
//! None of these functions share state or call each other:
//!
//! - [`chunk`] splits a slice into fixed-size pieces.
//! - [`Debouncer`] runs only the last of a burst of calls.
//! - [`random_string`] samples characters from a charset.
//! - [`group_by`] / [`group_by_key`] bucket items by a derived key.
//! - [`retry`] re-runs a fallible async operation with a fixed delay.
//! - [`format_currency`] renders an amount for a locale and currency.
//! - [`is_empty`] checks a [`Value`] for emptiness.
//!
//! Structural cloning lives in `kitbag-value` and is re-exported here.

pub mod chunk;
pub mod currency;
pub mod debounce;
pub mod empty;
pub mod error;
pub mod group;
pub mod random;
pub mod retry;

pub use chunk::chunk;
pub use currency::{format_currency, CurrencyOptions};
pub use debounce::Debouncer;
pub use empty::{is_empty, is_empty_or_missing};
pub use error::{RetryError, UtilError};
pub use group::{group_by, group_by_key};
pub use random::{random_string, random_string_from_rng, random_string_with, RandomStringOptions};
pub use retry::{retry, RetryPolicy};

pub use kitbag_value::{deep_clone, deep_equal, Value};
