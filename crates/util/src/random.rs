//! Random strings sampled from a charset.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::UtilError;

/// Lowercase and uppercase ASCII letters followed by the ten digits.
pub const DEFAULT_CHARSET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomStringOptions {
    /// Characters to sample from. Multi-byte characters are sampled whole.
    pub charset: String,
}

impl Default for RandomStringOptions {
    fn default() -> Self {
        Self {
            charset: DEFAULT_CHARSET.to_string(),
        }
    }
}

/// Random alphanumeric string of `length` characters.
pub fn random_string(length: usize) -> String {
    let charset: Vec<char> = DEFAULT_CHARSET.chars().collect();
    sample(&mut rand::thread_rng(), length, &charset)
}

/// Random string of `length` characters drawn from `options.charset`.
pub fn random_string_with(length: usize, options: &RandomStringOptions) -> Result<String, UtilError> {
    random_string_from_rng(&mut rand::thread_rng(), length, &options.charset)
}

/// Random string drawn from `charset` using the caller's generator.
///
/// Each character is picked uniformly and independently. Useful with a
/// seeded generator for reproducible output.
pub fn random_string_from_rng<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    charset: &str,
) -> Result<String, UtilError> {
    let charset: Vec<char> = charset.chars().collect();
    if charset.is_empty() {
        return Err(UtilError::EmptyCharset);
    }
    Ok(sample(rng, length, &charset))
}

fn sample<R: Rng + ?Sized>(rng: &mut R, length: usize, charset: &[char]) -> String {
    (0..length)
        .map(|_| charset[rng.gen_range(0..charset.len())])
        .collect()
}
