//! Random token generation for the tool server shared secret.

use crate::error::ConfigError;
use rand::distr::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const TOKEN_LEN: usize = 32;

/// Generate a fresh token from a generator seeded by the OS entropy source.
pub fn generate_token() -> Result<String, ConfigError> {
    let mut rng = StdRng::try_from_os_rng()
        .map_err(|e| ConfigError::EntropySourceUnavailable(e.to_string()))?;
    Ok(generate_token_with(&mut rng))
}

/// Draw `TOKEN_LEN` characters uniformly from the 62 ASCII alphanumerics.
pub fn generate_token_with<R: Rng>(rng: &mut R) -> String {
    (0..TOKEN_LEN)
        .map(|_| char::from(rng.sample::<u8, _>(Alphanumeric)))
        .collect()
}

#[cfg(test)]
pub(crate) fn is_generated_shape(token: &str) -> bool {
    regex::Regex::new(r"^[a-zA-Z0-9]{32}$")
        .unwrap()
        .is_match(token)
}
