//! Random password generation.

use rand::Rng;
use secrecy::SecretString;
use thiserror::Error;

/// Length used by [`generate_default_password`].
pub const DEFAULT_LENGTH: usize = 12;

/// Every symbol a generated password may contain: letters, digits and
/// `!@#$%^&*`.
pub const ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Invalid argument: password length must be positive, got {length}")]
    InvalidArgument { length: i64 },
}

/// Generates a password of `length` symbols using the thread-local RNG.
///
/// # Errors
///
/// Returns [`GeneratorError::InvalidArgument`] if `length <= 0`.
pub fn generate_password(length: i64) -> Result<SecretString, GeneratorError> {
    generate_password_with_rng(&mut rand::thread_rng(), length)
}

/// Generates a password of [`DEFAULT_LENGTH`] symbols.
pub fn generate_default_password() -> SecretString {
    draw(&mut rand::thread_rng(), DEFAULT_LENGTH)
}

/// Same as [`generate_password`] with a caller-supplied RNG.
///
/// Each symbol is drawn uniformly and independently from [`ALPHABET`]. The
/// result is not guaranteed to contain every character class.
pub fn generate_password_with_rng<R>(
    rng: &mut R,
    length: i64,
) -> Result<SecretString, GeneratorError>
where
    R: Rng + ?Sized,
{
    if length <= 0 {
        return Err(GeneratorError::InvalidArgument { length });
    }
    let length = usize::try_from(length).map_err(|_| GeneratorError::InvalidArgument { length })?;
    Ok(draw(rng, length))
}

fn draw<R: Rng + ?Sized>(rng: &mut R, length: usize) -> SecretString {
    #[cfg(feature = "tracing")]
    tracing::debug!("generating password of length {}", length);

    let password: String = (0..length)
        .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
        .collect();
    SecretString::new(password.into())
}
