//! Random credential and port generation.

use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};

use crate::domain::AppError;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
/// Symbols that survive `.env` parsing and Compose interpolation unquoted.
const SYMBOLS: &[u8] = b"!%*+-_.@";

/// One character from each mandatory class.
pub const MIN_PASSWORD_LENGTH: usize = 4;

/// Internal port range used when a reverse proxy fronts the stack.
pub const INTERNAL_PORT_RANGE: std::ops::RangeInclusive<u16> = 50001..=60000;

/// Generate a password from the thread-local CSPRNG.
pub fn generate_password(length: usize) -> Result<String, AppError> {
    generate_password_with(&mut rand::rng(), length)
}

/// Generate a password containing at least one lowercase letter, uppercase
/// letter, digit, and symbol, in shuffled order.
pub fn generate_password_with<R: Rng + CryptoRng + ?Sized>(
    rng: &mut R,
    length: usize,
) -> Result<String, AppError> {
    if length < MIN_PASSWORD_LENGTH {
        return Err(AppError::CredentialLengthTooShort {
            requested: length,
            minimum: MIN_PASSWORD_LENGTH,
        });
    }

    let alphabet: Vec<u8> = [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS].concat();
    let mut chars: Vec<u8> = [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS]
        .iter()
        .map(|class| pick(&mut *rng, class))
        .collect();
    while chars.len() < length {
        chars.push(pick(&mut *rng, &alphabet));
    }
    chars.shuffle(rng);

    Ok(chars.into_iter().map(char::from).collect())
}

fn pick<R: Rng + ?Sized>(rng: &mut R, set: &[u8]) -> u8 {
    set[rng.random_range(0..set.len())]
}

/// Random port for the internal HTTP listener behind the proxy.
pub fn random_port() -> u16 {
    random_port_with(&mut rand::rng())
}

pub fn random_port_with<R: Rng + ?Sized>(rng: &mut R) -> u16 {
    rng.random_range(INTERNAL_PORT_RANGE)
}
