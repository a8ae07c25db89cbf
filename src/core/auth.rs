//! Salted password hashing for stored customer credentials.

use argon2::{
    password_hash::{Error as HashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand::rngs::OsRng;

use crate::errors::{BankError, BankResult};

const MEMORY_COST_KIB: u32 = 8 * 1024;
const TIME_COST: u32 = 2;
const PARALLELISM: u32 = 1;

fn hasher() -> BankResult<Argon2<'static>> {
    let params = Params::new(MEMORY_COST_KIB, TIME_COST, PARALLELISM, None)
        .map_err(|err| BankError::PasswordHash(err.to_string()))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Hashes a password with Argon2id and a fresh random salt, returning the PHC string.
pub fn hash_password(password: &str) -> BankResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = hasher()?
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| BankError::PasswordHash(err.to_string()))?;
    Ok(hash.to_string())
}

/// Checks `password` against a stored PHC string. A mismatch is `Ok(false)`;
/// a malformed hash is an error.
pub fn verify_password(password: &str, stored: &str) -> BankResult<bool> {
    let parsed =
        PasswordHash::new(stored).map_err(|err| BankError::PasswordHash(err.to_string()))?;
    match hasher()?.verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(HashError::Password) => Ok(false),
        Err(err) => Err(BankError::PasswordHash(err.to_string())),
    }
}
