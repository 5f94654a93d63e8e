//! Argon2id hashing shared by the user store backends.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};

use crate::error::AuthError;

/// Memory cost in KiB. Matches the parameters of the seeded admin hash.
pub const M_COST_KIB: u32 = 16;
/// Number of iterations.
pub const T_COST: u32 = 2;
/// Degree of parallelism.
pub const P_COST: u32 = 1;

fn hasher() -> Result<Argon2<'static>, AuthError> {
    let params = Params::new(M_COST_KIB, T_COST, P_COST, None)?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Hash a password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(hasher()?
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}

/// Verify a password against a stored PHC string. The hash string carries
/// its own parameters, so hashes produced with other settings still verify.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(stored)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Translate a unique-constraint violation on insert into `UserExists`.
pub(crate) fn map_insert_error(username: &str, err: sqlx::Error) -> AuthError {
    if err
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation())
    {
        AuthError::UserExists(username.to_string())
    } else {
        AuthError::Database(err)
    }
}
