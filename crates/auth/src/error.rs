//! Authentication errors

use thiserror::Error;

/// Why a login was refused
///
/// Lookup failures of any kind are reported as `UserNotFound` so the
/// caller cannot tell a wrong email from a storage problem.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("user not found")]
    UserNotFound,

    #[error("account is locked. Try again later")]
    AccountLocked,

    #[error("invalid credentials")]
    InvalidCredentials,
}
