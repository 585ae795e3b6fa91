/// Port for checking a password against a stored credential
///
/// Implementations must compare in constant time and must never
/// accept a credential they cannot parse.
pub trait PasswordVerifier: Send + Sync {
    fn verify(&self, password: &str, credential: &str) -> bool;
}
