/// Compares a password typed at the login prompt against a stored one.
///
/// Credential checks go through this trait so that the stored representation
/// can change (for example to a salted one-way hash) without touching the
/// login loop.
pub trait PasswordVerifier: Send + Sync {
    fn verify(&self, supplied: &str, stored: &str) -> bool;
}

/// Passwords are stored as plaintext and compared byte for byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaintextVerifier;

impl PasswordVerifier for PlaintextVerifier {
    fn verify(&self, supplied: &str, stored: &str) -> bool {
        supplied == stored
    }
}
