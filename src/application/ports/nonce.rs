// src/application/ports/nonce.rs

/// Issues and checks short-lived form tokens bound to an action string.
pub trait NonceManager: Send + Sync {
    fn create(&self, action: &str) -> String;

    /// True when `nonce` was issued for `action` and has not yet expired.
    fn verify(&self, nonce: &str, action: &str) -> bool;
}
