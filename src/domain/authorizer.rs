use crate::error::{CheckoutError, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::info;

/// A second-factor gate that must reach the authorized state before a
/// payment may proceed.
///
/// Each variant starts unauthorized and flips to authorized through its
/// verification call. The transition is one-way: authorization is never
/// revoked, so a verified authorizer can gate any number of payments.
pub trait Authorizer: Send + Sync {
    fn is_authorized(&self) -> bool;

    /// Succeeds as a no-op once authorized, fails otherwise.
    fn authorize(&self) -> Result<()> {
        if self.is_authorized() {
            Ok(())
        } else {
            Err(CheckoutError::Authorization(
                "authorizer has not been verified".to_string(),
            ))
        }
    }
}

/// Shared handle to an authorizer; payment methods hold one of these
/// rather than owning the gate outright.
pub type AuthorizerHandle = Arc<dyn Authorizer>;

#[derive(Default)]
pub struct SmsAuthorizer {
    authorized: AtomicBool,
}

impl SmsAuthorizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verify_mfa_code(&self, code: u32) {
        info!(code, "verifying SMS code");
        self.authorized.store(true, Ordering::Relaxed);
    }
}

impl Authorizer for SmsAuthorizer {
    fn is_authorized(&self) -> bool {
        self.authorized.load(Ordering::Relaxed)
    }
}

#[derive(Default)]
pub struct GoogleAuthorizer {
    authorized: AtomicBool,
}

impl GoogleAuthorizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verify_mfa_code(&self, code: u32) {
        info!(code, "verifying Google auth code");
        self.authorized.store(true, Ordering::Relaxed);
    }
}

impl Authorizer for GoogleAuthorizer {
    fn is_authorized(&self) -> bool {
        self.authorized.load(Ordering::Relaxed)
    }
}

#[derive(Default)]
pub struct RobotAuthorizer {
    authorized: AtomicBool,
}

impl RobotAuthorizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn not_a_robot(&self) {
        self.authorized.store(true, Ordering::Relaxed);
    }
}

impl Authorizer for RobotAuthorizer {
    fn is_authorized(&self) -> bool {
        self.authorized.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorize_fails_before_verification() {
        let authorizer = SmsAuthorizer::new();
        assert!(!authorizer.is_authorized());
        assert!(matches!(
            authorizer.authorize(),
            Err(CheckoutError::Authorization(_))
        ));
    }

    #[test]
    fn test_authorize_succeeds_after_verification() {
        let authorizer = GoogleAuthorizer::new();
        authorizer.verify_mfa_code(13216);
        assert!(authorizer.is_authorized());
        assert!(authorizer.authorize().is_ok());
    }

    #[test]
    fn test_authorization_is_not_reset() {
        let authorizer = RobotAuthorizer::new();
        authorizer.not_a_robot();

        // Authorization holds across repeated checks.
        assert!(authorizer.authorize().is_ok());
        assert!(authorizer.authorize().is_ok());
        assert!(authorizer.is_authorized());
    }

    #[test]
    fn test_handle_as_trait_object() {
        let authorizer = Arc::new(SmsAuthorizer::new());
        let handle: AuthorizerHandle = authorizer.clone();

        assert!(handle.authorize().is_err());
        authorizer.verify_mfa_code(4242);
        assert!(handle.authorize().is_ok());
    }
}
