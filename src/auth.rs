//! Mock credential gate used by the login screens.
//!
//! This is not a security boundary: there is no session, no token and no
//! expiry. A successful attempt only yields the screen to navigate to.

use thiserror::Error;

use crate::egui_app::state::Destination;

/// Email accepted by [`StaticCredentialVerifier::default`].
pub const DEMO_EMAIL: &str = "admin@example.com";
/// Password accepted by [`StaticCredentialVerifier::default`].
pub const DEMO_PASSWORD: &str = "password123";

/// Capability deciding whether an email/password pair is accepted.
pub trait CredentialVerifier {
    fn verify(&self, email: &str, password: &str) -> bool;
}

/// Accepts exactly one literal email/password pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticCredentialVerifier {
    email: String,
    password: String,
}

impl StaticCredentialVerifier {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl Default for StaticCredentialVerifier {
    fn default() -> Self {
        Self::new(DEMO_EMAIL, DEMO_PASSWORD)
    }
}

impl CredentialVerifier for StaticCredentialVerifier {
    fn verify(&self, email: &str, password: &str) -> bool {
        email == self.email && password == self.password
    }
}

/// Why a login attempt was refused. `Display` is the user-facing message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum AuthRejection {
    #[error("Please enter both email and password.")]
    MissingFields,
    #[error("Invalid email or password.")]
    InvalidCredentials,
}

/// Checks submitted credentials and names the screen to open on success.
pub struct AuthGate {
    verifier: Box<dyn CredentialVerifier>,
    redirect: Destination,
}

impl AuthGate {
    pub fn new(verifier: Box<dyn CredentialVerifier>, redirect: Destination) -> Self {
        Self { verifier, redirect }
    }

    /// Gate backed by the demo literal pair.
    pub fn demo(redirect: Destination) -> Self {
        Self::new(Box::new(StaticCredentialVerifier::default()), redirect)
    }

    pub fn redirect(&self) -> Destination {
        self.redirect
    }

    /// Check credentials and return where to go on success.
    pub fn attempt(&self, email: &str, password: &str) -> Result<Destination, AuthRejection> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthRejection::MissingFields);
        }
        if !self.verifier.verify(email, password) {
            return Err(AuthRejection::InvalidCredentials);
        }
        Ok(self.redirect)
    }
}

impl std::fmt::Debug for AuthGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGate")
            .field("redirect", &self.redirect)
            .finish_non_exhaustive()
    }
}
