//! # lb-auth-static
//!
//! Dead-simple implementation of `IdentityProvider`: the session is fixed
//! at construction. Real session management (sign-in, token refresh) lives
//! outside the core; this stands in for it in the demo binary and tests.

use lb_core::models::UserSession;
use lb_core::traits::IdentityProvider;

pub struct StaticIdentityProvider {
    session: Option<UserSession>,
}

impl StaticIdentityProvider {
    pub fn signed_in(name: &str) -> Self {
        Self {
            session: Some(UserSession {
                name: name.to_string(),
            }),
        }
    }

    pub fn signed_out() -> Self {
        Self { session: None }
    }
}

impl IdentityProvider for StaticIdentityProvider {
    fn current_user(&self) -> Option<UserSession> {
        self.session.clone()
    }
}
