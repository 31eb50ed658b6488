use tracing::{debug, info};

use crate::models::{Role, User};

/// The one credential pair the mock login accepts. Placeholder auth: no
/// hashing, no rate limiting, no session tokens.
pub const ADMIN_EMAIL: &str = "admin@crowdlens.ai";
pub const ADMIN_PASSWORD: &str = "admin123";

/// Sole owner of the optional current-user value. Admin rights are derived
/// from presence; there is no separate flag to set.
#[derive(Debug, Default)]
pub struct SessionStore {
    current_user: Option<User>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks the pair against the fixed admin credentials. On match sets the
    /// admin identity and returns true; on mismatch leaves state unchanged
    /// and returns false. A failed login is a local validation outcome the
    /// caller surfaces, not an error.
    pub fn login(&mut self, email: &str, password: &str) -> bool {
        if email == ADMIN_EMAIL && password == ADMIN_PASSWORD {
            self.current_user = Some(admin_user());
            info!(%email, "admin logged in");
            true
        } else {
            debug!(%email, "login rejected");
            false
        }
    }

    /// Clears the current user unconditionally.
    pub fn logout(&mut self) {
        if self.current_user.take().is_some() {
            info!("admin logged out");
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// True iff a user is present.
    pub fn is_admin(&self) -> bool {
        self.current_user.is_some()
    }
}

fn admin_user() -> User {
    User {
        id: "1".to_string(),
        name: "Admin User".to_string(),
        email: ADMIN_EMAIL.to_string(),
        role: Role::Admin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_with_admin_credentials_grants_admin() {
        let mut session = SessionStore::new();
        assert!(!session.is_admin());
        assert!(session.login(ADMIN_EMAIL, ADMIN_PASSWORD));
        assert!(session.is_admin());
        let user = session.current_user().unwrap();
        assert_eq!(user.email, ADMIN_EMAIL);
        assert_eq!(user.role, Role::Admin);
    }

    #[test]
    fn test_login_with_wrong_credentials_leaves_state_unchanged() {
        let mut session = SessionStore::new();
        assert!(!session.login(ADMIN_EMAIL, "wrong"));
        assert!(!session.login("someone@example.com", ADMIN_PASSWORD));
        assert!(!session.login("", ""));
        assert!(!session.is_admin());
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_failed_login_does_not_clear_existing_session() {
        let mut session = SessionStore::new();
        session.login(ADMIN_EMAIL, ADMIN_PASSWORD);
        assert!(!session.login(ADMIN_EMAIL, "wrong"));
        assert!(session.is_admin());
    }

    #[test]
    fn test_logout_always_resets_admin() {
        let mut session = SessionStore::new();
        session.logout();
        assert!(!session.is_admin());

        session.login(ADMIN_EMAIL, ADMIN_PASSWORD);
        session.logout();
        assert!(!session.is_admin());
        assert!(session.current_user().is_none());
    }
}
