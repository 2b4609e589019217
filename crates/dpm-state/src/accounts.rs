//! Demo account directory.
//!
//! Stands in for an identity provider. Accounts are fixed and checked
//! locally; nothing here is a security boundary.

use dpm_model::{LoginRequest, Role};

use crate::error::SessionError;

/// One demo sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoAccount {
    pub email: &'static str,
    pub password: &'static str,
    pub name: &'static str,
    pub role: Role,
}

impl DemoAccount {
    pub fn login_request(&self) -> LoginRequest {
        LoginRequest::new(self.name, self.email, self.role.as_str())
    }
}

const DEMO_ACCOUNTS: &[DemoAccount] = &[
    DemoAccount {
        email: "admin@hospital.com",
        password: "admin123",
        name: "Dr. Sarah Chen",
        role: Role::Administrator,
    },
    DemoAccount {
        email: "tech@hospital.com",
        password: "tech123",
        name: "James Wilson",
        role: Role::Technician,
    },
    DemoAccount {
        email: "radio@hospital.com",
        password: "radio123",
        name: "Dr. Michael Ross",
        role: Role::Radiologist,
    },
];

/// Lookup over the demo accounts.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoDirectory;

impl DemoDirectory {
    /// Check an e-mail/password pair.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidCredentials`] when no account matches.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<LoginRequest, SessionError> {
        DEMO_ACCOUNTS
            .iter()
            .find(|account| account.email == email && account.password == password)
            .map(DemoAccount::login_request)
            .ok_or(SessionError::InvalidCredentials)
    }

    /// One-click sign-in for a role, if a demo account exists for it.
    pub fn quick_login(&self, role: Role) -> Option<LoginRequest> {
        DEMO_ACCOUNTS
            .iter()
            .find(|account| account.role == role)
            .map(DemoAccount::login_request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticates_known_accounts() {
        let request = DemoDirectory
            .authenticate("radio@hospital.com", "radio123")
            .unwrap();
        assert_eq!(request.name, "Dr. Michael Ross");
        assert_eq!(request.role, "Radiologist");
    }

    #[test]
    fn rejects_wrong_password_and_unknown_email() {
        assert_eq!(
            DemoDirectory.authenticate("admin@hospital.com", "tech123"),
            Err(SessionError::InvalidCredentials)
        );
        assert_eq!(
            DemoDirectory.authenticate("ADMIN@hospital.com", "admin123"),
            Err(SessionError::InvalidCredentials)
        );
    }

    #[test]
    fn quick_login_has_no_viewer_account() {
        assert!(DemoDirectory.quick_login(Role::Technician).is_some());
        assert!(DemoDirectory.quick_login(Role::Viewer).is_none());
    }
}
