//! Route guard.
//!
//! Evaluated on every navigation attempt; nothing is cached, since the
//! session may change between renders.

use dpm_model::{Role, Session};

/// Outcome of a guard check. Unauthorized navigation is a redirect, not an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    Allow,
    /// Not signed in
    RedirectToLogin,
    /// Signed in, but the role is not permitted here
    RedirectToDefault,
}

/// Decide whether `session` may enter a route requiring `required_roles`.
///
/// An empty `required_roles` admits every signed-in role.
pub fn authorize(session: &Session, required_roles: &[Role]) -> Access {
    let Some(role) = session.role() else {
        return Access::RedirectToLogin;
    };
    if !required_roles.is_empty() && !required_roles.contains(&role) {
        return Access::RedirectToDefault;
    }
    Access::Allow
}

#[cfg(test)]
mod tests {
    use super::*;
    use dpm_model::User;

    fn signed_in(role: Role) -> Session {
        Session::signed_in(User::new("Test User", "test@hospital.com", role))
    }

    #[test]
    fn anonymous_always_goes_to_login() {
        let anon = Session::anonymous();
        assert_eq!(authorize(&anon, &[]), Access::RedirectToLogin);
        assert_eq!(
            authorize(&anon, &[Role::Administrator]),
            Access::RedirectToLogin
        );
        assert_eq!(authorize(&anon, Role::all()), Access::RedirectToLogin);
    }

    #[test]
    fn role_mismatch_goes_to_default() {
        assert_eq!(
            authorize(&signed_in(Role::Technician), &[Role::Administrator]),
            Access::RedirectToDefault
        );
        assert_eq!(
            authorize(&signed_in(Role::Administrator), &[Role::Administrator]),
            Access::Allow
        );
    }

    #[test]
    fn unrestricted_admits_every_role() {
        for role in Role::all() {
            assert_eq!(authorize(&signed_in(*role), &[]), Access::Allow);
        }
    }

    #[test]
    fn multi_role_restriction() {
        let required = [Role::Radiologist, Role::Administrator];
        assert_eq!(authorize(&signed_in(Role::Radiologist), &required), Access::Allow);
        assert_eq!(
            authorize(&signed_in(Role::Viewer), &required),
            Access::RedirectToDefault
        );
    }
}
