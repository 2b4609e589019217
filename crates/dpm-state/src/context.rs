//! Application context passed to views.
//!
//! Bundles the stores over one shared storage handle so views receive a
//! single constructed object instead of reaching for globals.

use std::rc::Rc;

use dpm_model::LoginRequest;

use crate::error::SessionError;
use crate::layout::{LayoutMessage, LayoutStore};
use crate::session::SessionStore;
use crate::storage::KeyValueStore;

#[derive(Debug)]
pub struct AppContext {
    pub session: SessionStore,
    pub layout: LayoutStore,
}

impl AppContext {
    /// Restore both stores from `storage`, probing the viewport once.
    pub fn restore(storage: Rc<dyn KeyValueStore>, viewport_width: u32) -> Self {
        Self {
            session: SessionStore::restore(Rc::clone(&storage)),
            layout: LayoutStore::restore(storage, viewport_width),
        }
    }

    /// Sign in.
    ///
    /// # Errors
    ///
    /// Propagates [`SessionError::InvalidRole`] from the session store.
    pub fn login(&mut self, request: LoginRequest) -> Result<(), SessionError> {
        self.session.login(request)
    }

    /// Confirmed logout: sign out and close the mobile drawer.
    pub fn logout(&mut self) {
        self.session.logout();
        self.layout.update(LayoutMessage::CloseMobileMenu);
    }
}
