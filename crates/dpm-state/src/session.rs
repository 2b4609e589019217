//! Session store - who is signed in.
//!
//! The store is constructed from a storage handle with
//! [`SessionStore::restore`], and every mutation is written back under
//! [`AUTH_KEY`] before subscribers are notified.

use std::rc::Rc;

use dpm_model::{LoginRequest, PersistedSession, Role, Session};

use crate::error::{SessionError, StorageError};
use crate::storage::{AUTH_KEY, KeyValueStore};
use crate::subscribers::{SubscriptionId, Subscribers};

/// Single source of truth for the signed-in user.
pub struct SessionStore {
    storage: Rc<dyn KeyValueStore>,
    session: Session,
    subscribers: Subscribers<Session>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &self.session)
            .field("subscribers", &self.subscribers)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Build the store from persisted state.
    ///
    /// Absent, unreadable or corrupt state yields a signed-out session.
    pub fn restore(storage: Rc<dyn KeyValueStore>) -> Self {
        let session = match read_session(storage.as_ref()) {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("{e}, starting signed out");
                Session::anonymous()
            }
        };
        tracing::debug!(authenticated = session.is_authenticated(), "Session restored");
        Self {
            storage,
            session,
            subscribers: Subscribers::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn role(&self) -> Option<Role> {
        self.session.role()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Sign in.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidRole`] if the request names an unknown
    /// role; the current session is left untouched in that case.
    pub fn login(&mut self, request: LoginRequest) -> Result<(), SessionError> {
        let user = request.into_user().map_err(SessionError::InvalidRole)?;
        tracing::info!(role = %user.role, "Signed in");
        tracing::debug!(email = %user.email, "Signed-in account");
        self.replace(Session::signed_in(user));
        Ok(())
    }

    /// Sign out.
    pub fn logout(&mut self) {
        if self.session.is_authenticated() {
            tracing::info!("Signed out");
        }
        self.replace(Session::anonymous());
    }

    pub fn subscribe(&mut self, callback: impl Fn(&Session) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn replace(&mut self, session: Session) {
        let changed = self.session != session;
        self.session = session;
        self.persist();
        if changed {
            self.subscribers.notify(&self.session);
        }
    }

    fn persist(&self) {
        let result = serde_json::to_string(&self.session.to_persisted())
            .map_err(|e| StorageError::write(AUTH_KEY, e))
            .and_then(|json| self.storage.set(AUTH_KEY, &json));
        if let Err(e) = result {
            tracing::warn!("Failed to save session: {e}");
        }
    }
}

/// Read the persisted session without falling back.
///
/// # Errors
///
/// Returns [`StorageError`] when the backend fails or the stored JSON does
/// not decode.
pub fn read_session(storage: &dyn KeyValueStore) -> Result<Session, StorageError> {
    let Some(raw) = storage.get(AUTH_KEY)? else {
        return Ok(Session::anonymous());
    };
    let persisted: PersistedSession =
        serde_json::from_str(&raw).map_err(|e| StorageError::corrupt(AUTH_KEY, e))?;
    Ok(persisted.into_session())
}
