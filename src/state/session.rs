//! Durable session store for the logged-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth for "who is logged in". The record persists under
//! one localStorage key so it survives reloads; the request gateway reads it
//! to stamp the authorization header and the route guard reads it to gate
//! admin views. This module is the only writer of that key.
//!
//! ERROR HANDLING
//! ==============
//! A malformed stored record is treated as logged-out and purged rather than
//! surfaced; every read path is infallible.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::net::types::LoginResponse;
use crate::util::storage;

/// localStorage key holding the JSON session record.
pub const STORAGE_KEY: &str = "user";

/// Older builds stored the bare token separately; logout clears it too.
const LEGACY_TOKEN_KEY: &str = "token";

/// Role flags as issued by the backend at login.
///
/// Elevated access is decided here, once; views ask `is_admin()` instead of
/// re-deriving it from the raw flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleFlags {
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_superuser: bool,
}

impl RoleFlags {
    /// Staff and superusers both count as administrators.
    pub fn is_admin(self) -> bool {
        self.is_staff || self.is_superuser
    }
}

/// The locally persisted session record.
///
/// Wire-compatible with the flattened `{ ...user, token }` object the login
/// view has always stored, so existing sessions survive an upgrade.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Login username.
    pub username: String,
    /// Contact email, when the account has one.
    #[serde(default)]
    pub email: Option<String>,
    #[serde(flatten)]
    pub roles: RoleFlags,
    /// Bearer credential presented on every request.
    pub token: String,
}

impl Session {
    /// Build the session record from a login/signup response.
    pub fn from_login(response: LoginResponse) -> Self {
        Self {
            username: response.user.username,
            email: response.user.email,
            roles: RoleFlags {
                is_staff: response.user.is_staff,
                is_superuser: response.user.is_superuser,
            },
            token: response.token,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.roles.is_admin()
    }
}

// The credential must never reach a log line or the UI.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("roles", &self.roles)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Read the persisted session, or `None` when anonymous.
///
/// Never panics: a record that fails to parse is purged and reported as
/// anonymous, so one corrupt write cannot wedge the client.
pub fn current() -> Option<Session> {
    let raw = storage::load_raw(STORAGE_KEY)?;
    match serde_json::from_str::<Session>(&raw) {
        Ok(session) => Some(session),
        Err(_) => {
            // Deliberately not logging the raw value; it may hold a token.
            #[cfg(feature = "hydrate")]
            log::warn!("discarding malformed session record");
            storage::remove(STORAGE_KEY);
            None
        }
    }
}

pub(crate) fn persist(session: &Session) {
    storage::save_json(STORAGE_KEY, session);
}

pub(crate) fn purge() {
    storage::remove(STORAGE_KEY);
    storage::remove(LEGACY_TOKEN_KEY);
}

/// Reactive handle over the session record, provided once via context.
///
/// `login`/`logout` keep storage and the in-tab signal in lockstep; other
/// tabs converge through [`install_cross_tab_sync`].
#[derive(Clone, Copy)]
pub struct SessionState {
    user: RwSignal<Option<Session>>,
}

impl SessionState {
    /// Initialize from whatever the store currently holds.
    pub fn new() -> Self {
        Self {
            user: RwSignal::new(current()),
        }
    }

    /// Persist `session` and expose it to every in-tab consumer. Always
    /// replaces any prior record.
    pub fn login(&self, session: Session) {
        persist(&session);
        self.user.set(Some(session));
    }

    /// Drop the record. Calling this twice is the same as calling it once.
    pub fn logout(&self) {
        purge();
        self.user.set(None);
    }

    /// Reactive read of the current record.
    pub fn get(&self) -> Option<Session> {
        self.user.get()
    }

    /// Non-reactive read, for event handlers and async continuations.
    pub fn get_untracked(&self) -> Option<Session> {
        self.user.get_untracked()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Subscribe to session changes made by *other* tabs.
///
/// Backed by the browser storage event under `hydrate`; a no-op elsewhere,
/// so non-browser builds keep the same contract without browser vocabulary
/// leaking into callers.
pub fn on_change<F>(callback: F)
where
    F: Fn(Option<Session>) + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return;
        };
        let handler = Closure::<dyn Fn(web_sys::StorageEvent)>::new(move |ev: web_sys::StorageEvent| {
            match ev.key() {
                // A `None` key means the whole storage area was cleared.
                None => callback(None),
                Some(key) if key == STORAGE_KEY => callback(current()),
                Some(_) => {}
            }
        });
        let _ = window.add_event_listener_with_callback("storage", handler.as_ref().unchecked_ref());
        handler.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = callback;
    }
}

/// Keep `state` in sync with logins/logouts performed in other tabs.
pub fn install_cross_tab_sync(state: SessionState) {
    on_change(move |session| state.user.set(session));
}
