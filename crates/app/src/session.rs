use client::ApiClient;
use dioxus::prelude::*;
use shared_types::Session;

/// localStorage key holding the serialized [`Session`].
const STORAGE_KEY: &str = "agri.session";

/// Signed-in identity shared through context.
///
/// `restored` flips to true once the persisted session has been read at
/// startup; route guards wait for it before deciding to redirect.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionState {
    pub session: Signal<Option<Session>>,
    pub restored: Signal<bool>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(None),
            restored: Signal::new(false),
        }
    }

    pub fn current(&self) -> Option<Session> {
        self.session.read().clone()
    }

    /// Store a fresh login and persist it.
    pub fn sign_in(&mut self, session: Session) {
        persist(&session);
        self.session.set(Some(session));
    }

    /// Forget the session. Storage is cleared by the caller that confirmed
    /// the logout.
    pub fn sign_out(&mut self) {
        self.session.set(None);
    }
}

pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

/// The signed-in session. Only call below the auth guard.
pub fn use_current_session() -> Session {
    let state = use_session();
    let session = state.session.read().clone();
    session.unwrap_or_else(|| Session {
        token: String::new(),
        user_id: String::new(),
        email: String::new(),
        phone: String::new(),
        role: Default::default(),
        display_name: String::new(),
    })
}

/// API client carrying the current session's token. Reading it inside a
/// loader's fetch subscribes the loader to session changes.
pub fn use_api() -> Memo<ApiClient> {
    use_context()
}

/// Read the persisted session, if any. Unreadable values are dropped.
pub async fn load_persisted() -> Option<Session> {
    let raw = document::eval(&format!("return localStorage.getItem('{STORAGE_KEY}');"))
        .join::<Option<String>>()
        .await
        .ok()
        .flatten()?;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            tracing::warn!(error = %e, "discarding unreadable stored session");
            clear_persisted();
            None
        }
    }
}

fn persist(session: &Session) {
    let Ok(json) = serde_json::to_string(session) else {
        return;
    };
    // Encode twice so the value lands in the script as a JS string literal.
    let Ok(literal) = serde_json::to_string(&json) else {
        return;
    };
    document::eval(&format!("localStorage.setItem('{STORAGE_KEY}', {literal});"));
}

pub fn clear_persisted() {
    document::eval(&format!("localStorage.removeItem('{STORAGE_KEY}');"));
}
