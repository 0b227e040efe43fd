//! The session store: owned state, persisted credential, and the four
//! account API actions.
//!
//! DESIGN
//! ======
//! `SessionStore` is constructed once by the application root and injected
//! into whatever needs it; there is no module-level singleton. Storage is
//! a trait so the browser's localStorage can be swapped for an in-memory
//! fake. Network actions split into a thin HTTP call (`net::api`) and a
//! pure response applier, so every state transition is testable without a
//! browser.
//!
//! Actions run sequentially per caller; nothing here serializes two
//! overlapping actions, and the last commit wins if a caller races them.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::error::SessionError;
use crate::net::api::{self, Method};
use crate::net::types::{AccountForm, AccountPayload, Credentials, failure_message};
use crate::state::session::SessionState;
use crate::util::clock;
use crate::util::storage::TokenStorage;
use crate::util::token;

/// Client-side store for the current user's session.
pub struct SessionStore<S: TokenStorage> {
    state: SessionState,
    storage: S,
    api_base: String,
}

impl<S: TokenStorage> SessionStore<S> {
    /// Build the store, restoring a session from persisted storage.
    ///
    /// `api_base` is prefixed to every endpoint path; pass `""` for
    /// same-origin requests. A persisted token that is absent, empty,
    /// expired, or unreadable yields an anonymous session without any
    /// network traffic; a live one restores `email`/`id` from its claims.
    #[must_use]
    pub fn new(storage: S, api_base: &str) -> Self {
        Self::restore_at(storage, api_base, clock::now_ms())
    }

    fn restore_at(storage: S, api_base: &str, now_ms: u64) -> Self {
        let mut store = Self {
            state: SessionState::default(),
            storage,
            api_base: api_base.to_owned(),
        };

        let Some(raw) = store.storage.get().filter(|t| !t.is_empty()) else {
            return store;
        };

        match token::decode_claims(&raw) {
            Ok(claims) if claims.expires_at_ms() >= now_ms => {
                store.state.email = Some(claims.email);
                store.state.id = Some(claims.id);
                store.state.token = Some(raw);
            }
            // Expired and unreadable credentials get the same full clear.
            Ok(_) => store.unset_user(),
            Err(e) => {
                log::warn!("discarding unreadable persisted token: {e}");
                store.unset_user();
            }
        }

        store
    }

    /// Read-only view of the session state.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Whether the session holds a usable credential.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    /// Gravatar URL for the current user.
    #[must_use]
    pub fn avatar_url(&self) -> String {
        self.state.avatar_url()
    }

    /// Drop the session: clears the profile, the in-memory token, and the
    /// persisted credential. No network call.
    pub fn logout(&mut self) {
        self.unset_user();
    }

    /// Authenticate with email and password via `POST /api/v1/auth`.
    ///
    /// On 2xx the response is the authoritative profile snapshot plus the
    /// issued token; both are applied and the token is persisted.
    ///
    /// # Errors
    ///
    /// [`SessionError::Server`] with the server's message on a rejected
    /// login, [`SessionError::Transport`]/[`SessionError::Decode`] on
    /// connection or payload problems. State is unchanged on failure.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), SessionError> {
        let body = credentials_body(email, password)?;
        let url = format!("{}/api/v1/auth", self.api_base);
        let (status, text) = api::send_json(Method::Post, &url, Some(&body), None).await?;
        self.apply_account_response(status, &text)
    }

    /// Register a new account via `POST /api/v1/account`.
    ///
    /// No token is issued; the profile from the response is applied and
    /// the user logs in afterwards.
    ///
    /// # Errors
    ///
    /// Same failure policy as [`Self::login`].
    pub async fn signup(&mut self, form: &AccountForm) -> Result<(), SessionError> {
        let body = form_body(form)?;
        let url = format!("{}/api/v1/account", self.api_base);
        let (status, text) = api::send_json(Method::Post, &url, Some(&body), None).await?;
        self.apply_profile_response(status, &text)
    }

    /// Update the account via `PUT /api/v1/account`.
    ///
    /// The bearer token is read fresh from persisted storage at call
    /// time; storage, not in-memory state, is the per-request credential
    /// source. A 2xx response may carry a refreshed token, which is then
    /// persisted in turn.
    ///
    /// # Errors
    ///
    /// Same failure policy as [`Self::login`].
    pub async fn save(&mut self, form: &AccountForm) -> Result<(), SessionError> {
        let body = form_body(form)?;
        let bearer = self.stored_token();
        let url = format!("{}/api/v1/account", self.api_base);
        let (status, text) =
            api::send_json(Method::Put, &url, Some(&body), bearer.as_deref()).await?;
        self.apply_account_response(status, &text)
    }

    /// Refresh the profile via `GET /api/v1/account`.
    ///
    /// On 2xx the profile is applied and the token left untouched. On ANY
    /// failure (server-reported, transport, decode) the whole session is
    /// cleared before the error propagates: a session the server will not
    /// confirm is treated as invalid.
    ///
    /// # Errors
    ///
    /// The underlying [`SessionError`], after the session clear.
    pub async fn fetch_account(&mut self) -> Result<(), SessionError> {
        let bearer = self.stored_token();
        let url = format!("{}/api/v1/account", self.api_base);
        match api::send_json(Method::Get, &url, None, bearer.as_deref()).await {
            Ok((status, text)) => self.apply_fetch_response(status, &text),
            Err(e) => {
                log::warn!("account fetch failed, clearing session: {e}");
                self.unset_user();
                Err(e)
            }
        }
    }

    // =========================================================================
    // RESPONSE APPLIERS
    // =========================================================================

    /// 2xx → profile snapshot plus token (login, save). The token
    /// mutation only runs when the response actually carries one, so a
    /// token-less 2xx save keeps the current credential.
    fn apply_account_response(&mut self, status: u16, body: &str) -> Result<(), SessionError> {
        let payload = parse_account(status, body)?;
        self.set_user(&payload);
        if let Some(tok) = payload.token.as_deref() {
            self.set_token(tok);
        }
        Ok(())
    }

    /// 2xx → profile snapshot only, token untouched (signup).
    fn apply_profile_response(&mut self, status: u16, body: &str) -> Result<(), SessionError> {
        let payload = parse_account(status, body)?;
        self.set_user(&payload);
        Ok(())
    }

    /// Fetch outcome: profile on success, full session clear on failure.
    fn apply_fetch_response(&mut self, status: u16, body: &str) -> Result<(), SessionError> {
        match parse_account(status, body) {
            Ok(payload) => {
                self.set_user(&payload);
                Ok(())
            }
            Err(e) => {
                log::warn!("account fetch rejected, clearing session: {e}");
                self.unset_user();
                Err(e)
            }
        }
    }

    // =========================================================================
    // MUTATIONS
    // =========================================================================

    /// Overwrite the identity fields from a payload. The payload is the
    /// authoritative snapshot: absent fields clear the local ones.
    fn set_user(&mut self, payload: &AccountPayload) {
        self.state.email = payload.email.clone();
        self.state.id = payload.id.clone();
        self.state.name = payload.name.clone();
        self.state.second_name = payload.second_name.clone();
        self.state.birth = payload.birth.clone();
        self.state.city = payload.city.clone();
        self.state.sex = payload.sex.clone();
        self.state.interests = payload.interests.clone();
    }

    /// Persist the token, then mirror it in memory.
    fn set_token(&mut self, token: &str) {
        self.storage.set(token);
        self.state.token = Some(token.to_owned());
    }

    /// Full clear: persisted credential, identity fields, and the
    /// in-memory token. `items` stays seeded.
    fn unset_user(&mut self) {
        self.storage.delete();
        self.state.email = None;
        self.state.id = None;
        self.state.name = None;
        self.state.second_name = None;
        self.state.birth = None;
        self.state.city = None;
        self.state.sex = None;
        self.state.interests = None;
        self.state.token = None;
    }

    /// Credential for authenticated requests, read fresh from storage.
    fn stored_token(&self) -> Option<String> {
        self.storage.get()
    }
}

/// Interpret a raw response: 2xx parses as an account payload, anything
/// else becomes a server error carrying the server's own message when the
/// body has a truthy `error` field, or a status-derived one otherwise.
fn parse_account(status: u16, body: &str) -> Result<AccountPayload, SessionError> {
    if (200..300).contains(&status) {
        serde_json::from_str(body)
            .map_err(|e| SessionError::Decode(format!("malformed account payload: {e}")))
    } else {
        match failure_message(body) {
            Some(message) => Err(SessionError::Server(message)),
            None => Err(SessionError::Server(format!("request failed with status {status}"))),
        }
    }
}

fn credentials_body(email: &str, password: &str) -> Result<serde_json::Value, SessionError> {
    serde_json::to_value(Credentials {
        email: email.to_owned(),
        password: password.to_owned(),
    })
    .map_err(|e| SessionError::Decode(e.to_string()))
}

fn form_body(form: &AccountForm) -> Result<serde_json::Value, SessionError> {
    serde_json::to_value(form).map_err(|e| SessionError::Decode(e.to_string()))
}
