#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::avatar;

/// Options offered for the `sex` profile field. Seeded into every new
/// session state and never mutated afterwards.
pub const SEX_OPTIONS: [&str; 3] = ["male", "female", "non binary"];

/// The current user's session: profile fields, server-assigned id, and
/// the bearer token. A non-empty token is the sole authentication signal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub name: Option<String>,
    pub second_name: Option<String>,
    pub email: Option<String>,
    pub birth: Option<String>,
    pub city: Option<String>,
    pub sex: Option<String>,
    pub interests: Option<String>,
    /// Choices for the `sex` field, independent of authentication state.
    pub items: Vec<String>,
    pub id: Option<String>,
    pub token: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            name: None,
            second_name: None,
            email: None,
            birth: None,
            city: None,
            sex: None,
            interests: None,
            items: SEX_OPTIONS.iter().map(|s| (*s).to_owned()).collect(),
            id: None,
            token: None,
        }
    }
}

impl SessionState {
    /// Whether the session holds a usable credential.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Gravatar URL derived from the current email.
    ///
    /// A missing email hashes the literal string `"undefined"`, so the
    /// anonymous avatar is stable rather than absent.
    #[must_use]
    pub fn avatar_url(&self) -> String {
        avatar::gravatar_url(self.email.as_deref())
    }
}
