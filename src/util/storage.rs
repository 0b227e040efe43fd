//! Persisted token storage.
//!
//! The session token lives under a single key that must survive restarts.
//! The store takes the storage as an injected dependency so tests (and
//! non-browser builds) can substitute [`MemoryStorage`] for the browser's
//! localStorage.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "account_client_token";

/// One named key holding the raw bearer token.
pub trait TokenStorage {
    /// Read the persisted token, if any.
    fn get(&self) -> Option<String>;
    /// Persist the token, replacing any previous value.
    fn set(&self, token: &str);
    /// Remove the persisted token.
    fn delete(&self);
}

/// Browser localStorage-backed token storage.
///
/// Storage failures (no window, quota, privacy mode) are swallowed: a
/// token that cannot be persisted simply will not survive the restart.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl TokenStorage for LocalStorage {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window()?;
            let storage = window.local_storage().ok().flatten()?;
            storage.get_item(STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(STORAGE_KEY, token);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn delete(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.remove_item(STORAGE_KEY);
                }
            }
        }
    }
}

/// Shared-handle storage, for when the application root keeps its own
/// handle to the same storage it hands the store.
impl<T: TokenStorage + ?Sized> TokenStorage for std::rc::Rc<T> {
    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn set(&self, token: &str) {
        (**self).set(token);
    }

    fn delete(&self) {
        (**self).delete();
    }
}

/// In-memory token storage for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    token: std::cell::RefCell<Option<String>>,
}

impl MemoryStorage {
    /// Storage pre-seeded with a token, as if persisted by a prior run.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { token: std::cell::RefCell::new(Some(token.to_owned())) }
    }
}

impl TokenStorage for MemoryStorage {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
    }

    fn delete(&self) {
        *self.token.borrow_mut() = None;
    }
}
