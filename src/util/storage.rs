//! Access-token persistence behind an explicit adapter.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session manager mutates in-memory state through pure transitions and
//! invokes this adapter at defined points (after a successful login, when a
//! token is invalidated, on logout). The trait seam lets session tests run
//! against an in-memory store instead of a browser.

/// Single `localStorage` key holding the opaque access token.
pub const TOKEN_KEY: &str = "videotube_access_token";

/// Reads and writes the persisted access token.
pub trait TokenStore {
    /// The stored token, if any.
    fn load(&self) -> Option<String>;
    /// Persist `token`, replacing any previous value.
    fn save(&self, token: &str);
    /// Remove the stored token.
    fn clear(&self);
}

/// Browser-backed token store. All methods no-op outside `hydrate` so SSR
/// always renders the signed-out shell.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokens;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for BrowserTokens {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(TOKEN_KEY, token);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}

/// In-memory token store for unit tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryTokens {
    token: std::cell::RefCell<Option<String>>,
    saves: std::cell::Cell<u32>,
}

#[cfg(test)]
impl MemoryTokens {
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        *store.token.borrow_mut() = Some(token.to_owned());
        store
    }

    /// Number of `save` calls observed.
    pub fn save_count(&self) -> u32 {
        self.saves.get()
    }
}

#[cfg(test)]
impl TokenStore for MemoryTokens {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) {
        self.saves.set(self.saves.get() + 1);
        *self.token.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}
