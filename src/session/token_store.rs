//! Persistent storage for the session bearer token.
//!
//! TRADE-OFFS
//! ==========
//! The token lives in plain `localStorage` under a single key: no expiry
//! validation, no encryption. Expiry is enforced server-side; an expired
//! token simply produces auth errors that force a logout. Non-browser
//! builds keep the token in a process-local cell so native tests observe
//! the same synchronous contract.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

const STORAGE_KEY: &str = "qriosity_token";

#[cfg(not(feature = "csr"))]
thread_local! {
    static FALLBACK_TOKEN: std::cell::RefCell<Option<String>> =
        const { std::cell::RefCell::new(None) };
}

/// Store `token`, replacing any previous value.
pub fn save(token: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, token);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        FALLBACK_TOKEN.with(|cell| *cell.borrow_mut() = Some(token.to_owned()));
    }
}

/// Read the stored token. Empty strings count as absent.
pub fn read() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage
            .get_item(STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }
    #[cfg(not(feature = "csr"))]
    {
        FALLBACK_TOKEN.with(|cell| cell.borrow().clone()).filter(|token| !token.is_empty())
    }
}

/// Remove the stored token. Idempotent.
pub fn clear() {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        FALLBACK_TOKEN.with(|cell| *cell.borrow_mut() = None);
    }
}
