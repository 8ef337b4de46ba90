//! Application Context
//!
//! Provides the storage capability to components, so views never touch
//! browser globals directly and can be rendered against any backend.
//!
//! # Example
//! ```rust
//! // At the root:
//! use_context_provider(|| AppContext::new(BrowserStorage::local()));
//!
//! // In a component:
//! let ctx = use_context::<AppContext>();
//! let profile = resolve_profile(ctx.storage());
//! ```

use std::rc::Rc;

use crate::stores::storage::ProfileStorage;

#[derive(Clone)]
pub struct AppContext {
    storage: Rc<dyn ProfileStorage>,
}

impl AppContext {
    pub fn new(storage: impl ProfileStorage + 'static) -> Self {
        Self {
            storage: Rc::new(storage),
        }
    }

    /// Storage the profile page reads from
    pub fn storage(&self) -> &dyn ProfileStorage {
        self.storage.as_ref()
    }
}

// Contexts are equal when they share the same storage instance
impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.storage, &other.storage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::storage::{MemoryStorage, NoStorage};
    use crate::stores::user_profile::{resolve_profile, UserProfile, PROFILE_STORAGE_KEY};

    #[test]
    fn test_context_clones_share_storage() {
        let storage = MemoryStorage::with_item(
            PROFILE_STORAGE_KEY,
            r#"{"email":"c@d.e","fullName":"Lê C","phone":"0","address":"Hà Nội","isVerified":false}"#,
        );
        let ctx = AppContext::new(storage);
        let copy = ctx.clone();

        assert!(ctx == copy);
        assert!(ctx != AppContext::new(NoStorage));

        let a = resolve_profile(ctx.storage());
        let b = resolve_profile(copy.storage());
        assert_eq!(a, b);
        assert_eq!(a.full_name, "Lê C");
    }

    #[test]
    fn test_context_without_storage_yields_default() {
        let ctx = AppContext::new(NoStorage);
        assert_eq!(resolve_profile(ctx.storage()), UserProfile::fallback());
    }
}
