//! AppContext - process-wide application state handle
//!
//! One logical store instance per running process. Consumers reach it
//! through [`AppContext::current`], which fails fast when the context has
//! not been installed yet: that is a programming error (wiring ran out of
//! order), not a recoverable condition.

use crate::catalog::Catalog;
use crate::store::AppStore;
use std::sync::{Mutex, MutexGuard, OnceLock};

static CONTEXT: OnceLock<AppContext> = OnceLock::new();

/// Shared application state: the read-only catalog and the mutable store
#[derive(Debug)]
pub struct AppContext {
    catalog: Catalog,
    store: Mutex<AppStore>,
}

impl AppContext {
    pub fn new(catalog: Catalog, store: AppStore) -> Self {
        Self {
            catalog,
            store: Mutex::new(store),
        }
    }

    /// Install this context as the process-wide instance.
    ///
    /// Returns the installed reference, or the context back if one was
    /// already installed.
    pub fn install(self) -> Result<&'static AppContext, AppContext> {
        CONTEXT.set(self)?;
        Ok(CONTEXT.get().expect("context just installed"))
    }

    /// The installed context.
    ///
    /// # Panics
    ///
    /// Panics when called before [`AppContext::install`].
    pub fn current() -> &'static AppContext {
        CONTEXT
            .get()
            .expect("app context accessed before AppContext::install")
    }

    /// The installed context, or `None` before installation
    pub fn try_current() -> Option<&'static AppContext> {
        CONTEXT.get()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Exclusive access to the store.
    ///
    /// The core is single-threaded (spec'd as run-to-completion event
    /// handling); the mutex only exists because the handle is `'static`.
    pub fn store(&self) -> MutexGuard<'_, AppStore> {
        self.store.lock().expect("store mutex poisoned")
    }
}
