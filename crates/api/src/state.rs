use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use marquee_core::store::MovieStore;

use crate::config::ServerConfig;
use crate::error::AppError;

/// Shared handle to the in-memory movie store.
///
/// The store itself is synchronous; the lock gives each handler exclusive
/// (write) or shared (read) access so every store operation runs to
/// completion before the next. Guards are never held across an `.await`.
pub type SharedMovieStore = Arc<RwLock<MovieStore>>;

/// State shared by every handler through axum's `State` extractor.
///
/// Cloning is cheap; both fields sit behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The movie collection, shared across handlers.
    pub store: SharedMovieStore,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build fresh state with an empty store.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(MovieStore::new())),
            config: Arc::new(config),
        }
    }

    /// Acquire a read guard on the movie store.
    pub fn store_read(&self) -> Result<RwLockReadGuard<'_, MovieStore>, AppError> {
        self.store.read().map_err(poisoned)
    }

    /// Acquire a write guard on the movie store.
    pub fn store_write(&self) -> Result<RwLockWriteGuard<'_, MovieStore>, AppError> {
        self.store.write().map_err(poisoned)
    }
}

/// A poisoned lock means a handler panicked mid-mutation; the error surfaces
/// as a sanitized 500.
fn poisoned<T>(_: PoisonError<T>) -> AppError {
    AppError::InternalError("movie store lock poisoned".to_string())
}
