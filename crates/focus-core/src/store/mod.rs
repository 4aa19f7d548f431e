//! Key-value persistence and change notification.
//!
//! Every piece of FOCUS state that survives a restart goes through the
//! [`KvStore`] trait as a named string entry, JSON-encoded at the boundary
//! when structured. The trait is injectable so tests substitute
//! [`MemoryStore`] for the SQLite-backed default.

mod bus;
mod memory;
mod sqlite;

pub use bus::ChangeBus;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;

use crate::error::StoreError;

/// Persisted key names.
///
/// These are the exact names the browser build used in local storage; they
/// are kept byte-for-byte so an export/import of the old data keeps working.
pub mod keys {
    pub const TIMER_MODE: &str = "focus_timer_mode";
    pub const TIMER_TIME: &str = "focus_timer_time";
    pub const CUSTOM_MINUTES: &str = "focus_custom_minutes";
    pub const STATS: &str = "focus_stats_data";
    pub const GOALS: &str = "focus_goals";
    pub const LAST_SESSION_DATE: &str = "focus-last-date";
    pub const SOUND_TRACK: &str = "focus_sound_track_id";
}

/// String-keyed persistence port.
///
/// Implementations are synchronous and small-value; failures are possible
/// but rare, and callers holding non-critical data use the `*_lossy`
/// helpers to degrade silently instead of propagating.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Read a value, treating any store failure as absence.
    fn get_lossy(&self, key: &str) -> Option<String> {
        self.get(key).ok().flatten()
    }
}

/// Read and decode a JSON value; malformed or missing entries read as
/// `None` rather than surfacing an error.
pub fn get_json<T: DeserializeOwned>(store: &dyn KvStore, key: &str) -> Option<T> {
    let raw = store.get_lossy(key)?;
    serde_json::from_str(&raw).ok()
}

/// Encode and write a JSON value.
pub fn set_json<T: Serialize>(
    store: &dyn KvStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value).map_err(|e| StoreError::QueryFailed(e.to_string()))?;
    store.set(key, &raw)
}

/// Returns `~/.config/focus[-dev]/` based on FOCUS_ENV.
///
/// Set FOCUS_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the config directory cannot be created.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("FOCUS_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("focus-dev")
    } else {
        base_dir.join("focus")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
