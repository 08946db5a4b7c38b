use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Cached sheet payloads live this long before a refetch.
pub const CACHE_DURATION_MS: u64 = 5 * 60 * 1000;

const KEY_PREFIX: &str = "cache_";

#[derive(Debug, Clone)]
struct CacheEntry {
    value: serde_json::Value,
    stored_at: u64,
}

/// In-memory TTL cache for parsed sheet configurations.
///
/// Entries older than [`CACHE_DURATION_MS`] are invisible to [`get`] but
/// stay stored so [`get_stale`] can serve them when a refetch fails.
///
/// [`get`]: SessionCache::get
/// [`get_stale`]: SessionCache::get_stale
pub struct SessionCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn storage_key(key: &str) -> String {
    format!("{}{}", KEY_PREFIX, key)
}

impl SessionCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached value for `key` if it is still fresh.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get_at(key, now_millis())
    }

    /// An entry is fresh strictly below [`CACHE_DURATION_MS`]; at exactly
    /// the duration it is already expired.
    pub(crate) fn get_at<T: DeserializeOwned>(&self, key: &str, now: u64) -> Option<T> {
        let entries = self.entries.lock().ok()?;
        let entry = entries.get(&storage_key(key))?;

        if now.saturating_sub(entry.stored_at) >= CACHE_DURATION_MS {
            tracing::debug!("Cache entry '{}' expired", key);
            return None;
        }

        match serde_json::from_value(entry.value.clone()) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Cache entry '{}' failed to deserialize: {}", key, e);
                None
            }
        }
    }

    /// Returns the cached value for `key` regardless of age.
    ///
    /// Fallback path for when a refetch fails and stale data beats none.
    pub fn get_stale<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let entries = self.entries.lock().ok()?;
        let entry = entries.get(&storage_key(key))?;

        match serde_json::from_value(entry.value.clone()) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Cache entry '{}' failed to deserialize: {}", key, e);
                None
            }
        }
    }

    /// Stores `value` under `key` with the current time as its birth.
    ///
    /// Cache writes never fail the caller; an unserializable value is
    /// logged and skipped.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        self.set_at(key, value, now_millis());
    }

    pub(crate) fn set_at<T: Serialize>(&self, key: &str, value: &T, now: u64) {
        let json = match serde_json::to_value(value) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to cache '{}': {}", key, e);
                return;
            }
        };

        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(
                storage_key(key),
                CacheEntry {
                    value: json,
                    stored_at: now,
                },
            );
        }
    }

    /// Removes the entry for `key`, if any.
    pub fn clear(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(&storage_key(key));
        }
    }

    /// Removes every cache entry.
    pub fn clear_all(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.retain(|k, _| !k.starts_with(KEY_PREFIX));
        }
    }
}

impl Default for SessionCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get_fresh() {
        let cache = SessionCache::new();
        cache.set_at("hero", &"payload".to_string(), 1_000);
        let got: Option<String> = cache.get_at("hero", 1_000 + CACHE_DURATION_MS - 1);
        assert_eq!(got.as_deref(), Some("payload"));
    }

    #[test]
    fn test_get_after_ttl_expires() {
        let cache = SessionCache::new();
        cache.set_at("hero", &"payload".to_string(), 1_000);
        let got: Option<String> = cache.get_at("hero", 1_000 + CACHE_DURATION_MS);
        assert!(got.is_none());
    }

    #[test]
    fn test_expired_entry_still_available_stale() {
        let cache = SessionCache::new();
        cache.set_at("hero", &"payload".to_string(), 1_000);
        let fresh: Option<String> = cache.get_at("hero", 1_000 + CACHE_DURATION_MS * 2);
        assert!(fresh.is_none());
        let stale: Option<String> = cache.get_stale("hero");
        assert_eq!(stale.as_deref(), Some("payload"));
    }

    #[test]
    fn test_clear_removes_entry() {
        let cache = SessionCache::new();
        cache.set_at("hero", &1u32, 1_000);
        cache.clear("hero");
        let got: Option<u32> = cache.get_at("hero", 1_000);
        assert!(got.is_none());
        assert!(cache.get_stale::<u32>("hero").is_none());
    }

    #[test]
    fn test_clear_all_removes_everything() {
        let cache = SessionCache::new();
        cache.set_at("hero", &1u32, 1_000);
        cache.set_at("menu", &2u32, 1_000);
        cache.clear_all();
        assert!(cache.get_stale::<u32>("hero").is_none());
        assert!(cache.get_stale::<u32>("menu").is_none());
    }

    #[test]
    fn test_set_refreshes_age() {
        let cache = SessionCache::new();
        cache.set_at("hero", &"old".to_string(), 1_000);
        cache.set_at("hero", &"new".to_string(), 1_000 + CACHE_DURATION_MS);
        let got: Option<String> = cache.get_at("hero", 1_000 + CACHE_DURATION_MS + 1);
        assert_eq!(got.as_deref(), Some("new"));
    }

    #[test]
    fn test_wrong_type_yields_none() {
        let cache = SessionCache::new();
        cache.set_at("hero", &"not-a-number".to_string(), 1_000);
        let got: Option<u32> = cache.get_at("hero", 1_000);
        assert!(got.is_none());
    }
}
