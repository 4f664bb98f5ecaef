//! Process-local TTL cache behind an injected trait.
//!
//! Three stores with fixed expiry classes (5 min / 30 min / 2 h), mirroring
//! the tiers the rest of the app keys against. Entries expire passively and
//! the whole cache dies with the process; every cached value is recomputable,
//! so the cache is an optimization, never a correctness boundary.

use std::collections::HashMap;
use std::future::Future;
use std::sync::RwLock;
use std::time::Duration;

use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::time::Instant;
use tracing::debug;

/// Expiry class for cached values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TtlClass {
    Short = 0,
    Medium = 1,
    Long = 2,
}

impl TtlClass {
    pub fn duration(self) -> Duration {
        match self {
            TtlClass::Short => Duration::from_secs(5 * 60),
            TtlClass::Medium => Duration::from_secs(30 * 60),
            TtlClass::Long => Duration::from_secs(2 * 60 * 60),
        }
    }
}

/// Injected cache dependency, carried in `AppState` as `Arc<dyn Cache>`.
///
/// Object-safe over `serde_json::Value`; use [`get_or_compute`] for typed
/// access. Implementations must be safe to share across request tasks.
pub trait Cache: Send + Sync {
    fn get(&self, class: TtlClass, key: &str) -> Option<Value>;
    fn set(&self, class: TtlClass, key: &str, value: Value);
    fn delete(&self, class: TtlClass, key: &str);
    fn flush(&self);
}

struct Entry {
    value: Value,
    expires_at: Instant,
}

/// In-memory [`Cache`] implementation with one store per TTL class.
pub struct MemoryCache {
    stores: [RwLock<HashMap<String, Entry>>; 3],
    ttls: [Duration; 3],
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::with_ttls([
            TtlClass::Short.duration(),
            TtlClass::Medium.duration(),
            TtlClass::Long.duration(),
        ])
    }

    /// Construct with explicit per-class TTLs. Tests use this to avoid
    /// waiting out real expiry windows.
    pub fn with_ttls(ttls: [Duration; 3]) -> Self {
        Self {
            stores: [
                RwLock::new(HashMap::new()),
                RwLock::new(HashMap::new()),
                RwLock::new(HashMap::new()),
            ],
            ttls,
        }
    }

    fn store(&self, class: TtlClass) -> &RwLock<HashMap<String, Entry>> {
        &self.stores[class as usize]
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl Cache for MemoryCache {
    fn get(&self, class: TtlClass, key: &str) -> Option<Value> {
        let now = Instant::now();
        let store = self.store(class);
        {
            let guard = store.read().expect("cache lock poisoned");
            match guard.get(key) {
                Some(entry) if entry.expires_at > now => return Some(entry.value.clone()),
                Some(_) => {} // expired, fall through to remove
                None => return None,
            }
        }
        store.write().expect("cache lock poisoned").remove(key);
        None
    }

    fn set(&self, class: TtlClass, key: &str, value: Value) {
        let now = Instant::now();
        let expires_at = now + self.ttls[class as usize];
        let mut guard = self.store(class).write().expect("cache lock poisoned");
        // Opportunistic sweep so dead entries don't accumulate between reads.
        guard.retain(|_, entry| entry.expires_at > now);
        guard.insert(key.to_string(), Entry { value, expires_at });
    }

    fn delete(&self, class: TtlClass, key: &str) {
        self.store(class)
            .write()
            .expect("cache lock poisoned")
            .remove(key);
    }

    fn flush(&self) {
        for store in &self.stores {
            store.write().expect("cache lock poisoned").clear();
        }
    }
}

/// Returns the cached value for `key`, or computes, stores, and returns it.
///
/// Concurrent callers that miss on the same key are NOT deduplicated; both may
/// run `compute`. Every call site recomputes idempotent, side-effect-free
/// values, so a duplicate computation costs latency only.
pub async fn get_or_compute<T, F, Fut>(
    cache: &dyn Cache,
    class: TtlClass,
    key: &str,
    compute: F,
) -> Result<T>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    if let Some(value) = cache.get(class, key) {
        match serde_json::from_value(value) {
            Ok(decoded) => {
                debug!("cache hit: {key}");
                return Ok(decoded);
            }
            // A value that no longer decodes is a stale schema; drop it.
            Err(_) => cache.delete(class, key),
        }
    }

    debug!("cache miss: {key}");
    let computed = compute().await;
    cache.set(class, key, serde_json::to_value(&computed)?);
    Ok(computed)
}

/// Builds a deterministic cache key: `scope:subject` or `scope:subject:hash`.
///
/// The payload hash is a 32-bit shift-and-subtract fold rendered base-36 —
/// low-collision, not cryptographic. Collisions are acceptable because a wrong
/// hit only serves another valid computed value of the same shape.
pub fn build_cache_key(scope: &str, subject: &str, payload: Option<&str>) -> String {
    match payload {
        Some(p) if !p.is_empty() => format!("{scope}:{subject}:{}", hash_payload(p)),
        _ => format!("{scope}:{subject}"),
    }
}

fn hash_payload(payload: &str) -> String {
    let mut hash: i32 = 0;
    for c in payload.chars() {
        // hash = (hash << 5) - hash + c, folded to 32 bits
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(c as i32);
    }
    to_base36(hash.unsigned_abs())
}

fn to_base36(mut n: u32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).expect("base36 digits are ASCII")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn fast_cache() -> MemoryCache {
        MemoryCache::with_ttls([
            Duration::from_millis(50),
            Duration::from_millis(100),
            Duration::from_millis(200),
        ])
    }

    #[test]
    fn test_set_then_get_returns_value() {
        let cache = MemoryCache::new();
        cache.set(TtlClass::Medium, "k", json!({"a": 1}));
        assert_eq!(cache.get(TtlClass::Medium, "k"), Some(json!({"a": 1})));
    }

    #[test]
    fn test_classes_are_isolated() {
        let cache = MemoryCache::new();
        cache.set(TtlClass::Short, "k", json!(1));
        assert_eq!(cache.get(TtlClass::Medium, "k"), None);
        assert_eq!(cache.get(TtlClass::Short, "k"), Some(json!(1)));
    }

    #[test]
    fn test_delete_removes_entry() {
        let cache = MemoryCache::new();
        cache.set(TtlClass::Long, "k", json!("v"));
        cache.delete(TtlClass::Long, "k");
        assert_eq!(cache.get(TtlClass::Long, "k"), None);
    }

    #[test]
    fn test_flush_clears_all_classes() {
        let cache = MemoryCache::new();
        cache.set(TtlClass::Short, "a", json!(1));
        cache.set(TtlClass::Medium, "b", json!(2));
        cache.set(TtlClass::Long, "c", json!(3));
        cache.flush();
        assert_eq!(cache.get(TtlClass::Short, "a"), None);
        assert_eq!(cache.get(TtlClass::Medium, "b"), None);
        assert_eq!(cache.get(TtlClass::Long, "c"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_expires_after_ttl() {
        let cache = fast_cache();
        cache.set(TtlClass::Short, "k", json!("v"));
        assert!(cache.get(TtlClass::Short, "k").is_some());

        tokio::time::advance(Duration::from_millis(60)).await;
        assert_eq!(cache.get(TtlClass::Short, "k"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_or_compute_invokes_compute_once_within_ttl() {
        let cache = fast_cache();
        let calls = AtomicUsize::new(0);

        for _ in 0..2 {
            let value: String = get_or_compute(&cache, TtlClass::Medium, "k", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                "computed".to_string()
            })
            .await
            .unwrap();
            assert_eq!(value, "computed");
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_or_compute_recomputes_after_expiry() {
        let cache = fast_cache();
        let calls = AtomicUsize::new(0);

        let compute = || async {
            calls.fetch_add(1, Ordering::SeqCst);
            42_u32
        };
        let _: u32 = get_or_compute(&cache, TtlClass::Medium, "k", compute)
            .await
            .unwrap();

        tokio::time::advance(Duration::from_millis(150)).await;

        let _: u32 = get_or_compute(&cache, TtlClass::Medium, "k", || async {
            calls.fetch_add(1, Ordering::SeqCst);
            42_u32
        })
        .await
        .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_build_cache_key_without_payload() {
        assert_eq!(
            build_cache_key("career-reasoning", "user-1", None),
            "career-reasoning:user-1"
        );
    }

    #[test]
    fn test_build_cache_key_empty_payload_is_ignored() {
        assert_eq!(build_cache_key("s", "u", Some("")), "s:u");
    }

    #[test]
    fn test_build_cache_key_is_deterministic() {
        let a = build_cache_key("s", "u", Some("Data Scientist,DevOps Engineer"));
        let b = build_cache_key("s", "u", Some("Data Scientist,DevOps Engineer"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_build_cache_key_differs_by_payload() {
        let a = build_cache_key("s", "u", Some("python"));
        let b = build_cache_key("s", "u", Some("rust"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_hash_payload_is_base36() {
        let hash = hash_payload("some payload");
        assert!(!hash.is_empty());
        assert!(hash
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_to_base36_zero() {
        assert_eq!(to_base36(0), "0");
    }

    #[test]
    fn test_to_base36_known_values() {
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }
}
