//! In-process code cache for development and tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;

use vs_core::errors::TransportFault;
use vs_core::services::CodeCacheTrait;

/// Minimum spacing between sweeps of expired entries on the write path
pub const SWEEP_INTERVAL: Duration = Duration::from_secs(30);

/// Code cache held in a process-local map
///
/// An expired entry is dropped when it is next read. Writes also sweep the
/// whole map at most once per [`SWEEP_INTERVAL`], so entries that are never
/// read again do not accumulate.
pub struct MemoryCodeCache {
    inner: Mutex<Inner>,
}

struct Inner {
    entries: HashMap<String, (String, Instant)>,
    next_sweep: Instant,
}

impl Inner {
    fn purge(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, (_, expires_at)| *expires_at > now);
        self.next_sweep = now + SWEEP_INTERVAL;
        before - self.entries.len()
    }
}

impl Default for MemoryCodeCache {
    fn default() -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: HashMap::new(),
                next_sweep: Instant::now() + SWEEP_INTERVAL,
            }),
        }
    }
}

impl MemoryCodeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, including expired ones not yet swept
    pub fn len(&self) -> usize {
        self.inner.lock().map(|inner| inner.entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove expired entries, returning how many were dropped
    pub fn purge_expired(&self) -> usize {
        match self.inner.lock() {
            Ok(mut inner) => inner.purge(Instant::now()),
            Err(_) => 0,
        }
    }
}

fn poisoned() -> TransportFault {
    TransportFault::Other("memory cache lock poisoned".to_string())
}

#[async_trait]
impl CodeCacheTrait for MemoryCodeCache {
    async fn get(&self, key: &str) -> Result<Option<String>, TransportFault> {
        let mut inner = self.inner.lock().map_err(|_| poisoned())?;
        match inner.entries.get(key) {
            Some((value, expires_at)) if *expires_at > Instant::now() => Ok(Some(value.clone())),
            Some(_) => {
                inner.entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        ttl_seconds: u64,
    ) -> Result<bool, TransportFault> {
        let now = Instant::now();
        let expires_at = now.checked_add(Duration::from_secs(ttl_seconds)).ok_or_else(|| {
            TransportFault::Other(format!("ttl of {}s is out of range", ttl_seconds))
        })?;

        let mut inner = self.inner.lock().map_err(|_| poisoned())?;
        if now >= inner.next_sweep {
            inner.purge(now);
        }
        inner
            .entries
            .insert(key.to_string(), (value.to_string(), expires_at));
        Ok(true)
    }
}
