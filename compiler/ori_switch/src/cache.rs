//! Process-wide cache of built switch sites.
//!
//! Each switch site is bootstrapped the first time it is reached and
//! reused for every later evaluation. Built sites are leaked, so a cached
//! site is a plain `&'static` reference that never needs a lock to use.
//!
//! # Thread Safety
//!
//! Lookups take a read lock. A miss builds the site without holding any
//! lock, then publishes it under the write lock. If another thread
//! published the same site first, its site is returned and the fresh one
//! is dropped, so every caller sees the same site.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::site::DispatchSite;
use crate::SwitchError;

/// Identity of one switch site in the program.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SiteId(u64);

impl SiteId {
    pub const fn new(raw: u64) -> Self {
        SiteId(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Built switch sites, keyed by [`SiteId`].
pub struct SiteCache {
    sites: RwLock<FxHashMap<SiteId, &'static DispatchSite>>,
}

impl SiteCache {
    pub fn new() -> Self {
        SiteCache {
            sites: RwLock::new(FxHashMap::default()),
        }
    }

    /// The published site for `id`, if any.
    pub fn get(&self, id: SiteId) -> Option<&'static DispatchSite> {
        self.sites.read().get(&id).copied()
    }

    /// The published site for `id`, building it with `build` on first use.
    ///
    /// A failed build publishes nothing; the next call tries again.
    pub fn get_or_bootstrap<F>(
        &self,
        id: SiteId,
        build: F,
    ) -> Result<&'static DispatchSite, SwitchError>
    where
        F: FnOnce() -> Result<DispatchSite, SwitchError>,
    {
        // Fast path: already published
        if let Some(site) = self.get(id) {
            return Ok(site);
        }

        // Slow path: build outside the lock
        let built = build()?;

        let mut guard = self.sites.write();
        if let Some(&site) = guard.get(&id) {
            tracing::trace!(site = id.raw(), "switch site published concurrently, reusing");
            return Ok(site);
        }
        let site: &'static DispatchSite = Box::leak(Box::new(built));
        guard.insert(id, site);
        tracing::trace!(site = id.raw(), shape = %site.shape(), "published switch site");
        Ok(site)
    }

    /// Number of published sites.
    pub fn len(&self) -> usize {
        self.sites.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SiteCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
