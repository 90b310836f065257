use std::path::Path;

use crate::assets::cache::{CachedResource, ResourceCache};
use crate::assets::decode;
use crate::assets::fetch::{HttpFetch, RemoteFetch};
use crate::assets::vars::VarTable;
use crate::foundation::error::InklineResult;

/// Resolves logical resource URLs into decoded, cached bitmaps.
///
/// The loader bundles the process-wide pieces of resource resolution into
/// one explicit context object: the decode cache, the placeholder variable
/// table, and the remote fetch capability. A fresh loader per test isolates
/// all of them.
///
/// A miss (absent local file plus non-200 or failed fetch, or undecodable
/// bytes) returns `None` and is never an error; callers substitute the
/// section's alt text. Not thread-safe; the owning thread serializes access.
pub struct ResourceLoader {
    cache: ResourceCache,
    vars: VarTable,
    fetch: Box<dyn RemoteFetch>,
}

impl std::fmt::Debug for ResourceLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceLoader")
            .field("cached_entries", &self.cache.len())
            .field("vars", &self.vars)
            .finish()
    }
}

impl ResourceLoader {
    /// Loader seeded with the process variable table and a default HTTP
    /// client.
    pub fn for_process() -> InklineResult<Self> {
        Ok(Self::new(VarTable::for_process(), Box::new(HttpFetch::new()?)))
    }

    /// Loader over explicit collaborators.
    pub fn new(vars: VarTable, fetch: Box<dyn RemoteFetch>) -> Self {
        Self {
            cache: ResourceCache::new(),
            vars,
            fetch,
        }
    }

    /// Define or replace a placeholder variable at runtime.
    pub fn add_variable(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.add_variable(name, value);
    }

    /// Read-only view of the decode cache.
    pub fn cache(&self) -> &ResourceCache {
        &self.cache
    }

    /// Resolve `logical_url` to a decoded resource.
    ///
    /// The cache is keyed by the original, unexpanded URL, so repeated
    /// references through the same placeholder-bearing string hit the cache
    /// without re-expansion. Resolution order on a miss: placeholder
    /// expansion, local file, one remote GET. Failures are not cached, so a
    /// later reference to the same URL retries automatically.
    #[tracing::instrument(skip(self))]
    pub fn load(&mut self, logical_url: &str) -> Option<CachedResource> {
        if let Some(hit) = self.cache.get(logical_url) {
            return Some(hit.clone());
        }

        let expanded = self.vars.expand(logical_url);
        let bytes = self.resolve_bytes(&expanded)?;
        let resource = match decode::decode_resource(&bytes) {
            Ok(resource) => resource,
            Err(err) => {
                tracing::warn!(url = logical_url, error = %err, "image decode failed");
                return None;
            }
        };

        self.cache.record_decode(logical_url);
        self.cache.insert(logical_url, resource.clone());
        Some(resource)
    }

    fn resolve_bytes(&self, expanded: &str) -> Option<Vec<u8>> {
        let path = Path::new(expanded);
        if path.exists() {
            match std::fs::read(path) {
                Ok(bytes) => return Some(bytes),
                Err(err) => {
                    tracing::warn!(path = expanded, error = %err, "local image read failed");
                    return None;
                }
            }
        }

        match self.fetch.get(expanded) {
            Ok(response) if response.is_success() => Some(response.body),
            Ok(response) => {
                tracing::debug!(
                    url = expanded,
                    status = response.status,
                    "remote image treated as missing"
                );
                None
            }
            Err(err) => {
                tracing::warn!(url = expanded, error = %err, "remote image fetch failed");
                None
            }
        }
    }
}
