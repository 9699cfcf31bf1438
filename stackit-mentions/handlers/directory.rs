//! One-shot background load of the mention directory.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::task::JoinHandle;

use crate::core::directory::{
  DirectoryCache,
  Identity,
};

/// Transport for the user-listing endpoint. The whole list is fetched in
/// one read request — no pagination, no server-side filtering — and
/// filtered client-side afterwards. The error shape is the host's business,
/// so the result is an `anyhow::Result`.
#[async_trait]
pub trait DirectoryProvider: Send + Sync {
  async fn fetch_directory(&self) -> anyhow::Result<Vec<Identity>>;
}

/// Fetch the directory once in the background and swap it into `cache`.
///
/// Failures are logged and leave the cache empty: autocomplete silently
/// yields no candidates, nothing else degrades. There is no retry and no
/// cancellation; a response arriving after the user already started typing
/// simply populates the cache for subsequent keystrokes.
///
/// Returns `None` when called outside a tokio runtime (unrelated unit
/// tests construct sessions without one), in which case the cache stays
/// empty.
pub fn spawn_directory_fetch(
  provider: Arc<dyn DirectoryProvider>,
  cache: Arc<DirectoryCache>,
) -> Option<JoinHandle<()>> {
  if tokio::runtime::Handle::try_current().is_err() {
    return None;
  }
  Some(tokio::spawn(async move {
    match provider.fetch_directory().await {
      Ok(identities) => {
        log::debug!("mention directory loaded, {} identities", identities.len());
        cache.replace(identities);
      },
      Err(err) => {
        log::warn!("could not load mention directory: {err:#}");
      },
    }
  }))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::directory::Role;

  struct StaticProvider(Vec<Identity>);

  #[async_trait]
  impl DirectoryProvider for StaticProvider {
    async fn fetch_directory(&self) -> anyhow::Result<Vec<Identity>> {
      Ok(self.0.clone())
    }
  }

  struct FailingProvider;

  #[async_trait]
  impl DirectoryProvider for FailingProvider {
    async fn fetch_directory(&self) -> anyhow::Result<Vec<Identity>> {
      Err(anyhow::anyhow!("503 service unavailable"))
    }
  }

  fn identity(handle: &str) -> Identity {
    Identity {
      handle: handle.to_string(),
      role:   Role::Standard,
    }
  }

  #[tokio::test]
  async fn fetch_populates_cache() {
    let cache = Arc::new(DirectoryCache::new());
    let provider = Arc::new(StaticProvider(vec![identity("alice"), identity("bob")]));
    let handle = spawn_directory_fetch(provider, Arc::clone(&cache)).unwrap();
    handle.await.unwrap();
    assert_eq!(cache.len(), 2);
  }

  #[tokio::test]
  async fn fetch_failure_leaves_cache_empty() {
    let cache = Arc::new(DirectoryCache::new());
    let handle = spawn_directory_fetch(Arc::new(FailingProvider), Arc::clone(&cache)).unwrap();
    handle.await.unwrap();
    assert!(cache.is_empty());
  }

  #[test]
  fn no_runtime_means_no_task() {
    let cache = Arc::new(DirectoryCache::new());
    assert!(spawn_directory_fetch(Arc::new(FailingProvider), cache).is_none());
  }
}
