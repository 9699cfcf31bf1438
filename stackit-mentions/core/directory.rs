//! The directory of mentionable identities.

use std::{
  collections::HashSet,
  sync::Arc,
};

use arc_swap::ArcSwap;
use serde::Deserialize;

/// Privilege class of an identity. The wire spellings of the user-listing
/// endpoint (`user`, `admin`, `ai`) are accepted as aliases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  #[default]
  #[serde(alias = "user")]
  Standard,
  #[serde(alias = "admin")]
  Moderator,
  #[serde(alias = "ai")]
  Automated,
}

/// One mentionable identity. Handles are case-preserving but matched
/// case-insensitively. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Identity {
  #[serde(alias = "username")]
  pub handle: String,
  #[serde(default)]
  pub role:   Role,
}

/// Session-scoped cache of the fetched directory.
///
/// The identity list is only ever replaced wholesale, never mutated in
/// place, so readers take lock-free `Arc` snapshots and a late-arriving
/// fetch response simply swaps in the full list for subsequent keystrokes.
/// Empty until a fetch succeeds; empty means "no candidates", not an error.
#[derive(Debug, Default)]
pub struct DirectoryCache {
  identities: ArcSwap<Vec<Identity>>,
}

impl DirectoryCache {
  pub fn new() -> Self {
    Self::default()
  }

  /// Snapshot of the current directory, in fetch order.
  pub fn load(&self) -> Arc<Vec<Identity>> {
    self.identities.load_full()
  }

  pub fn is_empty(&self) -> bool {
    self.identities.load().is_empty()
  }

  pub fn len(&self) -> usize {
    self.identities.load().len()
  }

  /// Replace the cache contents. Later entries whose handle collides
  /// case-insensitively with an earlier one are dropped, keeping first
  /// occurrence and original order.
  pub fn replace(&self, identities: Vec<Identity>) {
    let mut seen = HashSet::with_capacity(identities.len());
    let mut unique = Vec::with_capacity(identities.len());
    for identity in identities {
      if seen.insert(identity.handle.to_lowercase()) {
        unique.push(identity);
      } else {
        log::debug!("dropping duplicate mention handle {:?}", identity.handle);
      }
    }
    self.identities.store(Arc::new(unique));
  }
}

/// Decode the user-listing endpoint's JSON body into identities.
pub fn parse_directory(body: &str) -> serde_json::Result<Vec<Identity>> {
  serde_json::from_str(body)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn identity(handle: &str, role: Role) -> Identity {
    Identity {
      handle: handle.to_string(),
      role,
    }
  }

  #[test]
  fn starts_empty() {
    let cache = DirectoryCache::new();
    assert!(cache.is_empty());
    assert_eq!(cache.load().len(), 0);
  }

  #[test]
  fn replace_keeps_order() {
    let cache = DirectoryCache::new();
    cache.replace(vec![
      identity("carol", Role::Standard),
      identity("alice", Role::Standard),
      identity("bob", Role::Moderator),
    ]);
    let loaded = cache.load();
    let handles: Vec<_> = loaded.iter().map(|i| i.handle.as_str()).collect();
    assert_eq!(handles, ["carol", "alice", "bob"]);
  }

  #[test]
  fn replace_drops_case_insensitive_duplicates() {
    let cache = DirectoryCache::new();
    cache.replace(vec![
      identity("Alice", Role::Standard),
      identity("bob", Role::Standard),
      identity("alice", Role::Moderator),
    ]);
    let loaded = cache.load();
    let handles: Vec<_> = loaded.iter().map(|i| i.handle.as_str()).collect();
    // first occurrence wins, case preserved
    assert_eq!(handles, ["Alice", "bob"]);
    assert_eq!(loaded[0].role, Role::Standard);
  }

  #[test]
  fn parses_endpoint_payload() {
    let body = r#"[
      {"username": "alice", "role": "user"},
      {"username": "sam", "role": "admin"},
      {"username": "helpbot", "role": "ai"},
      {"username": "kim"}
    ]"#;
    let identities = parse_directory(body).unwrap();
    assert_eq!(identities.len(), 4);
    assert_eq!(identities[0].handle, "alice");
    assert_eq!(identities[0].role, Role::Standard);
    assert_eq!(identities[1].role, Role::Moderator);
    assert_eq!(identities[2].role, Role::Automated);
    assert_eq!(identities[3].role, Role::Standard);
  }

  #[test]
  fn parses_canonical_role_names() {
    let body = r#"[{"handle": "mod", "role": "moderator"}]"#;
    let identities = parse_directory(body).unwrap();
    assert_eq!(identities[0].role, Role::Moderator);
  }
}
