//! Filtering the directory against a mention query and tracking the active
//! candidate under keyboard navigation.

use std::sync::Arc;

use smallvec::SmallVec;
use stackit_stdx::strings::starts_with_ignore_case;

use crate::core::directory::Identity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
  Next,
  Previous,
}

/// The bounded, ordered set of identities matching the current query, plus
/// the active cursor. Holds an `Arc` snapshot of the directory so entries
/// stay valid even if the cache is replaced mid-session.
///
/// While non-empty there is always exactly one active entry; an empty list
/// has none.
#[derive(Debug, Clone)]
pub struct CandidateList {
  snapshot: Arc<Vec<Identity>>,
  matches:  SmallVec<[u32; 8]>,
  active:   usize,
}

/// Filter `snapshot` by case-insensitive prefix match of `query` against
/// the handle, preserving directory order and truncating to `limit`. No
/// relevance scoring; an empty query yields the first `limit` entries.
pub fn filter(snapshot: Arc<Vec<Identity>>, query: &str, limit: usize) -> CandidateList {
  let mut matches = SmallVec::new();
  for (index, identity) in snapshot.iter().enumerate() {
    if matches.len() == limit {
      break;
    }
    if starts_with_ignore_case(&identity.handle, query) {
      matches.push(index as u32);
    }
  }
  CandidateList {
    snapshot,
    matches,
    active: 0,
  }
}

impl CandidateList {
  pub fn is_empty(&self) -> bool {
    self.matches.is_empty()
  }

  pub fn len(&self) -> usize {
    self.matches.len()
  }

  pub fn get(&self, index: usize) -> Option<&Identity> {
    let directory_index = *self.matches.get(index)? as usize;
    self.snapshot.get(directory_index)
  }

  pub fn iter(&self) -> impl Iterator<Item = &Identity> + '_ {
    self
      .matches
      .iter()
      .filter_map(|&index| self.snapshot.get(index as usize))
  }

  pub fn active_index(&self) -> usize {
    self.active
  }

  /// The active identity, `None` only when the list is empty.
  pub fn active(&self) -> Option<&Identity> {
    self.get(self.active)
  }

  /// Point the active cursor at `index`. Returns `false` (and changes
  /// nothing) when `index` is out of range.
  pub fn set_active(&mut self, index: usize) -> bool {
    if index >= self.matches.len() {
      return false;
    }
    self.active = index;
    true
  }

  /// Move the active cursor one step, wrapping around both ends. No-op on
  /// an empty list.
  pub fn advance(&mut self, direction: Direction) {
    let len = self.matches.len();
    if len == 0 {
      return;
    }
    self.active = match direction {
      Direction::Next => (self.active + 1) % len,
      Direction::Previous => (self.active + len - 1) % len,
    };
  }
}
