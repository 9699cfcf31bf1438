//! The suggestion menu's state, one owned value per show.

use crate::{
  core::{
    candidates::{
      CandidateList,
      Direction,
    },
    directory::{
      Identity,
      Role,
    },
    token::MentionToken,
  },
  editor::CaretRect,
};

/// Display data for one candidate row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
  pub handle: String,
  pub role:   Role,
}

/// Everything a visible overlay is about: the token being completed, the
/// candidates, and the screen anchor of the token's "@".
///
/// A menu is constructed when the overlay appears and dropped when it
/// hides; it is never reused across show/hide cycles, so stale anchors or
/// listeners cannot leak from one appearance into the next.
#[derive(Debug, Clone)]
pub struct MentionMenu {
  token:      MentionToken,
  candidates: CandidateList,
  anchor:     CaretRect,
}

impl MentionMenu {
  /// `candidates` must be non-empty; an empty list means the overlay hides
  /// instead of opening.
  pub fn new(token: MentionToken, candidates: CandidateList, anchor: CaretRect) -> Self {
    debug_assert!(!candidates.is_empty());
    Self {
      token,
      candidates,
      anchor,
    }
  }

  pub fn token(&self) -> &MentionToken {
    &self.token
  }

  pub fn anchor(&self) -> CaretRect {
    self.anchor
  }

  pub fn set_anchor(&mut self, anchor: CaretRect) {
    self.anchor = anchor;
  }

  pub fn len(&self) -> usize {
    self.candidates.len()
  }

  pub fn is_empty(&self) -> bool {
    self.candidates.is_empty()
  }

  pub fn active_index(&self) -> usize {
    self.candidates.active_index()
  }

  pub fn active_identity(&self) -> Option<&Identity> {
    self.candidates.active()
  }

  pub fn advance(&mut self, direction: Direction) {
    self.candidates.advance(direction);
  }

  pub fn set_active(&mut self, index: usize) -> bool {
    self.candidates.set_active(index)
  }

  pub fn entries(&self) -> Vec<MenuEntry> {
    self
      .candidates
      .iter()
      .map(|identity| MenuEntry {
        handle: identity.handle.clone(),
        role:   identity.role,
      })
      .collect()
  }
}
