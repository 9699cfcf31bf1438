//! Presentation protocol for the suggestion overlay.
//!
//! The engine owns *what* the overlay shows ([`menu::MentionMenu`]) and
//! *where* it goes ([`positioning`]); the host owns the actual painting
//! behind [`OverlaySurface`].

pub mod menu;
pub mod positioning;

use crate::ui::{
  menu::MenuEntry,
  positioning::MenuPosition,
};

/// Pixel metrics the surface renders candidate rows with, used to size the
/// overlay before placing it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuMetrics {
  pub width:        f32,
  pub entry_height: f32,
}

/// The host-side rendering of the overlay.
///
/// Contract: `open` creates a *fresh* overlay at the given position — above
/// all other interactive content, never stealing input focus from the
/// editor — tearing down any overlay a previous `open` created. `close`
/// removes the overlay entirely (not merely hides it), so no listeners
/// survive a show/hide cycle; it is a no-op when nothing is open.
pub trait OverlaySurface {
  fn metrics(&self) -> MenuMetrics;

  fn open(&mut self, position: MenuPosition, entries: &[MenuEntry], active: usize);

  /// Move the visual highlight to `index` within the currently open
  /// overlay.
  fn set_active(&mut self, index: usize);

  fn close(&mut self);
}
