//! Collaborator interface to the host rich-text editor.
//!
//! The editor itself — caret model, text storage, change tracking, key
//! binding registration — lives outside this crate. A session consumes it
//! through [`EditorHost`] and the small value types here; the handle passed
//! to [`attach`](crate::handlers::mention::MentionSession::attach) is
//! typically a cheap clone onto the real editor (an `Rc`, a JS binding, a
//! component reference).

use ropey::Rope;
use thiserror::Error;

/// Who caused a content change. Hosts must report edits applied through
/// [`EditorHost::apply_edit`] (and any other programmatic mutation) as
/// `Programmatic` so the engine does not re-run detection on text it just
/// inserted itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOrigin {
  User,
  Programmatic,
}

/// Screen-space bounding box of a single char cell, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaretRect {
  pub x:      f32,
  pub y:      f32,
  pub width:  f32,
  pub height: f32,
}

impl CaretRect {
  pub fn bottom(&self) -> f32 {
    self.y + self.height
  }
}

/// Visible size of the surface the overlay is positioned within, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
  pub width:  f32,
  pub height: f32,
}

/// One logical replacement of a text span together with the caret position
/// to land on afterwards. Editors must apply all three parts as a single
/// mutation so their change tracking observes one coherent edit, not a
/// delete followed by an insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanEdit {
  /// First char offset of the replaced span (inclusive).
  pub start: usize,
  /// End of the replaced span (exclusive).
  pub end:   usize,
  /// Replacement text.
  pub text:  String,
  /// Char offset the caret is placed at after the replacement.
  pub caret: usize,
}

#[derive(Debug, Error)]
pub enum EditError {
  #[error("edit span {start}..{end} exceeds document length {len}")]
  OutOfBounds {
    start: usize,
    end:   usize,
    len:   usize,
  },
  #[error("editor rejected the edit: {0}")]
  Rejected(String),
}

/// Keys the host registers interceptors for while a session is attached.
/// Only these five ever reach [`on_key`]; everything else goes straight to
/// the editor.
///
/// [`on_key`]: crate::handlers::mention::MentionSession::on_key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
  Up,
  Down,
  Enter,
  Tab,
  Escape,
}

/// Outcome of offering an input event to the engine. `Consumed` means the
/// editor's native handling must be suppressed; `Ignored` means the event
/// falls through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
  Consumed,
  Ignored,
}

/// Capabilities the engine consumes from the host editor.
///
/// All methods are called on the UI thread, between discrete input events;
/// none may block.
pub trait EditorHost {
  /// Full plain text of the document. `Rope` clones are cheap, so editors
  /// backed by a rope return a clone; others convert on demand.
  fn text(&self) -> Rope;

  /// Char offset of the caret, or `None` when the editor has no usable
  /// selection (unfocused, mid-teardown). `None` is not an error; the
  /// engine treats it as "no active token".
  fn caret(&self) -> Option<usize>;

  /// Screen box of the char cell at `offset`, or `None` when the offset is
  /// not currently laid out (scrolled out of view).
  fn caret_rect(&self, offset: usize) -> Option<CaretRect>;

  /// Visible viewport the overlay must stay within.
  fn viewport(&self) -> Viewport;

  /// Apply one atomic span replacement. The resulting content-change event
  /// must be reported with [`EditOrigin::Programmatic`].
  fn apply_edit(&mut self, edit: SpanEdit) -> Result<(), EditError>;
}
