//! The mention autocomplete session: one attached editor, one overlay, one
//! explicit two-state machine.
//!
//! Every entry point runs synchronously on the host's UI thread, so a
//! content change and everything derived from it (detection, filtering,
//! presentation) completes before the host processes its next event; no
//! torn intermediate state is ever observable.

use std::{
  mem,
  sync::Arc,
};

use ropey::RopeSlice;

use crate::{
  config::MentionConfig,
  core::{
    candidates::{
      Direction,
      filter,
    },
    directory::DirectoryCache,
    token::{
      MentionToken,
      detect,
    },
  },
  editor::{
    EditOrigin,
    EditorHost,
    EventResult,
    Key,
    SpanEdit,
  },
  ui::{
    OverlaySurface,
    menu::MentionMenu,
    positioning::{
      PositionBias,
      position_menu_near_anchor,
    },
  },
};

/// Session state. The overlay is on screen iff the session is `Suggesting`,
/// which in turn requires a detected token and a non-empty candidate list —
/// key interceptors consult this state instead of null-checking a UI
/// handle.
enum AutocompleteState {
  Idle,
  Suggesting(MentionMenu),
}

/// A disposable autocomplete session bound to one editable field.
///
/// Created by [`attach`](Self::attach), torn down by [`detach`](Self::detach)
/// or by dropping it; either way a visible overlay is removed. Sessions are
/// independent — attach one per editable field, sharing the directory cache.
///
/// The host is expected to wire:
/// - content-change events (with their [`EditOrigin`]) to
///   [`on_content_change`](Self::on_content_change),
/// - interceptors for the five [`Key`]s to [`on_key`](Self::on_key),
///   suppressing the editor's native handling when it returns
///   [`EventResult::Consumed`],
/// - overlay row *presses* (pointer-down, not click — a click arrives after
///   the editor's blur handling has already torn the overlay down) to
///   [`on_pointer_down`](Self::on_pointer_down),
/// - editor focus loss to [`on_focus_lost`](Self::on_focus_lost),
/// - window resize/scroll to [`on_layout_change`](Self::on_layout_change).
pub struct MentionSession<E: EditorHost, S: OverlaySurface> {
  editor:    E,
  surface:   S,
  directory: Arc<DirectoryCache>,
  config:    MentionConfig,
  state:     AutocompleteState,
}

impl<E: EditorHost, S: OverlaySurface> MentionSession<E, S> {
  pub fn attach(
    editor: E,
    surface: S,
    directory: Arc<DirectoryCache>,
    config: MentionConfig,
  ) -> Self {
    Self {
      editor,
      surface,
      directory,
      config,
      state: AutocompleteState::Idle,
    }
  }

  pub fn is_suggesting(&self) -> bool {
    matches!(self.state, AutocompleteState::Suggesting(_))
  }

  /// Handle of the currently active candidate, while suggesting.
  pub fn active_handle(&self) -> Option<&str> {
    match &self.state {
      AutocompleteState::Suggesting(menu) => {
        menu.active_identity().map(|identity| identity.handle.as_str())
      },
      AutocompleteState::Idle => None,
    }
  }

  pub fn editor(&self) -> &E {
    &self.editor
  }

  pub fn editor_mut(&mut self) -> &mut E {
    &mut self.editor
  }

  pub fn surface(&self) -> &S {
    &self.surface
  }

  /// A content change happened in the editor. Programmatic changes — our
  /// own commits included — are ignored, otherwise reacting to them would
  /// re-run detection on text the engine just inserted.
  pub fn on_content_change(&mut self, origin: EditOrigin) {
    if origin == EditOrigin::Programmatic {
      return;
    }
    self.refresh();
  }

  /// Offer an intercepted key to the session. While idle every key falls
  /// through to the editor untouched.
  pub fn on_key(&mut self, key: Key) -> EventResult {
    if !self.is_suggesting() {
      return EventResult::Ignored;
    }
    match key {
      Key::Down => {
        self.advance(Direction::Next);
        EventResult::Consumed
      },
      Key::Up => {
        self.advance(Direction::Previous);
        EventResult::Consumed
      },
      Key::Enter => {
        self.commit();
        EventResult::Consumed
      },
      Key::Tab if self.config.tab_commits => {
        self.commit();
        EventResult::Consumed
      },
      Key::Tab => EventResult::Ignored,
      // close the menu, but let other Escape handlers run too
      Key::Escape => {
        self.dismiss();
        EventResult::Ignored
      },
    }
  }

  /// A candidate row was pressed. Selects it and commits in one step.
  pub fn on_pointer_down(&mut self, index: usize) {
    let AutocompleteState::Suggesting(menu) = &mut self.state else {
      return;
    };
    if !menu.set_active(index) {
      log::debug!("pointer selection {index} out of range, ignoring");
      return;
    }
    self.commit();
  }

  /// The editor lost focus; the overlay goes away without committing.
  pub fn on_focus_lost(&mut self) {
    self.dismiss();
  }

  /// The caret's screen position may have moved (window resize, scroll).
  /// Re-anchors a visible overlay, or dismisses it when the token is no
  /// longer laid out.
  pub fn on_layout_change(&mut self) {
    let start = match &self.state {
      AutocompleteState::Suggesting(menu) => menu.token().start,
      AutocompleteState::Idle => return,
    };
    match self.editor.caret_rect(start) {
      Some(anchor) => {
        if let AutocompleteState::Suggesting(menu) = &mut self.state {
          menu.set_anchor(anchor);
        }
        self.open_overlay();
      },
      None => self.dismiss(),
    }
  }

  /// Tear the session down. Equivalent to dropping it; spelled out so call
  /// sites can make the disposal visible.
  pub fn detach(mut self) {
    self.dismiss();
  }

  /// Re-derive the whole autocomplete state from the document and caret.
  fn refresh(&mut self) {
    let Some(cursor) = self.editor.caret() else {
      // no usable selection: treated as "no active token"
      self.dismiss();
      return;
    };
    let text = self.editor.text();
    let Some(token) = detect(text.slice(..), cursor, self.config.require_token_boundary) else {
      self.dismiss();
      return;
    };
    let candidates = filter(self.directory.load(), &token.query, self.config.max_candidates);
    if candidates.is_empty() {
      self.dismiss();
      return;
    }
    let Some(anchor) = self.editor.caret_rect(token.start) else {
      self.dismiss();
      return;
    };
    self.state = AutocompleteState::Suggesting(MentionMenu::new(token, candidates, anchor));
    self.open_overlay();
  }

  /// Present the current menu: any previous overlay is closed first so
  /// every show gets a freshly constructed one.
  fn open_overlay(&mut self) {
    let AutocompleteState::Suggesting(menu) = &self.state else {
      return;
    };
    let metrics = self.surface.metrics();
    let position = position_menu_near_anchor(
      menu.anchor(),
      metrics.width,
      metrics.entry_height * menu.len() as f32,
      self.editor.viewport(),
      Some(PositionBias::Below),
    );
    self.surface.close();
    self.surface.open(position, &menu.entries(), menu.active_index());
  }

  fn advance(&mut self, direction: Direction) {
    if let AutocompleteState::Suggesting(menu) = &mut self.state {
      menu.advance(direction);
      self.surface.set_active(menu.active_index());
    }
  }

  fn dismiss(&mut self) {
    if let AutocompleteState::Suggesting(_) =
      mem::replace(&mut self.state, AutocompleteState::Idle)
    {
      self.surface.close();
    }
  }

  /// Replace the token span with the active candidate's canonical mention
  /// text and park the caret after the trailing space, as one edit.
  ///
  /// The document may have changed between detection and commit, so the
  /// span is re-validated against the current text first; a stale token
  /// aborts the commit rather than clobbering unrelated text.
  fn commit(&mut self) {
    let state = mem::replace(&mut self.state, AutocompleteState::Idle);
    let AutocompleteState::Suggesting(menu) = state else {
      return;
    };
    self.surface.close();
    let Some(identity) = menu.active_identity().cloned() else {
      return;
    };
    let token = menu.token();
    let text = self.editor.text();
    if !token_still_valid(text.slice(..), token) {
      log::debug!("mention token went stale before commit, leaving document untouched");
      return;
    }
    let mention = format!("@{} ", identity.handle);
    let caret = token.start + mention.chars().count();
    let edit = SpanEdit {
      start: token.start,
      end: token.end,
      text: mention,
      caret,
    };
    if let Err(err) = self.editor.apply_edit(edit) {
      log::warn!("mention commit rejected by editor: {err}");
    }
  }
}

impl<E: EditorHost, S: OverlaySurface> Drop for MentionSession<E, S> {
  fn drop(&mut self) {
    self.dismiss();
  }
}

fn token_still_valid(text: RopeSlice, token: &MentionToken) -> bool {
  token.start <= token.end
    && token.end <= text.len_chars()
    && text.get_char(token.start) == Some('@')
}
