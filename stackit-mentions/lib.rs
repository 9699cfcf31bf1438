//! Mention autocomplete for the StackIt client.
//!
//! The engine watches an abstract rich-text editor for an in-progress
//! "@mention" token at the caret, filters a session-scoped user directory,
//! drives a transient suggestion overlay, and commits the chosen handle back
//! into the document as a single edit.
//!
//! The host wires three collaborator seams:
//! - [`EditorHost`] — document text, caret, screen geometry, atomic edits.
//! - [`OverlaySurface`] — the floating candidate list's actual rendering.
//! - [`DirectoryProvider`] — the one-shot fetch of mentionable identities.
//!
//! [`MentionSession::attach`] ties the three together; the host forwards
//! content-change, key, pointer, blur and layout events into the session and
//! honors the [`EventResult`] it returns for intercepted keys. Sessions are
//! independent, so a page with several editable fields attaches one session
//! per field, usually sharing a single [`DirectoryCache`].

pub mod config;
pub mod core;
pub mod editor;
pub mod handlers;
pub mod ui;

pub use crate::{
  config::MentionConfig,
  core::{
    candidates::{
      CandidateList,
      Direction,
      filter,
    },
    directory::{
      DirectoryCache,
      Identity,
      Role,
      parse_directory,
    },
    token::{
      MentionToken,
      detect,
    },
  },
  editor::{
    CaretRect,
    EditError,
    EditOrigin,
    EditorHost,
    EventResult,
    Key,
    SpanEdit,
    Viewport,
  },
  handlers::{
    directory::{
      DirectoryProvider,
      spawn_directory_fetch,
    },
    mention::MentionSession,
  },
  ui::{
    MenuMetrics,
    OverlaySurface,
    menu::{
      MentionMenu,
      MenuEntry,
    },
    positioning::{
      MenuPosition,
      PositionBias,
    },
  },
};
