//! Detection of the in-progress mention token at the caret.

use ropey::RopeSlice;
use stackit_stdx::chars::{
  char_breaks_mention,
  char_is_word,
};

/// The span from a triggering "@" (inclusive) to the caret (exclusive), in
/// char offsets, plus the query typed so far. Derived from the document on
/// every content change and never stored across edits.
///
/// Invariants: `start <= end`, the char at `start` is `@`, and no
/// whitespace or line break occurs between `start + 1` and `end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionToken {
  pub start: usize,
  pub end:   usize,
  pub query: String,
}

/// Scan backward from `cursor` for the nearest "@" and return the token it
/// anchors, or `None` when the caret is not inside a candidate mention.
///
/// A whitespace or line-break char between the caret and the nearest "@"
/// breaks the token. An empty query ("@" immediately before the caret) is a
/// valid token. A `cursor` past the end of the document means the caret
/// state is out of sync with the text; no token is reported.
///
/// With `require_boundary`, the char before the "@" must not be a word
/// char — start-of-text, whitespace, and punctuation all qualify. Without
/// it, any position triggers.
pub fn detect(text: RopeSlice, cursor: usize, require_boundary: bool) -> Option<MentionToken> {
  if cursor > text.len_chars() {
    return None;
  }

  let mut start = None;
  let mut reversed_query = String::new();
  let mut offset = cursor;
  for ch in text.chars_at(cursor).reversed() {
    offset -= 1;
    if ch == '@' {
      start = Some(offset);
      break;
    }
    if char_breaks_mention(ch) {
      return None;
    }
    reversed_query.push(ch);
  }
  let start = start?;

  if require_boundary && start > 0 && char_is_word(text.char(start - 1)) {
    return None;
  }

  Some(MentionToken {
    start,
    end: cursor,
    query: reversed_query.chars().rev().collect(),
  })
}
