//! Engine configuration.

use serde::Deserialize;

/// Tunables for a mention session. Hosts usually deserialize this from the
/// relevant table of their config file; everything defaults to the behavior
/// of the shipped StackIt client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct MentionConfig {
  /// Upper bound on candidates handed to the overlay. The directory is
  /// filtered in order and truncated to this many entries.
  pub max_candidates:         usize,
  /// Require the char before the trigger "@" to be a non-word char
  /// (start-of-text, whitespace, or punctuation). Off by default: any
  /// position is accepted as a trigger.
  pub require_token_boundary: bool,
  /// Whether Tab commits the active candidate like Enter does. Hosts that
  /// need Tab for focus traversal turn this off.
  pub tab_commits:            bool,
}

impl Default for MentionConfig {
  fn default() -> Self {
    Self {
      max_candidates:         5,
      require_token_boundary: false,
      tab_commits:            true,
    }
  }
}
