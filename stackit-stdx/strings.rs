//! String matching helpers.

/// Case-insensitive prefix test, comparing char by char so no lowercased
/// copies of either side are allocated. Uses full Unicode lowercasing, which
/// may expand a single char into several.
pub fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
  let mut text_chars = text.chars().flat_map(char::to_lowercase);
  let mut prefix_chars = prefix.chars().flat_map(char::to_lowercase);
  loop {
    match (prefix_chars.next(), text_chars.next()) {
      (None, _) => return true,
      (Some(_), None) => return false,
      (Some(p), Some(t)) if p != t => return false,
      _ => {},
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_prefix_always_matches() {
    assert!(starts_with_ignore_case("alice", ""));
    assert!(starts_with_ignore_case("", ""));
  }

  #[test]
  fn case_insensitive() {
    assert!(starts_with_ignore_case("Alice", "al"));
    assert!(starts_with_ignore_case("alice", "AL"));
    assert!(starts_with_ignore_case("ADMIN1", "admin1"));
  }

  #[test]
  fn prefix_not_substring() {
    assert!(!starts_with_ignore_case("Alice", "li"));
    assert!(!starts_with_ignore_case("Alice", "ce"));
  }

  #[test]
  fn prefix_longer_than_text() {
    assert!(!starts_with_ignore_case("al", "alice"));
  }

  #[test]
  fn non_ascii() {
    assert!(starts_with_ignore_case("Émile", "é"));
    assert!(starts_with_ignore_case("émile", "É"));
  }
}
