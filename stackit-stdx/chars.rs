//! Character classification for mention-token scanning.

/// Coarse classes a char can fall into while scanning around a caret.
#[derive(Debug, Eq, PartialEq)]
pub enum CharCategory {
  Whitespace,
  Eol,
  Word,
  Punctuation,
  Unknown,
}

pub fn categorize_char(ch: char) -> CharCategory {
  match ch {
    c if char_is_line_ending(c) => CharCategory::Eol,
    c if c.is_whitespace() => CharCategory::Whitespace,
    c if char_is_word(c) => CharCategory::Word,
    c if char_is_punctuation(c) => CharCategory::Punctuation,
    _ => CharCategory::Unknown,
  }
}

/// Line breaks recognized by the scanner, including the Unicode
/// separators that `char::is_whitespace` already covers. Kept as its own
/// predicate so callers can distinguish EOL from ordinary whitespace.
#[inline]
pub fn char_is_line_ending(ch: char) -> bool {
  matches!(
    ch,
    '\u{000A}' | '\u{000B}' | '\u{000C}' | '\u{000D}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
  )
}

/// Whether a char terminates an in-progress mention token. A mention query
/// may not span whitespace or a line break.
#[inline]
pub fn char_breaks_mention(ch: char) -> bool {
  char_is_line_ending(ch) || ch.is_whitespace()
}

#[inline]
pub fn char_is_word(ch: char) -> bool {
  ch.is_alphanumeric() || ch == '_'
}

#[inline]
pub fn char_is_punctuation(ch: char) -> bool {
  use unicode_general_category::{
    GeneralCategory,
    get_general_category,
  };

  matches!(
    get_general_category(ch),
    GeneralCategory::OtherPunctuation
      | GeneralCategory::OpenPunctuation
      | GeneralCategory::ClosePunctuation
      | GeneralCategory::InitialPunctuation
      | GeneralCategory::FinalPunctuation
      | GeneralCategory::ConnectorPunctuation
      | GeneralCategory::DashPunctuation
      | GeneralCategory::MathSymbol
      | GeneralCategory::CurrencySymbol
      | GeneralCategory::ModifierSymbol
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn breaks_on_space_and_newlines() {
    assert!(char_breaks_mention(' '));
    assert!(char_breaks_mention('\t'));
    assert!(char_breaks_mention('\n'));
    assert!(char_breaks_mention('\r'));
    assert!(char_breaks_mention('\u{2028}'));
    assert!(!char_breaks_mention('a'));
    assert!(!char_breaks_mention('@'));
    assert!(!char_breaks_mention('_'));
  }

  #[test]
  fn categories() {
    assert_eq!(categorize_char('\n'), CharCategory::Eol);
    assert_eq!(categorize_char(' '), CharCategory::Whitespace);
    assert_eq!(categorize_char('x'), CharCategory::Word);
    assert_eq!(categorize_char('7'), CharCategory::Word);
    assert_eq!(categorize_char('_'), CharCategory::Word);
    assert_eq!(categorize_char('('), CharCategory::Punctuation);
    assert_eq!(categorize_char('.'), CharCategory::Punctuation);
  }
}
