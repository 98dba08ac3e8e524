//! Author/affiliation token parsing.
//!
//! An `Authors with affiliations` cell is a `;`-separated list of tokens of the form
//! `"name, affiliation"`. Only the first comma separates the name from the affiliation, so the
//! affiliation itself may contain further commas (`"R Patel, Saveetha University, Chennai"`).
//! A token without any comma carries no affiliation and is skipped.

use super::*;

/// Separator between tokens in an `Authors with affiliations` cell.
pub const TOKEN_SEPARATOR: char = ';';

/// Separator between the name and the affiliation inside a token.
pub const NAME_SEPARATOR: char = ',';

/// One author together with the affiliation listed for them.
///
/// # Examples
///
/// ```
/// use corresponder::author::AuthorAffiliationPair;
///
/// let pair: AuthorAffiliationPair = " R Patel, Saveetha University, Chennai ".parse().unwrap();
/// assert_eq!(pair.name, "R Patel");
/// assert_eq!(pair.affiliation, "Saveetha University, Chennai");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorAffiliationPair {
  /// Author's name as written in the token, trimmed
  pub name:        String,
  /// Everything after the first comma, trimmed
  pub affiliation: String,
}

impl AuthorAffiliationPair {
  /// Parses a single token, returning `None` if it has no comma.
  pub fn parse_token(token: &str) -> Option<Self> {
    let (name, affiliation) = token.trim().split_once(NAME_SEPARATOR)?;
    Some(Self { name: name.trim().to_string(), affiliation: affiliation.trim().to_string() })
  }
}

impl FromStr for AuthorAffiliationPair {
  type Err = CorresponderError;

  fn from_str(s: &str) -> Result<Self> {
    Self::parse_token(s).ok_or_else(|| CorresponderError::MalformedPair(s.trim().to_string()))
  }
}

impl Display for AuthorAffiliationPair {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}{} {}", self.name, NAME_SEPARATOR, self.affiliation)
  }
}

/// Splits a cell into its raw tokens, in order.
///
/// Empty and whitespace-only tokens are kept; they are dropped later by
/// [`AuthorAffiliationPair::parse_token`] because they contain no comma.
pub fn tokens(field: &str) -> impl Iterator<Item = &str> { field.split(TOKEN_SEPARATOR) }

/// Parses every well-formed pair of a cell, in order, skipping malformed tokens.
pub fn parse_pairs(field: &str) -> impl Iterator<Item = AuthorAffiliationPair> + '_ {
  tokens(field).filter_map(|token| {
    let pair = AuthorAffiliationPair::parse_token(token);
    if pair.is_none() && !token.trim().is_empty() {
      trace!("Skipping token without affiliation: {token:?}");
    }
    pair
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_splits_on_first_comma_only() {
    let pair = AuthorAffiliationPair::parse_token("R Patel, Saveetha University, Chennai").unwrap();
    assert_eq!(pair.name, "R Patel");
    assert_eq!(pair.affiliation, "Saveetha University, Chennai");
  }

  #[test]
  fn test_trims_both_parts() {
    let pair = AuthorAffiliationPair::parse_token("  A Kumar ,   Shivaji University  ").unwrap();
    assert_eq!(pair.name, "A Kumar");
    assert_eq!(pair.affiliation, "Shivaji University");
  }

  #[test]
  fn test_token_without_comma_is_skipped() {
    assert!(AuthorAffiliationPair::parse_token("Anonymous").is_none());
    assert!(AuthorAffiliationPair::parse_token("   ").is_none());
    assert!(AuthorAffiliationPair::parse_token("").is_none());
    let error = " Anonymous ".parse::<AuthorAffiliationPair>().unwrap_err();
    assert!(matches!(&error, CorresponderError::MalformedPair(token) if token == "Anonymous"));
    assert_eq!(error.to_string(), "\"Anonymous\" is not a \"name, affiliation\" pair");
  }

  #[test]
  fn test_empty_parts_are_kept() {
    let pair = AuthorAffiliationPair::parse_token(", Shivaji University").unwrap();
    assert_eq!(pair.name, "");
    assert_eq!(pair.affiliation, "Shivaji University");

    let pair = AuthorAffiliationPair::parse_token("B Rao,").unwrap();
    assert_eq!(pair.name, "B Rao");
    assert_eq!(pair.affiliation, "");
  }

  #[traced_test]
  #[test]
  fn test_parse_pairs_preserves_order_and_skips_malformed() {
    let pairs: Vec<_> =
      parse_pairs("A One, First; no affiliation here;; B Two, Second ;C Three, Third, City")
        .collect();
    let names: Vec<_> = pairs.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["A One", "B Two", "C Three"]);
    assert_eq!(pairs[2].affiliation, "Third, City");
    assert!(logs_contain("Skipping token without affiliation"));
  }

  #[test]
  fn test_tokens_keep_empty_entries() {
    assert_eq!(tokens("a;;b; ").count(), 4);
  }

  #[test]
  fn test_display() {
    let pair = AuthorAffiliationPair {
      name:        "R Patel".to_string(),
      affiliation: "Saveetha University".to_string(),
    };
    assert_eq!(pair.to_string(), "R Patel, Saveetha University");
  }
}
