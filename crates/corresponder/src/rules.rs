//! Affiliation rules.
//!
//! Whether an author counts towards the corresponding author is decided by an ordered list of
//! [`Rule`]s. Each rule either does not apply to an affiliation, or applies and returns a
//! [`Verdict`]. The first rule that applies decides; if none apply the affiliation is
//! [`Verdict::Unmatched`].
//!
//! The default list built by [`RuleSet::from_config`] has two rules:
//!
//! 1. An unconditional rule for the exempt institution (`"Saveetha University"`), which accepts
//!    regardless of exclusion keywords.
//! 2. A qualified rule over the valid institutions, which accepts only when none of the exclusion
//!    keywords (`"College"`, `"Affiliated to"`) occur.
//!
//! All matching is plain, case-sensitive substring matching.
//!
//! # Examples
//!
//! ```
//! use corresponder::{rules::{RuleSet, Verdict}, Config};
//!
//! let rules = RuleSet::from_config(&Config::default());
//! assert!(rules.classify("XYZ College, Saveetha University").is_accepted());
//! assert!(!rules.classify("ABC College Affiliated to Shivaji University").is_accepted());
//! assert_eq!(rules.classify("Somewhere Else"), Verdict::Unmatched);
//! ```

use super::*;

/// A single affiliation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
  /// Accepts any affiliation containing `pattern`, ignoring exclusion keywords.
  Unconditional {
    /// Substring that triggers the rule
    pattern: String,
  },
  /// Applies to affiliations containing any of `patterns` and accepts them unless one of
  /// `exclusions` also occurs.
  Qualified {
    /// Substrings that trigger the rule
    patterns:   Vec<String>,
    /// Substrings that reject an affiliation this rule applies to
    exclusions: Vec<String>,
  },
}

/// Outcome of classifying one affiliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
  /// The affiliation qualifies. `pattern` is the substring that matched.
  Accepted {
    /// Substring the deciding rule matched on
    pattern: String,
  },
  /// The affiliation matched a qualifying institution but also contained an exclusion keyword.
  Excluded {
    /// Substring the deciding rule matched on
    pattern: String,
    /// First exclusion keyword found
    keyword: String,
  },
  /// No rule applied.
  Unmatched,
}

impl Verdict {
  /// Whether the affiliation qualifies.
  pub fn is_accepted(&self) -> bool { matches!(self, Verdict::Accepted { .. }) }
}

impl Display for Verdict {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Verdict::Accepted { pattern } => write!(f, "accepted ({pattern})"),
      Verdict::Excluded { pattern, keyword } =>
        write!(f, "excluded ({pattern}, but contains \"{keyword}\")"),
      Verdict::Unmatched => write!(f, "no matching affiliation"),
    }
  }
}

impl Rule {
  /// Evaluates the rule, returning `None` if it does not apply to `affiliation`.
  pub fn evaluate(&self, affiliation: &str) -> Option<Verdict> {
    match self {
      Rule::Unconditional { pattern } => affiliation
        .contains(pattern.as_str())
        .then(|| Verdict::Accepted { pattern: pattern.clone() }),
      Rule::Qualified { patterns, exclusions } => {
        let pattern = patterns.iter().find(|p| affiliation.contains(p.as_str()))?;
        match exclusions.iter().find(|k| affiliation.contains(k.as_str())) {
          Some(keyword) =>
            Some(Verdict::Excluded { pattern: pattern.clone(), keyword: keyword.clone() }),
          None => Some(Verdict::Accepted { pattern: pattern.clone() }),
        }
      },
    }
  }
}

/// Ordered rules evaluated first-match-wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
  /// Rules in evaluation order
  rules: Vec<Rule>,
}

impl RuleSet {
  /// Creates an empty rule set, which classifies everything as [`Verdict::Unmatched`].
  pub fn new() -> Self { Self::default() }

  /// Builds the standard two-rule list from a configuration.
  pub fn from_config(config: &Config) -> Self {
    Self::new()
      .with_rule(Rule::Unconditional { pattern: config.unconditional_affiliation.clone() })
      .with_rule(Rule::Qualified {
        patterns:   config.valid_affiliations.clone(),
        exclusions: config.exclusion_keywords.clone(),
      })
  }

  /// Appends a rule; it is consulted after every rule already present.
  pub fn with_rule(mut self, rule: Rule) -> Self {
    self.rules.push(rule);
    self
  }

  /// The rules in evaluation order.
  pub fn rules(&self) -> &[Rule] { &self.rules }

  /// Classifies an affiliation with the first rule that applies.
  pub fn classify(&self, affiliation: &str) -> Verdict {
    self.rules.iter().find_map(|rule| rule.evaluate(affiliation)).unwrap_or(Verdict::Unmatched)
  }
}
