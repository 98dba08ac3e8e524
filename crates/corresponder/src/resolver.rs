//! The affiliation resolver.
//!
//! For every record the resolver reads the `Authors with affiliations` cell, parses it into
//! author/affiliation pairs, keeps the pairs whose affiliation is accepted by the [`RuleSet`], and
//! selects the **last** kept pair as the corresponding author. The result is written into the
//! `Corresponding Author` and `Corresponding Affiliation` columns; records with no qualifying pair
//! get empty strings in both.
//!
//! Resolution never reads the output columns, so running it on its own output gives the same
//! answer again.
//!
//! # Examples
//!
//! ```
//! use corresponder::{Config, Resolver};
//!
//! let resolver = Resolver::new(&Config::default()).unwrap();
//! let found = resolver.resolve_field(Some(
//!   "J Smith, XYZ College Affiliated to Shivaji University; R Patel, Saveetha University, Chennai",
//! ));
//! assert_eq!(found.corresponding_author, "R Patel");
//! assert_eq!(found.corresponding_affiliation, "Saveetha University, Chennai");
//! ```

use super::*;

/// The corresponding author selected for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedCorrespondence {
  /// Selected author's name, empty if none qualified
  pub corresponding_author:      String,
  /// Selected author's affiliation, empty if none qualified
  pub corresponding_affiliation: String,
}

impl ResolvedCorrespondence {
  /// Whether no author qualified.
  pub fn is_empty(&self) -> bool {
    self.corresponding_author.is_empty() && self.corresponding_affiliation.is_empty()
  }
}

impl From<AuthorAffiliationPair> for ResolvedCorrespondence {
  fn from(pair: AuthorAffiliationPair) -> Self {
    Self { corresponding_author: pair.name, corresponding_affiliation: pair.affiliation }
  }
}

/// Counts describing a resolved table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
  /// Records processed
  pub records:    usize,
  /// Records that received a corresponding author
  pub resolved:   usize,
  /// Records left with empty output cells
  pub unresolved: usize,
}

impl Summary {
  /// Counts one record's outcome.
  fn record(&mut self, correspondence: &ResolvedCorrespondence) {
    self.records += 1;
    if correspondence.is_empty() {
      self.unresolved += 1;
    } else {
      self.resolved += 1;
    }
  }
}

impl Display for Summary {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "{} records processed, {} with a corresponding author, {} without",
      self.records, self.resolved, self.unresolved
    )
  }
}

/// Output of [`Resolver::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
  /// The input table with the two output columns added or overwritten
  pub table:   Table,
  /// Outcome counts
  pub summary: Summary,
}

/// Resolves corresponding authors using a fixed rule set and column layout.
#[derive(Debug, Clone)]
pub struct Resolver {
  /// Affiliation rules, first match wins
  rules:   RuleSet,
  /// Input and output column names
  columns: config::Columns,
}

impl Resolver {
  /// Creates a resolver from a validated configuration.
  pub fn new(config: &Config) -> Result<Self> {
    config.validate()?;
    Ok(Self { rules: RuleSet::from_config(config), columns: config.columns.clone() })
  }

  /// Creates a resolver with an explicit rule set.
  ///
  /// Neither the rules nor the columns are validated: an `Unconditional` rule with an empty
  /// pattern accepts every pair, and output columns may collide with the input column.
  pub fn with_rules(rules: RuleSet, columns: config::Columns) -> Self { Self { rules, columns } }

  /// The rule set in use.
  pub fn rules(&self) -> &RuleSet { &self.rules }

  /// The column names in use.
  pub fn columns(&self) -> &config::Columns { &self.columns }

  /// Parses a cell and classifies every well-formed pair, in token order.
  pub fn classify_field<'a>(
    &'a self,
    field: &'a str,
  ) -> impl Iterator<Item = (AuthorAffiliationPair, Verdict)> + 'a {
    parse_pairs(field).map(|pair| {
      let verdict = self.rules.classify(&pair.affiliation);
      trace!("{} -> {}", pair, verdict);
      (pair, verdict)
    })
  }

  /// Selects the corresponding author for one `Authors with affiliations` value.
  ///
  /// An absent value yields an empty correspondence, as does a value with no qualifying pair.
  pub fn resolve_field(&self, field: Option<&str>) -> ResolvedCorrespondence {
    field
      .and_then(|field| {
        self
          .classify_field(field)
          .filter(|(_, verdict)| verdict.is_accepted())
          .map(|(pair, _)| pair)
          .last()
      })
      .map(ResolvedCorrespondence::from)
      .unwrap_or_default()
  }

  /// Resolves every record of `table` into a new table.
  ///
  /// The output keeps every input column and record in order. The author and affiliation columns
  /// are overwritten where they already exist and appended (author first) where they do not.
  ///
  /// # Errors
  ///
  /// Returns [`CorresponderError::MissingColumn`] before touching any record if the input column
  /// is not part of the table.
  pub fn resolve(&self, table: &Table) -> Result<Resolved> {
    let input = table
      .column_index(&self.columns.input)
      .ok_or_else(|| CorresponderError::MissingColumn(self.columns.input.clone()))?;

    let mut columns = table.columns().to_vec();
    let author = column_position(&mut columns, &self.columns.author);
    let affiliation = column_position(&mut columns, &self.columns.affiliation);

    let mut summary = Summary::default();
    let records = table
      .records()
      .iter()
      .map(|record| {
        let correspondence = self.resolve_field(record.get(input));
        summary.record(&correspondence);

        let mut record = record.clone();
        record.set(author, Some(correspondence.corresponding_author));
        record.set(affiliation, Some(correspondence.corresponding_affiliation));
        record
      })
      .collect();

    let table = Table::new(columns, records)?;
    debug!("{summary}");
    if summary.records > 0 && summary.resolved == 0 {
      warn!("No record matched any configured affiliation");
    }
    Ok(Resolved { table, summary })
  }
}

/// Index of `name` in `columns`, appending it if absent.
fn column_position(columns: &mut Vec<String>, name: &str) -> usize {
  columns.iter().position(|column| column == name).unwrap_or_else(|| {
    columns.push(name.to_string());
    columns.len() - 1
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  const AUTHORS: &str = "Authors with affiliations";
  const AUTHOR: &str = "Corresponding Author";
  const AFFILIATION: &str = "Corresponding Affiliation";

  fn resolver() -> Resolver { Resolver::new(&Config::default()).unwrap() }

  fn table(csv: &str) -> Table { Table::from_reader(csv.as_bytes()).unwrap() }

  #[test]
  fn test_absent_field_is_empty() {
    assert_eq!(resolver().resolve_field(None), ResolvedCorrespondence::default());
  }

  #[test]
  fn test_malformed_token_is_ignored() {
    let with_malformed = resolver()
      .resolve_field(Some("A Kumar, Shivaji University; Anonymous Reviewer; B Rao, Mumbai"));
    let without = resolver().resolve_field(Some("A Kumar, Shivaji University; B Rao, Mumbai"));
    assert_eq!(with_malformed, without);
    assert_eq!(with_malformed.corresponding_author, "A Kumar");
  }

  #[test]
  fn test_saveetha_exemption() {
    let found = resolver().resolve_field(Some("S Iyer, XYZ College, Saveetha University"));
    assert_eq!(found.corresponding_author, "S Iyer");
    assert_eq!(found.corresponding_affiliation, "XYZ College, Saveetha University");
  }

  #[test]
  fn test_exclusion_enforced() {
    let found =
      resolver().resolve_field(Some("J Smith, ABC College Affiliated to Shivaji University"));
    assert!(found.is_empty());
  }

  #[test]
  fn test_last_valid_wins() {
    let found =
      resolver().resolve_field(Some("Alice, Shivaji University; Bob, Saveetha University"));
    assert_eq!(found.corresponding_author, "Bob");
    assert_eq!(found.corresponding_affiliation, "Saveetha University");

    let found =
      resolver().resolve_field(Some("Bob, Saveetha University; Alice, Shivaji University"));
    assert_eq!(found.corresponding_author, "Alice");
  }

  #[test]
  fn test_later_rejected_pairs_do_not_override() {
    let found = resolver().resolve_field(Some(
      "Alice, Shivaji University; Carol, University of Pune; Dan, Affiliated to Shivaji University",
    ));
    assert_eq!(found.corresponding_author, "Alice");
  }

  #[test]
  fn test_classify_field_reports_every_pair() {
    let resolver = resolver();
    let verdicts: Vec<_> = resolver
      .classify_field("J Smith, XYZ College Affiliated to Shivaji University; nobody; R Patel, Saveetha University")
      .map(|(pair, verdict)| (pair.name, verdict.is_accepted()))
      .collect();
    assert_eq!(verdicts, vec![("J Smith".to_string(), false), ("R Patel".to_string(), true)]);
  }

  #[traced_test]
  #[test]
  fn test_end_to_end_row() {
    let input = table(
      "Title,Authors with affiliations\nPaper,\"J Smith, XYZ College Affiliated to Shivaji \
       University; R Patel, Saveetha University, Chennai\"\n",
    );
    let resolved = resolver().resolve(&input).unwrap();

    assert_eq!(resolved.table.columns(), ["Title", AUTHORS, AUTHOR, AFFILIATION]);
    assert_eq!(resolved.table.value(0, AUTHOR), Some("R Patel"));
    assert_eq!(resolved.table.value(0, AFFILIATION), Some("Saveetha University, Chennai"));
    assert_eq!(resolved.table.value(0, "Title"), Some("Paper"));
    assert_eq!(resolved.summary, Summary { records: 1, resolved: 1, unresolved: 0 });
  }

  #[test]
  fn test_empty_cell_resolves_to_empty_strings() {
    let input = table("Title,Authors with affiliations\nPaper,\n");
    let resolved = resolver().resolve(&input).unwrap();
    assert_eq!(resolved.table.value(0, AUTHOR), Some(""));
    assert_eq!(resolved.table.value(0, AFFILIATION), Some(""));
    assert_eq!(resolved.summary.unresolved, 1);
  }

  #[test]
  fn test_missing_column_is_structural_error() {
    let input = table("Title,Authors\nPaper,\"A, Shivaji University\"\n");
    let result = resolver().resolve(&input);
    assert!(matches!(result, Err(CorresponderError::MissingColumn(ref c)) if c == AUTHORS));
  }

  #[test]
  fn test_existing_output_columns_overwritten_in_place() {
    let input = table(
      "Corresponding Author,Authors with affiliations,Year,Corresponding Affiliation\nstale,\"A, \
       Shivaji University\",2023,stale\nstale,\"B, Nowhere\",2024,stale\n",
    );
    let resolved = resolver().resolve(&input).unwrap();

    assert_eq!(resolved.table.columns(), input.columns());
    assert_eq!(resolved.table.value(0, AUTHOR), Some("A"));
    assert_eq!(resolved.table.value(0, AFFILIATION), Some("Shivaji University"));
    assert_eq!(resolved.table.value(1, AUTHOR), Some(""));
    assert_eq!(resolved.table.value(1, "Year"), Some("2024"));
  }

  #[test]
  fn test_resolution_is_idempotent() {
    let input = table(
      "Authors with affiliations\n\"Alice, Shivaji University; Bob, Saveetha University\"\n\"C, \
       College of Shivaji University\"\n",
    );
    let once = resolver().resolve(&input).unwrap();
    let twice = resolver().resolve(&once.table).unwrap();
    assert_eq!(once, twice);
  }

  #[test]
  fn test_input_table_is_not_mutated() {
    let input = table("Authors with affiliations\n\"Alice, Shivaji University\"\n");
    let before = input.clone();
    let _ = resolver().resolve(&input).unwrap();
    assert_eq!(input, before);
  }

  #[test]
  fn test_row_order_preserved() {
    let input = table(
      "Id,Authors with affiliations\n1,\"A, Shivaji University\"\n2,\n3,\"C, Saveetha \
       University\"\n",
    );
    let resolved = resolver().resolve(&input).unwrap();
    let ids: Vec<_> = (0..3).map(|row| resolved.table.value(row, "Id").unwrap()).collect();
    let authors: Vec<_> = (0..3).map(|row| resolved.table.value(row, AUTHOR).unwrap()).collect();
    assert_eq!(ids, ["1", "2", "3"]);
    assert_eq!(authors, ["A", "", "C"]);
    assert_eq!(resolved.summary, Summary { records: 3, resolved: 2, unresolved: 1 });
  }

  #[test]
  fn test_custom_columns() {
    let config = Config::default().with_columns(config::Columns {
      input:       "Affiliations".to_string(),
      author:      "Contact".to_string(),
      affiliation: "Contact Institution".to_string(),
    });
    let resolver = Resolver::new(&config).unwrap();
    let resolved =
      resolver.resolve(&table("Affiliations\n\"A, Shivaji University\"\n")).unwrap();
    assert_eq!(resolved.table.value(0, "Contact"), Some("A"));
    assert_eq!(resolved.table.value(0, "Contact Institution"), Some("Shivaji University"));
  }

  #[test]
  fn test_resolve_with_explicit_rules() {
    let rules = RuleSet::new()
      .with_rule(Rule::Unconditional { pattern: "Institute of Science".to_string() })
      .with_rule(Rule::Qualified {
        patterns:   vec!["Pune".to_string(), "Kolhapur".to_string()],
        exclusions: vec!["Hospital".to_string()],
      })
      .with_rule(Rule::Qualified { patterns: vec!["Hospital".to_string()], exclusions: vec![] });
    let columns = config::Columns {
      input:       "Authors".to_string(),
      author:      "Contact".to_string(),
      affiliation: "Contact Institution".to_string(),
    };
    let resolver = Resolver::with_rules(rules, columns.clone());
    assert_eq!(resolver.rules().rules().len(), 3);
    assert_eq!(resolver.columns(), &columns);

    let input = table(
      "Authors\n\
       \"A, Kolhapur Hospital; B, Pune Hospital Institute of Science\"\n\
       \"C, Shivaji University\"\n\
       \"D, City Hospital; E, Kolhapur Hospital\"\n",
    );
    let resolved = resolver.resolve(&input).unwrap();

    assert_eq!(resolved.table.columns(), ["Authors", "Contact", "Contact Institution"]);
    // The unconditional rule comes first, so the hospital exclusion never sees B.
    assert_eq!(resolved.table.value(0, "Contact"), Some("B"));
    // None of the explicit rules mention the default patterns.
    assert_eq!(resolved.table.value(1, "Contact"), Some(""));
    // E is excluded by the second rule before the third would accept it, so D is the last valid.
    assert_eq!(resolved.table.value(2, "Contact"), Some("D"));
    assert_eq!(resolved.summary, Summary { records: 3, resolved: 2, unresolved: 1 });
  }

  #[test]
  fn test_invalid_config_rejected() {
    let config = Config::default().with_unconditional_affiliation("");
    assert!(matches!(Resolver::new(&config), Err(CorresponderError::Config(_))));
  }

  #[traced_test]
  #[test]
  fn test_warns_when_nothing_resolves() {
    let input = table("Authors with affiliations\n\"A, Nowhere\"\n");
    let resolved = resolver().resolve(&input).unwrap();
    assert_eq!(resolved.summary.resolved, 0);
    assert!(logs_contain("No record matched any configured affiliation"));
  }

  #[test]
  fn test_summary_display() {
    let summary = Summary { records: 3, resolved: 2, unresolved: 1 };
    assert_eq!(
      summary.to_string(),
      "3 records processed, 2 with a corresponding author, 1 without"
    );
  }
}
