use super::*;

fn resolve_file(path: &Path, config: &Config) -> TestResult<(PathBuf, Summary)> {
  let table = Table::read(path)?;
  let resolved = Resolver::new(config)?.resolve(&table)?;
  let output = output_path(path, &config.output_suffix);
  resolved.table.write(&output)?;
  Ok((output, resolved.summary))
}

#[traced_test]
#[test]
fn test_scopus_export_workflow() -> TestResult<()> {
  let (_dir, input) = write_input("scopus.csv", SCOPUS_EXPORT);
  let (output, summary) = resolve_file(&input, &Config::default())?;

  assert_eq!(output.file_name().unwrap(), "scopus_corresponding_updated.csv");
  assert_eq!(summary, Summary { records: 5, resolved: 3, unresolved: 2 });

  let table = Table::read(&output)?;
  assert_eq!(table.columns(), [
    "Authors",
    "Title",
    "Year",
    "Authors with affiliations",
    "Corresponding Author",
    "Corresponding Affiliation",
  ]);

  let author = |row| table.value(row, "Corresponding Author");
  let affiliation = |row| table.value(row, "Corresponding Affiliation");

  assert_eq!(author(0), Some("R Patel"));
  assert_eq!(affiliation(0), Some("Saveetha University, Chennai"));
  assert_eq!(author(1), Some("A Kumar"));
  assert_eq!(affiliation(1), Some("Department of Agrochemistry, Shivaji University, Kolhapur"));
  assert_eq!(author(2), Some("B Rao"));
  assert_eq!(affiliation(2), Some("Saveetha Dental College, Saveetha University"));
  // Written as empty cells, read back as absent.
  assert_eq!(author(3), None);
  assert_eq!(author(4), None);

  // Pass-through columns are untouched.
  let original = Table::read(&input)?;
  for row in 0..original.len() {
    for column in original.columns() {
      assert_eq!(table.value(row, column), original.value(row, column));
    }
  }
  Ok(())
}

#[test]
fn test_rerun_on_output_is_stable() -> TestResult<()> {
  let (_dir, input) = write_input("scopus.csv", SCOPUS_EXPORT);
  let (first, _) = resolve_file(&input, &Config::default())?;
  let (second, _) = resolve_file(&first, &Config::default())?;

  assert_eq!(second.file_name().unwrap(), "scopus_corresponding_updated_corresponding_updated.csv");
  assert_eq!(fs::read_to_string(&first)?, fs::read_to_string(&second)?);
  Ok(())
}

#[test]
fn test_missing_column_produces_no_output() {
  let (dir, input) = write_input("broken.csv", "Title,Authors\nPaper,\"A, Shivaji University\"\n");
  let result = resolve_file(&input, &Config::default());

  let error = result.unwrap_err();
  assert!(matches!(
    error.downcast_ref::<CorresponderError>(),
    Some(CorresponderError::MissingColumn(column)) if column == "Authors with affiliations"
  ));
  assert!(!dir.path().join("broken_corresponding_updated.csv").exists());
}

#[test]
fn test_custom_configuration_file() -> TestResult<()> {
  let (dir, input) = write_input("pune.csv", "\
Affiliations
\"A, Pune University; B, Pune University Campus\"
\"C, Shivaji University\"
");
  let config_path = dir.path().join("config.toml");
  fs::write(&config_path, r#"
valid_affiliations = ["Pune University"]
exclusion_keywords = ["Campus"]
unconditional_affiliation = "IIT Bombay"
output_suffix = "_resolved"

[columns]
input = "Affiliations"
"#)?;

  let config = Config::load(&config_path)?;
  let (output, summary) = resolve_file(&input, &config)?;

  assert_eq!(output.file_name().unwrap(), "pune_resolved.csv");
  assert_eq!(summary, Summary { records: 2, resolved: 1, unresolved: 1 });
  let table = Table::read(&output)?;
  assert_eq!(table.value(0, "Corresponding Author"), Some("A"));
  assert_eq!(table.value(1, "Corresponding Author"), None);
  Ok(())
}

#[test]
fn test_row_longer_than_header_is_structural() {
  let (_dir, input) =
    write_input("ragged.csv", "Authors with affiliations,Year\n\"A, X\",2020,extra\n");
  let error = Table::read(&input).unwrap_err();
  assert!(matches!(error, CorresponderError::RaggedRecord { row: 0, expected: 2, found: 3 }));
}

#[test]
fn test_short_rows_resolve() -> TestResult<()> {
  let (_dir, input) = write_input("short.csv", "\
Title,Authors with affiliations,Year
Paper,\"A, Shivaji University\"
Editorial
");
  let (output, summary) = resolve_file(&input, &Config::default())?;

  assert_eq!(summary, Summary { records: 2, resolved: 1, unresolved: 1 });
  let table = Table::read(&output)?;
  assert_eq!(table.value(0, "Corresponding Author"), Some("A"));
  assert_eq!(table.value(0, "Year"), None);
  assert_eq!(table.value(1, "Title"), Some("Editorial"));
  Ok(())
}
