//! Resolver configuration and configuration files.
//!
//! A [`Config`] carries everything that used to be hard coded in the resolution rules: which
//! institutions qualify, which keywords disqualify a match, which institution is exempt from the
//! exclusion keywords, and what the input and output columns are called. Every field has a
//! default, so a configuration file only needs to mention what it changes:
//!
//! ```toml
//! valid_affiliations = ["Shivaji University", "Saveetha University"]
//! exclusion_keywords = ["College", "Affiliated to"]
//! unconditional_affiliation = "Saveetha University"
//! output_suffix = "_corresponding_updated"
//!
//! [columns]
//! input = "Authors with affiliations"
//! author = "Corresponding Author"
//! affiliation = "Corresponding Affiliation"
//! ```

use super::*;

/// Default substrings that qualify an affiliation.
pub const DEFAULT_VALID_AFFILIATIONS: [&str; 2] = ["Shivaji University", "Saveetha University"];

/// Default substrings that disqualify a qualifying affiliation.
pub const DEFAULT_EXCLUSION_KEYWORDS: [&str; 2] = ["College", "Affiliated to"];

/// Default affiliation that is exempt from the exclusion keywords.
pub const DEFAULT_UNCONDITIONAL_AFFILIATION: &str = "Saveetha University";

/// Default suffix appended to the base name of the output file.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_corresponding_updated";

/// Full configuration for a resolver run.
///
/// # Examples
///
/// ```
/// use corresponder::Config;
///
/// let config = Config::default()
///   .with_valid_affiliations(["Shivaji University", "Pune University"])
///   .with_exclusion_keywords(["College"]);
/// assert_eq!(config.unconditional_affiliation, "Saveetha University");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Substrings that qualify an affiliation, in evaluation order
  pub valid_affiliations:        Vec<String>,
  /// Substrings that disqualify a qualifying affiliation
  pub exclusion_keywords:        Vec<String>,
  /// Affiliation that qualifies regardless of exclusion keywords
  pub unconditional_affiliation: String,
  /// Suffix added to the input file's base name to name the output file
  pub output_suffix:             String,
  /// Names of the columns read and written
  pub columns:                   Columns,
}

/// Column names used by the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Columns {
  /// Column holding the semicolon-delimited author/affiliation list
  pub input:       String,
  /// Column receiving the corresponding author's name
  pub author:      String,
  /// Column receiving the corresponding author's affiliation
  pub affiliation: String,
}

impl Default for Columns {
  fn default() -> Self {
    Self {
      input:       "Authors with affiliations".to_string(),
      author:      "Corresponding Author".to_string(),
      affiliation: "Corresponding Affiliation".to_string(),
    }
  }
}

impl Default for Config {
  fn default() -> Self {
    Self {
      valid_affiliations:        DEFAULT_VALID_AFFILIATIONS.map(String::from).to_vec(),
      exclusion_keywords:        DEFAULT_EXCLUSION_KEYWORDS.map(String::from).to_vec(),
      unconditional_affiliation: DEFAULT_UNCONDITIONAL_AFFILIATION.to_string(),
      output_suffix:             DEFAULT_OUTPUT_SUFFIX.to_string(),
      columns:                   Columns::default(),
    }
  }
}

impl Config {
  /// Returns the default location of the configuration file.
  ///
  /// The path is constructed as follows:
  /// - On Unix: `~/.config/corresponder/config.toml`
  /// - On macOS: `~/Library/Application Support/corresponder/config.toml`
  /// - On Windows: `%APPDATA%\corresponder\config.toml`
  /// - Fallback: `./corresponder/config.toml`
  pub fn default_path() -> PathBuf {
    dirs::config_dir()
      .unwrap_or_else(|| PathBuf::from("."))
      .join("corresponder")
      .join("config.toml")
  }

  /// Loads and validates a configuration file.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    debug!("Loading configuration from {}", path.display());
    let content = fs::read_to_string(path)?;
    content.parse()
  }

  /// Writes the configuration as TOML, creating parent directories as needed.
  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
      if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent)?;
      }
    }
    fs::write(path, self.to_toml()?)?;
    debug!("Saved configuration to {}", path.display());
    Ok(())
  }

  /// Serializes the configuration as a TOML document.
  pub fn to_toml(&self) -> Result<String> { Ok(toml::to_string_pretty(self)?) }

  /// Replaces the qualifying affiliations.
  pub fn with_valid_affiliations<S: Into<String>>(
    mut self,
    affiliations: impl IntoIterator<Item = S>,
  ) -> Self {
    self.valid_affiliations = affiliations.into_iter().map(Into::into).collect();
    self
  }

  /// Replaces the exclusion keywords.
  pub fn with_exclusion_keywords<S: Into<String>>(
    mut self,
    keywords: impl IntoIterator<Item = S>,
  ) -> Self {
    self.exclusion_keywords = keywords.into_iter().map(Into::into).collect();
    self
  }

  /// Replaces the affiliation exempt from exclusion keywords.
  pub fn with_unconditional_affiliation(mut self, affiliation: impl Into<String>) -> Self {
    self.unconditional_affiliation = affiliation.into();
    self
  }

  /// Replaces the column names.
  pub fn with_columns(mut self, columns: Columns) -> Self {
    self.columns = columns;
    self
  }

  /// Replaces the output file suffix.
  pub fn with_output_suffix(mut self, suffix: impl Into<String>) -> Self {
    self.output_suffix = suffix.into();
    self
  }

  /// Checks that every pattern and column name is usable.
  ///
  /// An empty pattern would match every affiliation, and output columns that collide with each
  /// other or with the input column would destroy data, so both are rejected.
  pub fn validate(&self) -> Result<()> {
    if self.unconditional_affiliation.trim().is_empty() {
      return Err(CorresponderError::Config(
        "`unconditional_affiliation` must not be empty".to_string(),
      ));
    }
    if self.valid_affiliations.iter().any(|a| a.trim().is_empty()) {
      return Err(CorresponderError::Config(
        "`valid_affiliations` must not contain empty entries".to_string(),
      ));
    }
    if self.exclusion_keywords.iter().any(|k| k.trim().is_empty()) {
      return Err(CorresponderError::Config(
        "`exclusion_keywords` must not contain empty entries".to_string(),
      ));
    }

    let Columns { input, author, affiliation } = &self.columns;
    if [input, author, affiliation].iter().any(|c| c.is_empty()) {
      return Err(CorresponderError::Config("Column names must not be empty".to_string()));
    }
    if author == affiliation || author == input || affiliation == input {
      return Err(CorresponderError::Config(format!(
        "Column names must be distinct, got input \"{input}\", author \"{author}\" and \
         affiliation \"{affiliation}\""
      )));
    }
    Ok(())
  }
}

impl FromStr for Config {
  type Err = CorresponderError;

  fn from_str(s: &str) -> Result<Self> {
    let config: Config = toml::from_str(s)?;
    config.validate()?;
    Ok(config)
  }
}
