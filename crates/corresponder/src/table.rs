//! Tabular records and CSV input/output.
//!
//! A [`Table`] is an ordered list of column names plus an ordered list of [`Record`]s, each holding
//! one value per column. Values are optional: an empty CSV cell is read as absent, which is how
//! spreadsheet exports represent a missing `Authors with affiliations` entry. Absent values are
//! written back out as empty cells.
//!
//! # Examples
//!
//! ```
//! use corresponder::Table;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = Table::from_reader("Title,Year\nA paper,2024\nAnother,\n".as_bytes())?;
//! assert_eq!(table.columns(), ["Title", "Year"]);
//! assert_eq!(table.value(0, "Year"), Some("2024"));
//! assert_eq!(table.value(1, "Year"), None);
//!
//! let mut out = Vec::new();
//! table.to_writer(&mut out)?;
//! assert_eq!(String::from_utf8(out)?, "Title,Year\nA paper,2024\nAnother,\n");
//! # Ok(())
//! # }
//! ```

use super::*;

/// Extension used for derived output names when the input has none.
pub const DEFAULT_EXTENSION: &str = "csv";

/// One row of a [`Table`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
  /// Values in column order
  values: Vec<Option<String>>,
}

impl Record {
  /// Creates a record from values in column order.
  pub fn new(values: Vec<Option<String>>) -> Self { Self { values } }

  /// The record's values in column order.
  pub fn values(&self) -> &[Option<String>] { &self.values }

  /// The value at `index`, or `None` if it is absent or out of range.
  pub fn get(&self, index: usize) -> Option<&str> {
    self.values.get(index).and_then(|value| value.as_deref())
  }

  /// Sets the value at `index`, extending the record with absent values if needed.
  pub fn set(&mut self, index: usize, value: Option<String>) {
    if index >= self.values.len() {
      self.values.resize(index + 1, None);
    }
    self.values[index] = value;
  }

  /// Number of values held.
  pub fn len(&self) -> usize { self.values.len() }

  /// Whether the record holds no values.
  pub fn is_empty(&self) -> bool { self.values.is_empty() }
}

impl<S: Into<String>> FromIterator<Option<S>> for Record {
  fn from_iter<I: IntoIterator<Item = Option<S>>>(iter: I) -> Self {
    Self { values: iter.into_iter().map(|value| value.map(Into::into)).collect() }
  }
}

/// An ordered table of records with named columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
  /// Column names in order
  columns: Vec<String>,
  /// Rows in order
  records: Vec<Record>,
}

impl Table {
  /// Builds a table, checking that every record has exactly one value per column.
  pub fn new(columns: Vec<String>, records: Vec<Record>) -> Result<Self> {
    if let Some((row, record)) =
      records.iter().enumerate().find(|(_, record)| record.len() != columns.len())
    {
      return Err(CorresponderError::RaggedRecord {
        row,
        expected: columns.len(),
        found: record.len(),
      });
    }
    Ok(Self { columns, records })
  }

  /// Parses CSV with a header row.
  ///
  /// Rows with fewer fields than the header are padded with absent values. Fails with
  /// [`CorresponderError::EmptyTable`] when there is no header row, with
  /// [`CorresponderError::RaggedRecord`] when a row has more fields than the header, and with
  /// [`CorresponderError::Csv`] when the input is not valid UTF-8 or cannot be read.
  pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
    let mut reader =
      csv::ReaderBuilder::new().has_headers(true).flexible(true).from_reader(reader);

    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if columns.is_empty() {
      return Err(CorresponderError::EmptyTable);
    }

    let mut records: Vec<Record> = Vec::new();
    for (row, result) in reader.records().enumerate() {
      let record = result?;
      if record.len() > columns.len() {
        return Err(CorresponderError::RaggedRecord {
          row,
          expected: columns.len(),
          found: record.len(),
        });
      }
      if record.len() < columns.len() {
        trace!("Padding record {row} from {} to {} values", record.len(), columns.len());
      }

      let mut record: Record =
        record.iter().map(|value| (!value.is_empty()).then(|| value.to_string())).collect();
      record.values.resize(columns.len(), None);
      records.push(record);
    }

    debug!("Read table with {} columns and {} records", columns.len(), records.len());
    Ok(Self { columns, records })
  }

  /// Reads a CSV file.
  pub fn read(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    debug!("Reading table from {}", path.display());
    Self::from_reader(fs::File::open(path)?)
  }

  /// Writes the table as CSV with a header row.
  pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(&self.columns)?;
    for record in &self.records {
      writer.write_record(record.values().iter().map(|value| value.as_deref().unwrap_or("")))?;
    }
    writer.flush()?;
    Ok(())
  }

  /// Writes the table to a CSV file, replacing any existing file.
  pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    self.to_writer(fs::File::create(path)?)?;
    debug!("Wrote {} records to {}", self.records.len(), path.display());
    Ok(())
  }

  /// Column names in order.
  pub fn columns(&self) -> &[String] { &self.columns }

  /// Records in order.
  pub fn records(&self) -> &[Record] { &self.records }

  /// Number of records.
  pub fn len(&self) -> usize { self.records.len() }

  /// Whether the table has no records.
  pub fn is_empty(&self) -> bool { self.records.is_empty() }

  /// Position of the column called `name`.
  pub fn column_index(&self, name: &str) -> Option<usize> {
    self.columns.iter().position(|column| column == name)
  }

  /// Value of `column` in record `row`, if both exist and the value is present.
  pub fn value(&self, row: usize, column: &str) -> Option<&str> {
    let index = self.column_index(column)?;
    self.records.get(row)?.get(index)
  }
}

/// Derives the output file name for `input`: `<base><suffix>.<ext>` in the same directory.
///
/// The base name is everything before the last `.` of the file name, and the extension is the
/// input's own; an input without an extension gets [`DEFAULT_EXTENSION`].
///
/// # Examples
///
/// ```
/// use std::path::Path;
///
/// use corresponder::table::output_path;
///
/// assert_eq!(
///   output_path(Path::new("exports/scopus.csv"), "_corresponding_updated"),
///   Path::new("exports/scopus_corresponding_updated.csv"),
/// );
/// ```
pub fn output_path(input: &Path, suffix: &str) -> PathBuf {
  let file_name = input.file_name().map(|name| name.to_string_lossy()).unwrap_or_default();
  let (base, extension) = file_name.rsplit_once('.').unwrap_or((&*file_name, DEFAULT_EXTENSION));
  input.with_file_name(format!("{base}{suffix}.{extension}"))
}
