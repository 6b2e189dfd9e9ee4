use chrono::NaiveDate;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Format of the cutoff date, both in the config file and on the command line
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const COLUMNS: usize = 4;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config file")]
    Csv(#[from] csv::Error),

    #[error("config file has no rows")]
    MissingRow,

    #[error("expected 4 config columns, found {found}")]
    ColumnCount { found: usize },

    #[error("invalid date {value:?}, expected YYYY-MM-DD")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Diagram renderer executable
    pub renderer_path: PathBuf,
    /// Repository to read history from
    pub repo_path: PathBuf,
    /// Markdown file the diagram is written to
    pub output_path: PathBuf,
    /// Only commits since this date are drawn
    pub since: NaiveDate,
}

/// Columns of the config row, in file order
#[derive(Debug, Deserialize)]
struct ConfigRow {
    renderer_path: String,
    repo_path: String,
    output_path: String,
    date: String,
}

impl Config {
    /// Read the first row of a headerless CSV file:
    /// `renderer,repository,output,YYYY-MM-DD`
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let record = reader.records().next().ok_or(ConfigError::MissingRow)??;
        if record.len() != COLUMNS {
            return Err(ConfigError::ColumnCount {
                found: record.len(),
            });
        }

        let row: ConfigRow = record.deserialize(None)?;
        Ok(Self {
            renderer_path: PathBuf::from(strip_quotes(&row.renderer_path)),
            repo_path: PathBuf::from(strip_quotes(&row.repo_path)),
            output_path: PathBuf::from(strip_quotes(&row.output_path)),
            since: parse_date(&row.date)?,
        })
    }
}

fn strip_quotes(value: &str) -> &str {
    value.trim_matches('"')
}

/// Parse a `YYYY-MM-DD` date, ignoring surrounding whitespace and quotes
pub fn parse_date(value: &str) -> Result<NaiveDate, ConfigError> {
    let trimmed = strip_quotes(value.trim()).trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|source| ConfigError::InvalidDate {
        value: value.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_quoted_windows_paths() -> Result<()> {
        let row = "\"C:\\Program Files\\Graphviz\\bin\\dot.exe\",\"C:\\path\\to\\repo\",\"C:\\path\\to\\output.md\",\"2023-10-01\"\n";
        let config = Config::from_reader(row.as_bytes())?;

        assert_eq!(
            config,
            Config {
                renderer_path: PathBuf::from("C:\\Program Files\\Graphviz\\bin\\dot.exe"),
                repo_path: PathBuf::from("C:\\path\\to\\repo"),
                output_path: PathBuf::from("C:\\path\\to\\output.md"),
                since: NaiveDate::from_ymd_opt(2023, 10, 1).unwrap(),
            }
        );
        Ok(())
    }

    #[test]
    fn test_unquoted_date_with_whitespace() -> Result<()> {
        let config = Config::from_reader("mmdc,./repo,out.md, 2024-02-29 \n".as_bytes())?;
        assert_eq!(config.renderer_path, PathBuf::from("mmdc"));
        assert_eq!(config.since, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        Ok(())
    }

    #[test]
    fn test_only_first_row_is_read() -> Result<()> {
        let config = Config::from_reader("a,b,c,2023-01-01\nd,e,f,not-a-date\n".as_bytes())?;
        assert_eq!(config.repo_path, PathBuf::from("b"));
        Ok(())
    }

    #[test]
    fn test_too_few_columns() {
        let err = Config::from_reader("mmdc,./repo,2023-10-01\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ConfigError::ColumnCount { found: 3 }));
    }

    #[test]
    fn test_too_many_columns() {
        let err = Config::from_reader("a,b,c,2023-10-01,extra\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ConfigError::ColumnCount { found: 5 }));
    }

    #[test]
    fn test_empty_file() {
        let err = Config::from_reader("".as_bytes()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingRow));
    }

    #[test]
    fn test_bad_date() {
        let err = Config::from_reader("a,b,c,10/01/2023\n".as_bytes()).unwrap_err();
        match err {
            ConfigError::InvalidDate { value, .. } => assert_eq!(value, "10/01/2023"),
            other => panic!("expected InvalidDate, got {:?}", other),
        }
        assert!(parse_date("2023-02-30").is_err());
    }

    #[test]
    fn test_from_path() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "\"mmdc\",\"/srv/repo\",\"/tmp/graph.md\",\"2023-10-01\"")?;

        let config = Config::from_csv_path(file.path())?;
        assert_eq!(config.output_path, PathBuf::from("/tmp/graph.md"));

        let missing = file.path().with_extension("missing");
        assert!(matches!(
            Config::from_csv_path(&missing),
            Err(ConfigError::Io { .. })
        ));
        Ok(())
    }
}
