//! Delimited-text parser with delimiter detection.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

use super::table::{DataTable, SourceMetadata};
use crate::error::{Result, VividhaError};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b',', b'\t', b';', b'|'];

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            max_rows: None,
            quote: b'"',
        }
    }
}

/// Parses dataset files into [`DataTable`]s.
///
/// Reads are stateless and side-effect-free; every call re-reads the file.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the data table and metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(DataTable, SourceMetadata)> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| VividhaError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(|e| VividhaError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(&contents)?,
        };

        let table = self.parse_bytes(&contents, delimiter)?;

        let format = match delimiter {
            b',' => "csv",
            b'\t' => "tsv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            contents.len() as u64,
            format,
            table.row_count(),
            table.column_count(),
        );

        Ok((table, metadata))
    }

    /// Parse bytes directly.
    ///
    /// A header row is required; a header-only file yields an empty table
    /// (the registry reads as empty until the first submission).
    pub fn parse_bytes(&self, bytes: &[u8], delimiter: u8) -> Result<DataTable> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();
        if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
            return Err(VividhaError::EmptyData("No columns found".to_string()));
        }

        let expected_cols = headers.len();
        let mut rows = Vec::new();

        for (row_idx, result) in reader.records().enumerate() {
            if let Some(max) = self.config.max_rows {
                if row_idx >= max {
                    break;
                }
            }

            let record = result?;
            let mut row: Vec<String> = record.iter().map(|s| s.to_string()).collect();

            // Pad short rows, truncate long ones
            while row.len() < expected_cols {
                row.push(String::new());
            }
            row.truncate(expected_cols);

            rows.push(row);
        }

        Ok(DataTable::new(headers, rows, delimiter))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .take(10)
        .map_while(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(VividhaError::EmptyData("No lines to analyze".to_string()));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0usize;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        // Consistent counts across lines beat a raw maximum
        let score = if counts.iter().all(|&c| c == first_count) {
            first_count * 100
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_detect_delimiter_csv() {
        let data = b"a,b,c\n1,2,3\n4,5,6";
        assert_eq!(detect_delimiter(data).unwrap(), b',');
    }

    #[test]
    fn test_detect_delimiter_tsv() {
        let data = b"a\tb\tc\n1\t2\t3\n4\t5\t6";
        assert_eq!(detect_delimiter(data).unwrap(), b'\t');
    }

    #[test]
    fn test_detect_delimiter_quoted_commas() {
        let data = b"name|note\nMadhubani|\"fish, peacock, lotus\"\nWarli|\"circles, triangles\"";
        assert_eq!(detect_delimiter(data).unwrap(), b'|');
    }

    #[test]
    fn test_parse_csv() {
        let parser = Parser::new();
        let data = b"art_form,region,tourism_visibility\nMadhubani,Bihar,80\nWarli,Maharashtra,40";
        let table = parser.parse_bytes(data, b',').unwrap();

        assert_eq!(
            table.headers,
            vec!["art_form", "region", "tourism_visibility"]
        );
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(0, 0), Some("Madhubani"));
        assert_eq!(table.get(1, 2), Some("40"));
    }

    #[test]
    fn test_parse_header_only_file() {
        let parser = Parser::new();
        let table = parser
            .parse_bytes(b"name,location,description,submitted_on\n", b',')
            .unwrap();
        assert_eq!(table.column_count(), 4);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_parse_pads_short_rows() {
        let parser = Parser::new();
        let table = parser.parse_bytes(b"a,b,c\n1,2\n", b',').unwrap();
        assert_eq!(table.rows[0], vec!["1", "2", ""]);
    }

    #[test]
    fn test_parse_file_missing() {
        let parser = Parser::new();
        let err = parser.parse_file("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, VividhaError::Io { .. }));
    }

    #[test]
    fn test_parse_file_metadata() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"region,score\nBihar,80\nOdisha,65\n")
            .unwrap();

        let parser = Parser::new();
        let (table, meta) = parser.parse_file(file.path()).unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(meta.row_count, 2);
        assert_eq!(meta.column_count, 2);
        assert_eq!(meta.format, "csv");
        assert!(meta.hash.starts_with("sha256:"));
    }

    #[test]
    fn test_max_rows() {
        let parser = Parser::with_config(ParserConfig {
            max_rows: Some(1),
            ..ParserConfig::default()
        });
        let table = parser.parse_bytes(b"a,b\n1,2\n3,4\n5,6\n", b',').unwrap();
        assert_eq!(table.row_count(), 1);
    }
}
