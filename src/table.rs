//! Reader for `;`-delimited translation tables.
//!
//! The dialect is deliberately narrow: `;` separates fields, `"` quotes a
//! field and `""` inside a quoted field is a literal quote. There are no
//! other escapes and quoted fields cannot span lines.

use crate::error::GeneratorError;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the column holding property keys, matched case-insensitively.
pub const KEY_COLUMN: &str = "property_name";

/// Field separator.
pub const DELIMITER: char = ';';

const QUOTE: char = '"';

/// A parsed translation table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    path: PathBuf,
    columns: Vec<String>,
    key_index: usize,
    rows: Vec<Row>,
}

/// One data line of a table, one cell per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<String>,
}

impl Table {
    /// Read and parse a table file.
    pub fn read(path: &Path) -> Result<Table, GeneratorError> {
        let content = fs::read_to_string(path).map_err(|source| GeneratorError::ReadFailure {
            path: path.to_path_buf(),
            source,
        })?;
        Table::parse(path, &content)
    }

    /// Parse table text. `path` is only used to label errors.
    pub fn parse(path: &Path, content: &str) -> Result<Table, GeneratorError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut lines = content.lines().enumerate();

        let header = match lines.next() {
            Some((_, line)) if !line.trim().is_empty() => line,
            _ => {
                return Err(GeneratorError::EmptyTable {
                    path: path.to_path_buf(),
                })
            }
        };

        let columns: Vec<String> = parse_line(header)
            .into_iter()
            .map(|h| h.trim().to_string())
            .collect();

        if let Some(blank) = columns.iter().position(|c| c.is_empty()) {
            return Err(GeneratorError::MalformedTable {
                path: path.to_path_buf(),
                line: 1,
                reason: format!("column {} has no name", blank + 1),
            });
        }

        let key_index = columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case(KEY_COLUMN))
            .ok_or_else(|| GeneratorError::MissingKeyColumn {
                path: path.to_path_buf(),
                column: KEY_COLUMN.to_string(),
            })?;

        let mut rows = Vec::new();
        for (index, line) in lines {
            if line.trim().is_empty() {
                continue;
            }

            let cells = parse_line(line);
            if cells.len() != columns.len() {
                return Err(GeneratorError::MalformedTable {
                    path: path.to_path_buf(),
                    line: index + 1,
                    reason: format!(
                        "expected {} fields, found {}",
                        columns.len(),
                        cells.len()
                    ),
                });
            }

            if cells[key_index].trim().is_empty() {
                return Err(GeneratorError::MalformedTable {
                    path: path.to_path_buf(),
                    line: index + 1,
                    reason: format!("'{}' is blank", KEY_COLUMN),
                });
            }

            rows.push(Row { cells });
        }

        Ok(Table {
            path: path.to_path_buf(),
            columns,
            key_index,
            rows,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All column names in header order, key column included.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Position of the key column in the header.
    pub fn key_index(&self) -> usize {
        self.key_index
    }

    /// Name of the key column as written in the header.
    pub fn key_column(&self) -> &str {
        &self.columns[self.key_index]
    }

    /// Every column except the key column, in header order.
    pub fn language_columns(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .enumerate()
            .filter(move |(i, _)| *i != self.key_index)
            .map(|(_, c)| c.as_str())
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Case-insensitive column position.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.eq_ignore_ascii_case(name))
    }

    /// Cell of `row` under `column` (case-insensitive).
    pub fn cell<'a>(&self, row: &'a Row, column: &str) -> Option<&'a str> {
        self.column_index(column).and_then(|i| row.get(i))
    }

    /// Property key of a row.
    pub fn key<'a>(&self, row: &'a Row) -> &'a str {
        row.cells[self.key_index].as_str()
    }
}

impl Row {
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}

/// Split one line into fields.
///
/// An unterminated quote runs to the end of the line.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            QUOTE if in_quotes && chars.peek() == Some(&QUOTE) => {
                field.push(QUOTE);
                chars.next();
            }
            QUOTE => in_quotes = !in_quotes,
            DELIMITER if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);

    fields
}
