//! Ingredients-file import.
//!
//! One record per line: `<name> <type> <quantity>`, separated by single spaces.
//! Lines that do not have exactly three fields, or whose quantity does not parse,
//! are skipped. Loading sets (does not accumulate) each quantity.
//!
//! Lines end at `\n`, `\r\n` or a lone `\r`. A leading byte-order mark is
//! ignored.

use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::ingredient::Ingredient;
use crate::pantry::{Pantry, Quantity};

/// Failure to read the ingredients file at all.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read ingredients file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a single line was not loaded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("expected 3 space-separated fields, found {0}")]
    FieldCount(usize),

    #[error("invalid quantity {text:?}: {source}")]
    Quantity {
        text: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based.
    pub line_number: usize,
    pub reason: String,
}

/// Outcome of a bulk load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Records written to the pantry.
    pub applied: usize,
    pub skipped: Vec<SkippedLine>,
}

const BOM: char = '\u{FEFF}';

/// Split on `\n`, `\r\n` and lone `\r`. A trailing terminator does not yield
/// an empty last line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(end) = rest.find(['\r', '\n']) else {
            return Some(core::mem::take(&mut rest));
        };
        let line = &rest[..end];
        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator..];
        Some(line)
    })
}

/// Parse one `<name> <type> <quantity>` record.
pub fn parse_record(line: &str) -> Result<(Ingredient, Quantity), LineError> {
    let fields: Vec<&str> = line.split(' ').collect();
    let &[name, kind, quantity] = fields.as_slice() else {
        return Err(LineError::FieldCount(fields.len()));
    };

    let text = quantity.trim();
    let quantity = text.parse::<Quantity>().map_err(|source| LineError::Quantity {
        text: text.to_string(),
        source,
    })?;

    Ok((Ingredient::new(name.trim(), kind.trim()), quantity))
}

impl Pantry {
    /// Load records from in-memory text, overwriting the quantity of each
    /// ingredient found. A quantity of `0` removes the ingredient.
    pub fn load_ingredients(&mut self, text: &str) -> LoadReport {
        let mut report = LoadReport::default();
        let text = text.strip_prefix(BOM).unwrap_or(text);

        for (index, line) in split_lines(text).enumerate() {
            let line_number = index + 1;
            match parse_record(line) {
                Ok((ingredient, quantity)) => {
                    self.set_quantity(ingredient, quantity);
                    report.applied += 1;
                }
                Err(err) => {
                    debug!(line_number, error = %err, "skipping ingredients line");
                    report.skipped.push(SkippedLine {
                        line_number,
                        reason: err.to_string(),
                    });
                }
            }
        }

        report
    }

    /// Read the whole ingredients file and load it.
    ///
    /// Only failing to read the file is an error; bad lines are reported in the
    /// returned [`LoadReport`].
    pub fn load_ingredients_file(&mut self, path: impl AsRef<Path>) -> Result<LoadReport, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let report = self.load_ingredients(&text);
        info!(
            path = %path.display(),
            applied = report.applied,
            skipped = report.skipped.len(),
            "ingredients file loaded"
        );
        Ok(report)
    }
}
