//! Puzzle file loading and validation.
//!
//! Format:
//! - header line: `<rows> <cols> <piece count>`, whitespace separated
//! - a case-type line (required, but not consumed by the search)
//! - piece rows: contiguous runs of lines whose first symbol matches form one
//!   piece. Blank lines are skipped. Indentation shared by all rows of a
//!   piece is stripped, so relative geometry survives while the declared
//!   label column does not have to start at column zero.
//!
//! All format errors are detected here, before the solver ever runs.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::shape::{Puzzle, Shape};

/// Errors detected while loading or parsing a puzzle file.
#[derive(Debug)]
pub enum FormatError {
    /// The file could not be read.
    Io {
        path: PathBuf,
        source: io::Error,
    },
    /// The input is empty.
    MissingHeader,
    /// The header line is not three integers.
    InvalidHeader { line: String },
    /// The case-type line is absent.
    MissingCaseType,
    /// The number of parsed pieces differs from the declared count.
    PieceCountMismatch { declared: usize, parsed: usize },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read '{}': {source}", path.display())
            }
            Self::MissingHeader => write!(f, "missing header line"),
            Self::InvalidHeader { line } => {
                write!(
                    f,
                    "invalid header '{line}': expected '<rows> <cols> <pieces>'"
                )
            }
            Self::MissingCaseType => write!(f, "missing case-type line"),
            Self::PieceCountMismatch { declared, parsed } => {
                write!(f, "declared {declared} pieces but parsed {parsed}")
            }
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Reads and parses a puzzle file.
pub fn load_puzzle(path: &Path) -> Result<Puzzle, FormatError> {
    let text = fs::read_to_string(path).map_err(|source| FormatError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_puzzle(&text)
}

/// Parses puzzle text into a validated puzzle instance.
pub fn parse_puzzle(text: &str) -> Result<Puzzle, FormatError> {
    let mut lines = text.lines();

    let header = lines.next().ok_or(FormatError::MissingHeader)?;
    let fields: Vec<&str> = header.split_whitespace().collect();
    let [rows, cols, declared] = fields.as_slice() else {
        return Err(FormatError::InvalidHeader {
            line: header.to_string(),
        });
    };
    let parse_field = |field: &str| {
        field.parse::<usize>().map_err(|_| FormatError::InvalidHeader {
            line: header.to_string(),
        })
    };
    let rows = parse_field(rows)?;
    let cols = parse_field(cols)?;
    let declared = parse_field(declared)?;

    // the case-type field is part of the format but has no effect on the
    // search; the board is always a plain rectangle
    let _case_type = lines.next().ok_or(FormatError::MissingCaseType)?;

    let mut groups: Vec<Vec<&str>> = Vec::new();
    let mut previous_label = None;
    for line in lines {
        let trimmed = line.trim_end();
        let Some(label) = trimmed.trim_start().chars().next() else {
            continue;
        };
        match groups.last_mut() {
            Some(group) if previous_label == Some(label) => group.push(trimmed),
            _ => {
                groups.push(vec![trimmed]);
                previous_label = Some(label);
            }
        }
    }

    if groups.len() != declared {
        return Err(FormatError::PieceCountMismatch {
            declared,
            parsed: groups.len(),
        });
    }

    let shapes = groups
        .iter()
        .map(|group| {
            let indent = group
                .iter()
                .map(|row| leading_spaces(row))
                .min()
                .unwrap_or(0);
            let stripped: Vec<&str> = group.iter().map(|row| &row[indent..]).collect();
            Shape::from_rows(&stripped)
        })
        .collect();

    Ok(Puzzle::new(rows, cols, shapes))
}

fn leading_spaces(row: &str) -> usize {
    row.bytes().take_while(|&byte| byte == b' ').count()
}
