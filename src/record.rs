//! Compact persistence record for the host document store
//!
//! The host keeps one small record per crossword element, so field names
//! are single letters and cells are stored as a flat list. `to_record`
//! and `from_record` are exact inverses for any document satisfying the
//! data-model invariants.
//!
//! The record is versioned (`v`, currently 1). Decoding fails fast on
//! records written by a newer format; malformed JSON surfaces as a
//! [`RecordError::Json`]. The host consults [`byte_size`] against
//! [`MAX_RECORD_SIZE`] before committing a record back.

use serde::{Deserialize, Serialize};

use crate::document::{Clues, CrosswordDocument, CrosswordMode};
use crate::grid::{Cell, Grid, Pos};
use crate::numbering::ClueEntry;

/// Current record format version.
pub const RECORD_VERSION: u32 = 1;

/// Host-imposed ceiling on the serialized record size, in bytes of JSON
/// text. Exceeding it blocks the commit action, not local editing.
pub const MAX_RECORD_SIZE: usize = 5000;

/// Wire form of a [`CrosswordDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Format version.
    pub v: u32,
    pub cells: Vec<CellRecord>,
    /// Across clues.
    pub ca: Vec<ClueRecord>,
    /// Down clues.
    pub cd: Vec<ClueRecord>,
    /// Secret-word column.
    pub sc: Option<i32>,
    /// Show row numbers.
    #[serde(default)]
    pub rn: bool,
    /// Mode tag ("classic" | "secret").
    #[serde(default)]
    pub m: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRecord {
    pub r: i32,
    pub c: i32,
    pub b: bool,
    /// Letter as a 0- or 1-character string.
    pub l: String,
    pub n: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueRecord {
    pub n: u32,
    pub t: String,
    pub r: i32,
    pub c: i32,
}

/// Errors surfaced when decoding a record at the host boundary.
#[derive(Debug)]
pub enum RecordError {
    Json(serde_json::Error),
    VersionTooNew { version: u32, max_supported: u32 },
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordError::Json(e) => write!(f, "JSON error: {}", e),
            RecordError::VersionTooNew {
                version,
                max_supported,
            } => {
                write!(
                    f,
                    "Record version {} is newer than supported (max: {})",
                    version, max_supported
                )
            }
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecordError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for RecordError {
    fn from(e: serde_json::Error) -> Self {
        RecordError::Json(e)
    }
}

/// Serialize a document into its wire record. Cells are emitted in
/// `(row, col)` order so equal documents produce identical records.
pub fn to_record(doc: &CrosswordDocument) -> DocumentRecord {
    let cells = doc
        .grid
        .sorted_positions()
        .into_iter()
        .filter_map(|pos| {
            doc.grid.get(pos).map(|cell| CellRecord {
                r: pos.row,
                c: pos.col,
                b: cell.is_black,
                l: cell.letter.map(String::from).unwrap_or_default(),
                n: cell.clue_number,
            })
        })
        .collect();

    DocumentRecord {
        v: RECORD_VERSION,
        cells,
        ca: doc.clues.across.iter().map(clue_to_record).collect(),
        cd: doc.clues.down.iter().map(clue_to_record).collect(),
        sc: doc.secret_col,
        rn: doc.show_row_numbers,
        m: doc.mode.as_str().to_string(),
    }
}

/// Rebuild a document from its wire record. The record is trusted (the
/// host deserialized it); no structural validation happens here.
pub fn from_record(record: &DocumentRecord) -> CrosswordDocument {
    let mut grid = Grid::new();
    for cell in &record.cells {
        grid.insert(
            Pos::new(cell.r, cell.c),
            Cell {
                is_black: cell.b,
                letter: cell.l.chars().next(),
                clue_number: cell.n,
            },
        );
    }

    CrosswordDocument {
        grid,
        clues: Clues {
            across: record.ca.iter().map(clue_from_record).collect(),
            down: record.cd.iter().map(clue_from_record).collect(),
        },
        secret_col: record.sc,
        show_row_numbers: record.rn,
        mode: CrosswordMode::from_tag(&record.m),
    }
}

/// Encode a record as the JSON text the host stores.
pub fn encode(record: &DocumentRecord) -> Result<String, RecordError> {
    Ok(serde_json::to_string(record)?)
}

/// Decode the host's JSON text, rejecting records from a newer format.
pub fn decode(json: &str) -> Result<DocumentRecord, RecordError> {
    let record: DocumentRecord = serde_json::from_str(json)?;
    if record.v > RECORD_VERSION {
        return Err(RecordError::VersionTooNew {
            version: record.v,
            max_supported: RECORD_VERSION,
        });
    }
    Ok(record)
}

/// Serialized size of `record` in bytes of JSON text, as counted against
/// the host's [`MAX_RECORD_SIZE`] ceiling.
pub fn byte_size(record: &DocumentRecord) -> usize {
    serde_json::to_string(record).map(|s| s.len()).unwrap_or(0)
}

fn clue_to_record(entry: &ClueEntry) -> ClueRecord {
    ClueRecord {
        n: entry.number,
        t: entry.text.clone(),
        r: entry.row,
        c: entry.col,
    }
}

fn clue_from_record(record: &ClueRecord) -> ClueEntry {
    ClueEntry {
        number: record.n,
        text: record.t.clone(),
        row: record.r,
        col: record.c,
    }
}
