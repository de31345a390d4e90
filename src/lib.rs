// Crossword grid engine - exposes all core modules for the host plugin

pub mod document;
pub mod grid;
pub mod numbering;
pub mod record;
pub mod render;

pub use document::{ClueDirection, Clues, CrosswordDocument, CrosswordMode, MAX_GRID_SIZE};
pub use grid::{Bounds, Cell, Direction, Grid, Pos};
pub use numbering::{assign_clue_numbers, ClueEntry, ClueStarts};
pub use record::{
    byte_size, decode, encode, from_record, to_record, DocumentRecord, RecordError,
    MAX_RECORD_SIZE, RECORD_VERSION,
};
pub use render::{project, Primitive, ShapeElement, TextElement};
