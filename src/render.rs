//! Projection of a crossword document into drawable canvas primitives
//!
//! [`project`] maps a document snapshot to an ordered primitive list for
//! the host canvas. Order is back-to-front: later primitives are drawn on
//! top, so backgrounds precede cell fills, fills precede labels, and the
//! secret-word frame overlay comes last.
//!
//! The geometry constants here are shared with the interactive grid view
//! so the exported artwork and the sidebar preview stay consistent; the
//! view additionally clamps its cell size to the sidebar width via
//! [`fit_cell_size`], while export always uses [`CANVAS_CELL_SIZE`].

use crate::document::{CrosswordDocument, CrosswordMode};

/// Cell edge length on the exported canvas.
pub const CANVAS_CELL_SIZE: f64 = 40.0;
/// Gap between cells (and the classic-mode grid line width).
pub const CANVAS_BORDER_WIDTH: f64 = 1.0;
/// Thickness of the secret-word column frame.
pub const SECRET_FRAME_WIDTH: f64 = 2.0;

/// Width of the plugin sidebar hosting the interactive view.
pub const SIDEBAR_WIDTH: i32 = 272;
/// Horizontal padding the interactive view reserves for expand buttons.
const SIDEBAR_PADDING: i32 = 32;
pub const MIN_CELL_SIZE: i32 = 20;
pub const MAX_CELL_SIZE: i32 = 40;

pub const COLOR_WHITE: &str = "#ffffff";
pub const COLOR_BLACK: &str = "#000000";
pub const COLOR_BORDER: &str = "#000000";
pub const COLOR_ROW_NUMBER: &str = "#6b7280";

const LETTER_FONT_SIZE: f64 = 20.0;
const SMALL_FONT_SIZE: f64 = 10.0;

/// One drawable element for the host canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Shape(ShapeElement),
    Text(TextElement),
}

impl Primitive {
    pub fn as_shape(&self) -> Option<&ShapeElement> {
        match self {
            Primitive::Shape(shape) => Some(shape),
            Primitive::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextElement> {
        match self {
            Primitive::Text(text) => Some(text),
            Primitive::Shape(_) => None,
        }
    }
}

/// A filled vector shape: one or more path outlines in a local view box.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeElement {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
    pub paths: Vec<ShapePath>,
    pub view_box: ViewBox,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShapePath {
    /// SVG-style outline, e.g. `M 0 0 H 40 V 40 H 0 Z`.
    pub d: String,
    pub fill_color: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub lines: Vec<String>,
    pub font_size: f64,
    pub font_weight: FontWeight,
    pub color: String,
    pub text_align: TextAlign,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Start,
    Center,
}

/// Interactive-view cell size: fit `num_cols` columns into the sidebar,
/// clamped to `[MIN_CELL_SIZE, MAX_CELL_SIZE]`.
pub fn fit_cell_size(num_cols: i32) -> i32 {
    let available = SIDEBAR_WIDTH - SIDEBAR_PADDING;
    (available / num_cols.max(1)).clamp(MIN_CELL_SIZE, MAX_CELL_SIZE)
}

/// Project `doc` into an ordered, back-to-front primitive list.
pub fn project(doc: &CrosswordDocument) -> Vec<Primitive> {
    match doc.mode {
        CrosswordMode::Classic => project_classic(doc),
        CrosswordMode::Secret => project_secret(doc),
    }
}

fn project_classic(doc: &CrosswordDocument) -> Vec<Primitive> {
    let Some(bounds) = doc.grid.bounds() else {
        return Vec::new();
    };

    let cell = CANVAS_CELL_SIZE;
    let border = CANVAS_BORDER_WIDTH;
    let pitch = cell + border;

    let mut elements = Vec::new();

    // Grid-spanning black background; the gaps between cell fills read as
    // grid lines.
    let bg_width = f64::from(bounds.num_cols()) * pitch + border;
    let bg_height = f64::from(bounds.num_rows()) * pitch + border;
    elements.push(filled_rect(-border, -border, bg_width, bg_height, COLOR_BLACK));

    for pos in doc.grid.sorted_positions() {
        let cell_data = match doc.grid.get(pos) {
            Some(c) => c,
            None => continue,
        };
        let x = f64::from(pos.col - bounds.min_col) * pitch;
        let y = f64::from(pos.row - bounds.min_row) * pitch;

        let fill = if cell_data.is_black {
            COLOR_BLACK
        } else {
            COLOR_WHITE
        };
        elements.push(filled_rect(x, y, cell, cell, fill));

        if cell_data.is_black {
            continue;
        }
        if let Some(number) = cell_data.clue_number {
            elements.push(Primitive::Text(TextElement {
                top: y + 1.0,
                left: x + 2.0,
                width: cell - 4.0,
                lines: vec![number.to_string()],
                font_size: SMALL_FONT_SIZE,
                font_weight: FontWeight::Normal,
                color: COLOR_BLACK.to_string(),
                text_align: TextAlign::Start,
            }));
        }
        if let Some(letter) = cell_data.letter {
            elements.push(letter_label(x, y, letter));
        }
    }

    elements
}

fn project_secret(doc: &CrosswordDocument) -> Vec<Primitive> {
    let Some(bounds) = doc.grid.bounds() else {
        return Vec::new();
    };

    let cell = CANVAS_CELL_SIZE;
    let border = CANVAS_BORDER_WIDTH;
    let pitch = cell + border;

    let first_white = if doc.show_row_numbers {
        Some(doc.grid.first_white_col_per_row())
    } else {
        None
    };

    // Extend the column span one to the left when a row-number label
    // would otherwise fall outside the grid rectangle.
    let mut origin_col = bounds.min_col;
    if let Some(first_white) = &first_white {
        if first_white.values().any(|&col| col == bounds.min_col) {
            origin_col -= 1;
        }
    }

    let mut elements = Vec::new();

    // Row-number labels, one per row that has a white cell, just left of
    // that row's first white cell.
    if let Some(first_white) = &first_white {
        for row in bounds.min_row..=bounds.max_row {
            let Some(&first_col) = first_white.get(&row) else {
                continue;
            };
            let x = f64::from(first_col - 1 - origin_col) * pitch;
            let y = f64::from(row - bounds.min_row) * pitch;
            elements.push(Primitive::Text(TextElement {
                top: y + cell * 0.2,
                left: x,
                width: cell,
                lines: vec![format!("{}.", row - bounds.min_row + 1)],
                font_size: SMALL_FONT_SIZE,
                font_weight: FontWeight::Normal,
                color: COLOR_ROW_NUMBER.to_string(),
                text_align: TextAlign::Center,
            }));
        }
    }

    // Floating bordered cells. Black cells are skipped entirely so they
    // render as transparent.
    for pos in doc.grid.sorted_positions() {
        let cell_data = match doc.grid.get(pos) {
            Some(c) if !c.is_black => c,
            _ => continue,
        };
        let x = f64::from(pos.col - origin_col) * pitch;
        let y = f64::from(pos.row - bounds.min_row) * pitch;

        // Oversized black rectangle behind the white fill acts as the
        // cell outline.
        let outer = cell + border * 2.0;
        elements.push(filled_rect(x - border, y - border, outer, outer, COLOR_BORDER));
        elements.push(filled_rect(x, y, cell, cell, COLOR_WHITE));

        if let Some(letter) = cell_data.letter {
            elements.push(letter_label(x, y, letter));
        }
    }

    // Secret-word frame around the contiguous white run of the chosen
    // column, with thin dividers between adjacent rows inside it.
    if let Some(secret_col) = doc.secret_col {
        if let Some((first_row, last_row)) = white_row_extent(doc, secret_col) {
            let fx = f64::from(secret_col - origin_col) * pitch;
            let fy = f64::from(first_row - bounds.min_row) * pitch;
            let fw = cell;
            let fh = f64::from(last_row - first_row + 1) * pitch - border;
            let bw = SECRET_FRAME_WIDTH;

            let outer_w = fw + bw * 2.0;
            let outer_h = fh + bw * 2.0;
            elements.push(Primitive::Shape(ShapeElement {
                top: fy - bw,
                left: fx - bw,
                width: outer_w,
                height: outer_h,
                paths: vec![
                    rect_path_at(0.0, 0.0, outer_w, bw, COLOR_BORDER),
                    rect_path_at(0.0, outer_h - bw, outer_w, bw, COLOR_BORDER),
                    rect_path_at(0.0, 0.0, bw, outer_h, COLOR_BORDER),
                    rect_path_at(outer_w - bw, 0.0, bw, outer_h, COLOR_BORDER),
                ],
                view_box: ViewBox {
                    top: 0.0,
                    left: 0.0,
                    width: outer_w,
                    height: outer_h,
                },
            }));

            for row in first_row..last_row {
                let y = f64::from(row + 1 - bounds.min_row) * pitch - border;
                elements.push(filled_rect(fx, y, fw, border, COLOR_BORDER));
            }
        }
    }

    elements
}

/// Min and max rows holding a white cell in `col`, if any.
fn white_row_extent(doc: &CrosswordDocument, col: i32) -> Option<(i32, i32)> {
    let mut extent: Option<(i32, i32)> = None;
    for (pos, cell) in doc.grid.iter() {
        if cell.is_black || pos.col != col {
            continue;
        }
        extent = Some(match extent {
            Some((min, max)) => (min.min(pos.row), max.max(pos.row)),
            None => (pos.row, pos.row),
        });
    }
    extent
}

fn letter_label(x: f64, y: f64, letter: char) -> Primitive {
    Primitive::Text(TextElement {
        top: y + CANVAS_CELL_SIZE * 0.2,
        left: x,
        width: CANVAS_CELL_SIZE,
        lines: vec![letter.to_string()],
        font_size: LETTER_FONT_SIZE,
        font_weight: FontWeight::Bold,
        color: COLOR_BLACK.to_string(),
        text_align: TextAlign::Center,
    })
}

/// Single-path rectangle shape positioned on the canvas.
fn filled_rect(left: f64, top: f64, width: f64, height: f64, color: &str) -> Primitive {
    Primitive::Shape(ShapeElement {
        top,
        left,
        width,
        height,
        paths: vec![rect_path_at(0.0, 0.0, width, height, color)],
        view_box: ViewBox {
            top: 0.0,
            left: 0.0,
            width,
            height,
        },
    })
}

fn rect_path_at(x: f64, y: f64, width: f64, height: f64, color: &str) -> ShapePath {
    ShapePath {
        d: format!("M {} {} H {} V {} H {} Z", x, y, x + width, y + height, x),
        fill_color: color.to_string(),
    }
}
