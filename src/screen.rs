//! The screen abstraction the renderer writes into.
//!
//! The core never touches a terminal. It talks to a [`Screen`]: something
//! with addressable bounds, a width-measurement method, and a single-cell
//! write operation. [`Buffer`] is the in-memory reference implementation,
//! used by the test suite and suitable as a staging surface for a diffing
//! terminal backend.

use crate::geometry::{Pos, Rect};
use crate::text;
use crate::types::Cell;

/// A bounded, cell-addressable render target.
///
/// Cell coordinates passed to [`set_cell`](Screen::set_cell) are relative
/// to the top-left of the addressable region, regardless of where
/// [`bounds`](Screen::bounds) places that region. The renderer guarantees
/// it never writes outside the normalized bounds.
pub trait Screen {
    /// The addressable region of this screen.
    fn bounds(&self) -> Rect;

    /// Write one cell at the given local coordinates.
    fn set_cell(&mut self, x: i32, y: i32, cell: &Cell);

    /// Display width of a grapheme cluster on this screen.
    ///
    /// Defaults to the crate's Unicode measurement; screens backed by a
    /// renderer with different width rules can override.
    fn string_width(&self, s: &str) -> usize {
        text::string_width(s)
    }
}

/// An in-memory grid of cells.
///
/// Uses flat storage with row-major indexing: `index = y * width + x`.
/// The reported bounds may start at a non-zero origin (a viewport into a
/// larger surface); cell storage is always local to the region.
#[derive(Debug, Clone, PartialEq)]
pub struct Buffer {
    origin: Pos,
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a buffer at the origin filled with default cells.
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_origin(Pos::ORIGIN, width, height)
    }

    /// Create a buffer whose bounds start at `origin`.
    ///
    /// Negative extents are treated as zero.
    pub fn with_origin(origin: Pos, width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let size = width as usize * height as usize;
        Self {
            origin,
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    /// Buffer width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Buffer height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get a cell reference (returns None if out of bounds).
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// The textual content of a row, ignoring styling.
    ///
    /// Wide cells contribute their full content once; the test suite uses
    /// this to assert on rendered lines.
    pub fn row_text(&self, y: i32) -> String {
        let mut out = String::new();
        let mut x = 0;
        while x < self.width {
            if let Some(cell) = self.get(x, y) {
                out.push_str(&cell.content);
                x += cell.width.max(1) as i32;
            } else {
                break;
            }
        }
        out
    }
}

impl Screen for Buffer {
    fn bounds(&self) -> Rect {
        Rect {
            min: self.origin,
            max: Pos::new(self.origin.x + self.width, self.origin.y + self.height),
        }
    }

    fn set_cell(&mut self, x: i32, y: i32, cell: &Cell) {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            self.cells[idx] = cell.clone();
        }
    }
}
