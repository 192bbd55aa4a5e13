//! # cellgrid
//!
//! Layout and grapheme-aware text rendering core for character-grid UIs.
//!
//! cellgrid reconciles three independent measurement systems - logical size
//! constraints, grapheme-cluster segmentation, and display-column width -
//! while guaranteeing no out-of-bounds writes and deterministic
//! wrapping/clipping behavior.
//!
//! ## Architecture
//!
//! Three components, leaves first:
//!
//! - [`layout`] - pure constraint resolution and area splitting: a
//!   [`Constraint`] plus an available [`Rect`] becomes two disjoint
//!   sub-regions, or a region anchored at one of nine reference points.
//! - [`context`] - the [`Context`]: per-writer (style, link, cursor) state
//!   bound to a screen, with `with_*` copy-and-mutate siblings of every
//!   setter for chained configuration.
//! - [`render`] - the grapheme-aware renderer: walks grapheme clusters,
//!   measures display width, wraps or clips against the screen bounds, and
//!   commits one [`Cell`] per cluster.
//!
//! The screen itself is an external collaborator behind the [`Screen`]
//! trait; [`Buffer`] is the in-memory reference implementation. Width
//! measurement lives in [`text`], built on `unicode-width` and
//! `unicode-segmentation`.
//!
//! Everything is single-threaded and infallible: malformed or boundary
//! input degrades to clamping, a no-op, or early termination, never a
//! panic or an error value.

pub mod context;
pub mod geometry;
pub mod layout;
pub mod render;
pub mod screen;
pub mod text;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use geometry::{Pos, Rect};

pub use layout::{
    bottom_center_rect, bottom_left_rect, bottom_right_rect, center_rect, left_center_rect,
    ratio, right_center_rect, split_horizontal, split_vertical, top_center_rect, top_left_rect,
    top_right_rect, Constraint, Fixed, Percent,
};

pub use context::Context;
pub use render::{draw_graphemes, draw_str, draw_str_wrapped};
pub use screen::{Buffer, Screen};
pub use text::{char_width, grapheme_width, string_width};
