//! The grapheme-aware rendering core.
//!
//! [`draw_graphemes`] walks a sequence of grapheme clusters and commits one
//! [`Cell`] per cluster to a [`Screen`], deciding placement, wrapping, and
//! clipping against the screen's bounds. It is single-pass and consumes the
//! cluster sequence lazily, so arbitrarily long inputs render in bounded
//! memory.
//!
//! # Algorithm
//!
//! 1. Normalize the screen bounds to a local origin, decoupling the
//!    wrapping/clipping arithmetic from the viewport's absolute placement.
//! 2. A start position outside the bounds is a no-op, not an error.
//! 3. For each cluster: newline does carriage-return + line-feed; a cluster
//!    that would cross the right edge either wraps (wrap on) or ends the
//!    walk (wrap off, silent clip); vertical overflow always ends the walk.
//! 4. After a write the cursor advances by the cluster's width, wrapping
//!    pre-emptively when it lands exactly on the right edge.
//!
//! The final cursor position is returned so callers can chain writes.

use unicode_segmentation::UnicodeSegmentation;

use crate::geometry::Pos;
use crate::screen::Screen;
use crate::types::{Cell, Link, Style};

/// Render a sequence of grapheme clusters onto a screen.
///
/// Returns the final cursor position. Zero-length input performs zero
/// writes and returns the start position unchanged; every bounds violation
/// degrades to "stop writing".
pub fn draw_graphemes<'a, S, I>(
    scr: &mut S,
    graphemes: I,
    start: Pos,
    style: Style,
    link: &Link,
    wrap: bool,
) -> Pos
where
    S: Screen + ?Sized,
    I: IntoIterator<Item = &'a str>,
{
    let bounds = scr.bounds().local();
    let (mut x, mut y) = (start.x, start.y);
    if !bounds.contains(start) {
        return start;
    }

    for gr in graphemes {
        if gr == "\n" {
            x = bounds.min.x;
            y += 1;
            continue;
        }

        let w = scr.string_width(gr) as i32;
        let mut pos = Pos::new(x, y);
        if x + w > bounds.max.x {
            if wrap {
                x = bounds.min.x;
                y += 1;
                pos = Pos::new(x, y);
            } else {
                break;
            }
        }
        if !bounds.contains(pos) {
            break;
        }

        scr.set_cell(
            x,
            y,
            &Cell {
                content: gr.to_string(),
                width: w as usize,
                style,
                link: link.clone(),
            },
        );

        x += w;
        if wrap && x >= bounds.max.x {
            x = bounds.min.x;
            y += 1;
        }
    }

    Pos::new(x, y)
}

/// Render a string at a position, clipping at the right edge.
pub fn draw_str<S: Screen + ?Sized>(
    scr: &mut S,
    s: &str,
    start: Pos,
    style: Style,
    link: &Link,
) -> Pos {
    draw_graphemes(scr, s.graphemes(true), start, style, link, false)
}

/// Render a string at a position, wrapping at the right edge.
pub fn draw_str_wrapped<S: Screen + ?Sized>(
    scr: &mut S,
    s: &str,
    start: Pos,
    style: Style,
    link: &Link,
) -> Pos {
    draw_graphemes(scr, s.graphemes(true), start, style, link, true)
}
