//! Core types for cellgrid.
//!
//! These define what the renderer understands: colors, text attributes,
//! hyperlinks, and the [`Cell`] that every draw operation ultimately
//! produces.

use bitflags::bitflags;

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Using integers for exact comparison - no floating point epsilon needed.
/// "Unset" is expressed as `Option::<Rgba>::None` wherever a color is
/// optional (see [`Style`]); there is no in-band default sentinel.
/// Special value: r=-2 marks an ANSI palette color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
            a: a as i16,
        }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    /// Create an ANSI palette color (0-255).
    ///
    /// Uses special marker: r=-2, g=palette_index.
    pub const fn ansi(index: u8) -> Self {
        Self {
            r: -2,
            g: index as i16,
            b: 0,
            a: 255,
        }
    }

    /// Check if this is an ANSI palette color.
    #[inline]
    pub const fn is_ansi(&self) -> bool {
        self.r == -2
    }

    /// Get ANSI palette index (only valid if is_ansi() returns true).
    #[inline]
    pub const fn ansi_index(&self) -> u8 {
        self.g as u8
    }

    /// Create from 0xRRGGBB integer format.
    pub const fn from_rgb_int(rgb: u32) -> Self {
        Self::rgb(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }
}

// =============================================================================
// Text attributes (bitflags)
// =============================================================================

bitflags! {
    /// Text attributes as a bitfield for efficient storage and comparison.
    ///
    /// Every bit toggles independently; combine with bitwise OR:
    /// `Attr::BOLD | Attr::ITALIC`. Underlining is not a bit here - it is
    /// the separate [`UnderlineStyle`] enum, orthogonal to these flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const FAINT = 1 << 1;
        const ITALIC = 1 << 2;
        const BLINK = 1 << 3;
        const REVERSE = 1 << 4;
        const CONCEAL = 1 << 5;
        const STRIKETHROUGH = 1 << 6;
    }
}

// =============================================================================
// Underline style
// =============================================================================

/// Underline variants supported by modern terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum UnderlineStyle {
    #[default]
    None = 0,
    Single = 1,
    Double = 2,
    Curly = 3,
    Dotted = 4,
    Dashed = 5,
}

// =============================================================================
// Style
// =============================================================================

/// The full paint state applied to a cell.
///
/// `None` colors mean "terminal default". Attribute bits and underline
/// style are independent: toggling one never perturbs another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color, or `None` for the terminal default.
    pub fg: Option<Rgba>,
    /// Background color, or `None` for the terminal default.
    pub bg: Option<Rgba>,
    /// Underline color, or `None` for the terminal default.
    pub underline_color: Option<Rgba>,
    /// Attribute flags (bold, italic, etc.).
    pub attrs: Attr,
    /// Underline style.
    pub underline: UnderlineStyle,
}

// =============================================================================
// Link
// =============================================================================

/// A hyperlink attached to rendered cells (OSC 8 semantics).
///
/// The empty-URL value is the canonical "no link" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Link {
    pub url: String,
    pub params: String,
}

impl Link {
    /// Create a link with the given URL and parameter string.
    pub fn new(url: impl Into<String>, params: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            params: params.into(),
        }
    }

    /// The "no link" sentinel.
    pub fn none() -> Self {
        Self::default()
    }

    /// Check if this is the "no link" sentinel.
    #[inline]
    pub fn is_none(&self) -> bool {
        self.url.is_empty()
    }
}

// =============================================================================
// Cell - the atomic unit of rendering
// =============================================================================

/// A single grid cell's renderable unit.
///
/// Content is one grapheme cluster (possibly several codepoints), and
/// `width` is the number of display columns it occupies: usually 1, 2 for
/// wide characters, 0 only for the rare zero-width cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// One grapheme cluster.
    pub content: String,
    /// Display columns occupied by the content.
    pub width: usize,
    /// Paint state.
    pub style: Style,
    /// Attached hyperlink.
    pub link: Link,
}

impl Cell {
    /// Create a cell, measuring the content's display width.
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        let width = crate::text::string_width(&content);
        Self {
            content,
            width,
            style: Style::default(),
            link: Link::none(),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            content: " ".to_string(),
            width: 1,
            style: Style::default(),
            link: Link::none(),
        }
    }
}
