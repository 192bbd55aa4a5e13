//! The drawing context: per-writer style, link, and cursor state.
//!
//! A [`Context`] exclusively borrows a [`Screen`] and owns a mutable
//! (style, link, position) triple. Every setter has a `with_*` sibling
//! that returns a fork with an independent copy of the triple, leaving the
//! receiver's state untouched - forks reborrow the same screen, so access
//! stays serialized through the borrow checker:
//!
//! ```
//! use cellgrid::{Buffer, Context};
//!
//! let mut buf = Buffer::new(20, 4);
//! let mut ctx = Context::new(&mut buf);
//! ctx.with_bold(true).with_underline(true).draw_str("hi", 0, 0);
//! // ctx itself is still plain
//! ```
//!
//! The context implements [`std::fmt::Write`], so `write!` and `writeln!`
//! render at the cursor with wrapping and advance it across calls.
//!
//! Setters never touch the screen; cells are only written by the
//! text-emitting operations. No setter does bounds checking - bounds are
//! enforced by the renderer.

use std::fmt;

use unicode_segmentation::UnicodeSegmentation;

use crate::geometry::Pos;
use crate::render;
use crate::screen::Screen;
use crate::types::{Attr, Link, Rgba, Style, UnderlineStyle};

/// A drawing context for rendering operations on a screen.
#[derive(Debug)]
pub struct Context<'s, S: Screen + ?Sized> {
    screen: &'s mut S,
    style: Style,
    link: Link,
    pos: Pos,
}

impl<'s, S: Screen + ?Sized> Context<'s, S> {
    /// Create a context for the given screen, with default style, no link,
    /// and the cursor at the origin.
    pub fn new(screen: &'s mut S) -> Self {
        Self {
            screen,
            style: Style::default(),
            link: Link::none(),
            pos: Pos::ORIGIN,
        }
    }

    /// Reset style, link, and position to their defaults without
    /// recreating the context.
    pub fn reset(&mut self) {
        self.style = Style::default();
        self.link = Link::none();
        self.pos = Pos::ORIGIN;
    }

    /// Fork the context: same screen, independent copy of the state.
    fn fork(&mut self) -> Context<'_, S> {
        Context {
            screen: &mut *self.screen,
            style: self.style,
            link: self.link.clone(),
            pos: self.pos,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The current style.
    pub fn style(&self) -> Style {
        self.style
    }

    /// The current link.
    pub fn link(&self) -> &Link {
        &self.link
    }

    /// The current cursor position as a raw (x, y) pair.
    pub fn position(&self) -> (i32, i32) {
        (self.pos.x, self.pos.y)
    }

    // =========================================================================
    // Style and link setters
    // =========================================================================

    /// Set the style of the context.
    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    /// Returns a fork of the context with the given style.
    pub fn with_style(&mut self, style: Style) -> Context<'_, S> {
        let mut c = self.fork();
        c.set_style(style);
        c
    }

    /// Set the link of the context.
    pub fn set_link(&mut self, link: Link) {
        self.link = link;
    }

    /// Returns a fork of the context with the given link.
    pub fn with_link(&mut self, link: Link) -> Context<'_, S> {
        let mut c = self.fork();
        c.set_link(link);
        c
    }

    /// Set the attribute bits of the context wholesale.
    pub fn set_attrs(&mut self, attrs: Attr) {
        self.style.attrs = attrs;
    }

    /// Returns a fork of the context with the given attribute bits.
    pub fn with_attrs(&mut self, attrs: Attr) -> Context<'_, S> {
        let mut c = self.fork();
        c.set_attrs(attrs);
        c
    }

    /// Set the foreground color. Use `None` to reset to default.
    pub fn set_foreground(&mut self, fg: Option<Rgba>) {
        self.style.fg = fg;
    }

    /// Returns a fork of the context with the given foreground color.
    pub fn with_foreground(&mut self, fg: Option<Rgba>) -> Context<'_, S> {
        let mut c = self.fork();
        c.set_foreground(fg);
        c
    }

    /// Set the background color. Use `None` to reset to default.
    pub fn set_background(&mut self, bg: Option<Rgba>) {
        self.style.bg = bg;
    }

    /// Returns a fork of the context with the given background color.
    pub fn with_background(&mut self, bg: Option<Rgba>) -> Context<'_, S> {
        let mut c = self.fork();
        c.set_background(bg);
        c
    }

    /// Set the underline color. Use `None` to reset to default.
    pub fn set_underline_color(&mut self, color: Option<Rgba>) {
        self.style.underline_color = color;
    }

    /// Returns a fork of the context with the given underline color.
    pub fn with_underline_color(&mut self, color: Option<Rgba>) -> Context<'_, S> {
        let mut c = self.fork();
        c.set_underline_color(color);
        c
    }

    #[inline]
    fn set_attr(&mut self, flag: Attr, on: bool) {
        self.style.attrs.set(flag, on);
    }

    /// Set whether text should be bold.
    pub fn set_bold(&mut self, bold: bool) {
        self.set_attr(Attr::BOLD, bold);
    }

    /// Returns a fork of the context with the given bold attribute.
    pub fn with_bold(&mut self, bold: bool) -> Context<'_, S> {
        let mut c = self.fork();
        c.set_bold(bold);
        c
    }

    /// Set whether text should be faint.
    pub fn set_faint(&mut self, faint: bool) {
        self.set_attr(Attr::FAINT, faint);
    }

    /// Returns a fork of the context with the given faint attribute.
    pub fn with_faint(&mut self, faint: bool) -> Context<'_, S> {
        let mut c = self.fork();
        c.set_faint(faint);
        c
    }

    /// Set whether text should be italic.
    pub fn set_italic(&mut self, italic: bool) {
        self.set_attr(Attr::ITALIC, italic);
    }

    /// Returns a fork of the context with the given italic attribute.
    pub fn with_italic(&mut self, italic: bool) -> Context<'_, S> {
        let mut c = self.fork();
        c.set_italic(italic);
        c
    }

    /// Set whether text should blink.
    pub fn set_blink(&mut self, blink: bool) {
        self.set_attr(Attr::BLINK, blink);
    }

    /// Returns a fork of the context with the given blink attribute.
    pub fn with_blink(&mut self, blink: bool) -> Context<'_, S> {
        let mut c = self.fork();
        c.set_blink(blink);
        c
    }

    /// Set whether text should be reversed.
    pub fn set_reverse(&mut self, reverse: bool) {
        self.set_attr(Attr::REVERSE, reverse);
    }

    /// Returns a fork of the context with the given reverse attribute.
    pub fn with_reverse(&mut self, reverse: bool) -> Context<'_, S> {
        let mut c = self.fork();
        c.set_reverse(reverse);
        c
    }

    /// Set whether text should be concealed.
    pub fn set_conceal(&mut self, conceal: bool) {
        self.set_attr(Attr::CONCEAL, conceal);
    }

    /// Returns a fork of the context with the given conceal attribute.
    pub fn with_conceal(&mut self, conceal: bool) -> Context<'_, S> {
        let mut c = self.fork();
        c.set_conceal(conceal);
        c
    }

    /// Set whether text should be struck through.
    pub fn set_strikethrough(&mut self, strikethrough: bool) {
        self.set_attr(Attr::STRIKETHROUGH, strikethrough);
    }

    /// Returns a fork of the context with the given strikethrough attribute.
    pub fn with_strikethrough(&mut self, strikethrough: bool) -> Context<'_, S> {
        let mut c = self.fork();
        c.set_strikethrough(strikethrough);
        c
    }

    /// Set the underline style of the context.
    pub fn set_underline_style(&mut self, underline: UnderlineStyle) {
        self.style.underline = underline;
    }

    /// Returns a fork of the context with the given underline style.
    pub fn with_underline_style(&mut self, underline: UnderlineStyle) -> Context<'_, S> {
        let mut c = self.fork();
        c.set_underline_style(underline);
        c
    }

    /// Set whether text should be underlined.
    ///
    /// Convenience for [`set_underline_style`](Self::set_underline_style)
    /// with [`UnderlineStyle::Single`] or [`UnderlineStyle::None`].
    pub fn set_underline(&mut self, underline: bool) {
        self.set_underline_style(if underline {
            UnderlineStyle::Single
        } else {
            UnderlineStyle::None
        });
    }

    /// Returns a fork of the context with the given underline attribute.
    pub fn with_underline(&mut self, underline: bool) -> Context<'_, S> {
        let mut c = self.fork();
        c.set_underline(underline);
        c
    }

    /// Set the URL link for the context. An empty URL clears the link
    /// regardless of any params; otherwise the params are joined with `:`.
    pub fn set_url(&mut self, url: &str, params: &[&str]) {
        if url.is_empty() {
            self.link = Link::none();
            return;
        }
        self.link = Link::new(url, params.join(":"));
    }

    /// Returns a fork of the context with the given URL link.
    pub fn with_url(&mut self, url: &str, params: &[&str]) -> Context<'_, S> {
        let mut c = self.fork();
        c.set_url(url, params);
        c
    }

    // =========================================================================
    // Cursor
    // =========================================================================

    /// Move the cursor to the given coordinates.
    ///
    /// No bounds checking happens here; out-of-bounds positions simply make
    /// the next emit a no-op.
    pub fn move_to(&mut self, x: i32, y: i32) {
        self.pos = Pos::new(x, y);
    }

    /// Move the cursor to the given coordinates.
    ///
    /// Alias for [`move_to`](Self::move_to).
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.move_to(x, y);
    }

    /// Returns a fork of the context with the cursor at the given position.
    pub fn with_position(&mut self, x: i32, y: i32) -> Context<'_, S> {
        let mut c = self.fork();
        c.move_to(x, y);
        c
    }

    // =========================================================================
    // Text emission
    // =========================================================================

    /// Draw a string at the given position with the current style and link,
    /// clipping at the edge of the screen. The cursor is not moved.
    pub fn draw_str(&mut self, s: &str, x: i32, y: i32) {
        render::draw_graphemes(
            &mut *self.screen,
            s.graphemes(true),
            Pos::new(x, y),
            self.style,
            &self.link,
            false,
        );
    }

    /// Draw a string at the given position with the current style and link,
    /// wrapping at the edge of the screen. The cursor is not moved.
    pub fn draw_str_wrapped(&mut self, s: &str, x: i32, y: i32) {
        render::draw_graphemes(
            &mut *self.screen,
            s.graphemes(true),
            Pos::new(x, y),
            self.style,
            &self.link,
            true,
        );
    }

    /// Write a byte slice at the cursor, wrapping and advancing it.
    ///
    /// Invalid UTF-8 is decoded lossily before segmentation.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        let text = String::from_utf8_lossy(bytes);
        self.pos = render::draw_graphemes(
            &mut *self.screen,
            text.graphemes(true),
            self.pos,
            self.style,
            &self.link,
            true,
        );
    }
}

impl<S: Screen + ?Sized> fmt::Write for Context<'_, S> {
    /// Write a string at the cursor with wrapping, advancing the cursor so
    /// successive `write!` calls continue where the last one ended.
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.pos = render::draw_graphemes(
            &mut *self.screen,
            s.graphemes(true),
            self.pos,
            self.style,
            &self.link,
            true,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::Buffer;
    use std::fmt::Write;

    #[test]
    fn test_new_context_defaults() {
        let mut buf = Buffer::new(5, 2);
        let ctx = Context::new(&mut buf);
        assert_eq!(ctx.style(), Style::default());
        assert!(ctx.link().is_none());
        assert_eq!(ctx.position(), (0, 0));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut buf = Buffer::new(5, 2);
        let mut ctx = Context::new(&mut buf);
        ctx.set_bold(true);
        ctx.set_url("https://example.com", &[]);
        ctx.move_to(3, 1);
        ctx.reset();
        assert_eq!(ctx.style(), Style::default());
        assert!(ctx.link().is_none());
        assert_eq!(ctx.position(), (0, 0));
    }

    #[test]
    fn test_attr_setters_are_independent() {
        let mut buf = Buffer::new(5, 2);
        let mut ctx = Context::new(&mut buf);
        ctx.set_bold(true);
        ctx.set_italic(true);
        ctx.set_underline(true);
        ctx.set_bold(false);
        let style = ctx.style();
        assert!(!style.attrs.contains(Attr::BOLD));
        assert!(style.attrs.contains(Attr::ITALIC));
        // Underline lives in its own enum, untouched by attr toggles.
        assert_eq!(style.underline, UnderlineStyle::Single);
    }

    #[test]
    fn test_underline_convenience() {
        let mut buf = Buffer::new(5, 2);
        let mut ctx = Context::new(&mut buf);
        ctx.set_underline(true);
        assert_eq!(ctx.style().underline, UnderlineStyle::Single);
        ctx.set_underline(false);
        assert_eq!(ctx.style().underline, UnderlineStyle::None);
        ctx.set_underline_style(UnderlineStyle::Curly);
        assert_eq!(ctx.style().underline, UnderlineStyle::Curly);
    }

    #[test]
    fn test_color_setters() {
        let mut buf = Buffer::new(5, 2);
        let mut ctx = Context::new(&mut buf);
        ctx.set_foreground(Some(Rgba::RED));
        ctx.set_background(Some(Rgba::BLACK));
        ctx.set_underline_color(Some(Rgba::BLUE));
        let style = ctx.style();
        assert_eq!(style.fg, Some(Rgba::RED));
        assert_eq!(style.bg, Some(Rgba::BLACK));
        assert_eq!(style.underline_color, Some(Rgba::BLUE));
        ctx.set_foreground(None);
        assert_eq!(ctx.style().fg, None);
    }

    #[test]
    fn test_set_url_joins_params() {
        let mut buf = Buffer::new(5, 2);
        let mut ctx = Context::new(&mut buf);
        ctx.set_url("https://example.com", &["id=1", "title=x"]);
        assert_eq!(ctx.link().url, "https://example.com");
        assert_eq!(ctx.link().params, "id=1:title=x");
    }

    #[test]
    fn test_set_url_empty_clears() {
        let mut buf = Buffer::new(5, 2);
        let mut ctx = Context::new(&mut buf);
        ctx.set_url("https://example.com", &["id=1"]);
        // Params passed alongside an empty URL are ignored.
        ctx.set_url("", &["id=2"]);
        assert!(ctx.link().is_none());
        assert_eq!(ctx.link().params, "");
    }

    #[test]
    fn test_move_to_and_alias() {
        let mut buf = Buffer::new(5, 2);
        let mut ctx = Context::new(&mut buf);
        ctx.move_to(3, 1);
        assert_eq!(ctx.position(), (3, 1));
        ctx.set_position(-2, 9);
        assert_eq!(ctx.position(), (-2, 9));
    }

    #[test]
    fn test_with_fork_leaves_receiver_unchanged() {
        let mut buf = Buffer::new(5, 2);
        let mut ctx = Context::new(&mut buf);
        {
            let fork = ctx.with_bold(true);
            assert!(fork.style().attrs.contains(Attr::BOLD));
        }
        assert!(!ctx.style().attrs.contains(Attr::BOLD));

        {
            let fork = ctx.with_position(4, 1);
            assert_eq!(fork.position(), (4, 1));
        }
        assert_eq!(ctx.position(), (0, 0));
    }

    #[test]
    fn test_with_chaining() {
        let mut buf = Buffer::new(10, 2);
        let mut ctx = Context::new(&mut buf);
        ctx.with_bold(true)
            .with_italic(true)
            .with_foreground(Some(Rgba::GREEN))
            .draw_str("ok", 0, 0);
        assert_eq!(ctx.style(), Style::default());
        drop(ctx);

        let cell = buf.get(0, 0).unwrap();
        assert!(cell.style.attrs.contains(Attr::BOLD | Attr::ITALIC));
        assert_eq!(cell.style.fg, Some(Rgba::GREEN));
    }

    #[test]
    fn test_draw_str_does_not_move_cursor() {
        let mut buf = Buffer::new(10, 2);
        let mut ctx = Context::new(&mut buf);
        ctx.draw_str("hello", 2, 1);
        assert_eq!(ctx.position(), (0, 0));
        drop(ctx);
        assert_eq!(buf.row_text(1), "  hello   ");
    }

    #[test]
    fn test_write_advances_cursor_across_calls() {
        let mut buf = Buffer::new(5, 3);
        let mut ctx = Context::new(&mut buf);
        write!(ctx, "abc").unwrap();
        assert_eq!(ctx.position(), (3, 0));
        write!(ctx, "de").unwrap();
        // "abcde" fills row 0 exactly; the cursor pre-wraps to row 1.
        assert_eq!(ctx.position(), (0, 1));
        writeln!(ctx, "f").unwrap();
        assert_eq!(ctx.position(), (0, 2));
        drop(ctx);
        assert_eq!(buf.row_text(0), "abcde");
        assert_eq!(buf.row_text(1), "f    ");
    }

    #[test]
    fn test_write_formats() {
        let mut buf = Buffer::new(10, 1);
        let mut ctx = Context::new(&mut buf);
        write!(ctx, "{}+{}={}", 1, 2, 3).unwrap();
        drop(ctx);
        assert_eq!(buf.row_text(0), "1+2=3     ");
    }

    #[test]
    fn test_write_bytes_lossy() {
        let mut buf = Buffer::new(10, 1);
        let mut ctx = Context::new(&mut buf);
        ctx.write_bytes(b"ok\xffgo");
        assert_eq!(ctx.position(), (5, 0));
        drop(ctx);
        assert_eq!(buf.row_text(0), "ok\u{FFFD}go     ");
    }

    #[test]
    fn test_styled_write_at_cursor() {
        let mut buf = Buffer::new(10, 1);
        let mut ctx = Context::new(&mut buf);
        ctx.set_bold(true);
        ctx.set_url("https://example.com", &[]);
        write!(ctx, "x").unwrap();
        drop(ctx);
        let cell = buf.get(0, 0).unwrap();
        assert!(cell.style.attrs.contains(Attr::BOLD));
        assert_eq!(cell.link.url, "https://example.com");
    }
}
