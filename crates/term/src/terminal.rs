//! TerminalRenderer: flushes frames to a real terminal.
//!
//! The first frame (and any frame after a resize) is a full redraw; after
//! that only rows that differ from the previous frame are rewritten.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::frame::{Frame, Style};
use crate::types::Rgb;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<Frame>,
    buf: Vec<u8>,
    enhanced_keyboard: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
            enhanced_keyboard: false,
        }
    }

    /// Enter raw mode and the alternate screen.
    ///
    /// Key-release reporting is requested when the terminal supports the
    /// keyboard enhancement protocol; see [`Self::reports_key_release`].
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;

        self.enhanced_keyboard = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if self.enhanced_keyboard {
            self.buf.queue(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
        }
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        if self.enhanced_keyboard {
            self.buf.queue(PopKeyboardEnhancementFlags)?;
        }
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn reports_key_release(&self) -> bool {
        self.enhanced_keyboard
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a frame, swapping it into internal state.
    ///
    /// Callers keep one `Frame` and pass it in every frame; after the call it
    /// holds the previous frame's buffer, ready to be rendered into again.
    pub fn draw_swap(&mut self, frame: &mut Frame) -> Result<()> {
        self.buf.clear();
        match self.last.take() {
            Some(prev) if prev.width() == frame.width() && prev.height() == frame.height() => {
                encode_diff_into(&prev, frame, &mut self.buf)?;
                self.last = Some(prev);
            }
            prev => {
                encode_full_into(frame, &mut self.buf)?;
                self.last = Some(prev.unwrap_or_else(|| Frame::new(0, 0)));
            }
        }
        self.flush_buf()?;

        if let Some(prev) = self.last.as_mut() {
            std::mem::swap(prev, frame);
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(frame: &Frame, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut current = None;
    for y in 0..frame.height() {
        encode_row(frame, y, &mut current, out)?;
    }
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the rows of `next` that differ from `prev` into `out`.
pub fn encode_diff_into(prev: &Frame, next: &Frame, out: &mut Vec<u8>) -> Result<()> {
    let mut current = None;
    for y in changed_rows(prev, next) {
        encode_row(next, y, &mut current, out)?;
    }
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Rows whose glyphs differ. Every row counts as changed after a resize.
pub fn changed_rows<'a>(prev: &'a Frame, next: &'a Frame) -> impl Iterator<Item = u16> + 'a {
    let resized = prev.width() != next.width() || prev.height() != next.height();
    (0..next.height()).filter(move |&y| resized || prev.row(y) != next.row(y))
}

fn encode_row(frame: &Frame, y: u16, current: &mut Option<Style>, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, y))?;
    for glyph in frame.row(y) {
        if *current != Some(glyph.style) {
            apply_style_into(out, glyph.style)?;
            *current = Some(glyph.style);
        }
        out.queue(Print(glyph.ch))?;
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: Style) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changed_rows_only_reports_differences() {
        let a = Frame::new(4, 3);
        let mut b = Frame::new(4, 3);
        b.put(2, 1, 'X', Style::default());

        assert_eq!(changed_rows(&a, &b).collect::<Vec<_>>(), vec![1]);
        assert_eq!(changed_rows(&b, &b).count(), 0);
    }

    #[test]
    fn test_resize_marks_every_row() {
        let a = Frame::new(4, 3);
        let b = Frame::new(5, 2);
        assert_eq!(changed_rows(&a, &b).collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_diff_of_identical_frames_prints_no_glyphs() {
        let mut a = Frame::new(3, 1);
        a.put_str(0, 0, "abc", Style::default());

        let mut out = Vec::new();
        encode_diff_into(&a, &a, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(!text.contains("abc"));

        out.clear();
        encode_full_into(&a, &mut out).unwrap();
        assert!(String::from_utf8_lossy(&out).contains("abc"));
    }

    #[test]
    fn test_rgb_to_color() {
        assert_eq!(
            rgb_to_color(Rgb::new(1, 2, 3)),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
