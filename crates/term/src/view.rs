//! GameView: maps a `GameSnapshot` into a terminal frame.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::snapshot::{GameSnapshot, PieceSnapshot};
use crate::frame::{Frame, Glyph, Style};
use crate::types::{Rgb, BACKGROUND_COLOR};

const BLOCK: char = '█';
const PANEL_GAP: u16 = 2;
const PANEL_MIN_WIDTH: u16 = 12;

const BORDER: Style = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const LABEL: Style = Style::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: Style = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const BANNER: Style = Style::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the board frame lands in the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell roughly squares up terminal glyphs.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Board frame placement, centered in the viewport (border included)
    pub fn layout(&self, snap: &GameSnapshot, viewport: Viewport) -> Layout {
        let width = (snap.width as u16).saturating_mul(self.cell_w) + 2;
        let height = snap.height as u16 + 2;
        Layout {
            x: viewport.width.saturating_sub(width) / 2,
            y: viewport.height.saturating_sub(height) / 2,
            width,
            height,
        }
    }

    /// Render into an existing frame, reusing its allocation.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, frame: &mut Frame) {
        if frame.width() != viewport.width || frame.height() != viewport.height {
            frame.resize(viewport.width, viewport.height);
        }
        frame.fill(Glyph::default());

        let layout = self.layout(snap, viewport);
        self.draw_border(frame, layout);

        let background = Style::new(BACKGROUND_COLOR, BACKGROUND_COLOR);
        for y in 0..snap.height {
            for x in 0..snap.width {
                match snap.cell(x, y) {
                    Some(color) => self.draw_cell(frame, layout, snap, x as i32, y as i32, color),
                    None => self.fill_cell(frame, layout, snap, x as i32, y as i32, ' ', background),
                }
            }
        }

        if !snap.game_over {
            self.draw_piece(frame, layout, snap, &snap.ghost);
        }
        self.draw_piece(frame, layout, snap, &snap.active);

        self.draw_panel(frame, layout, snap, viewport);

        if snap.game_over {
            let mid = layout.y + layout.height / 2;
            self.draw_centered(frame, layout, mid.saturating_sub(1), "GAME OVER");
            self.draw_centered(frame, layout, mid, "r: restart");
            self.draw_centered(frame, layout, mid + 1, "q: quit");
        }
    }

    /// Convenience helper that allocates a new frame.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> Frame {
        let mut frame = Frame::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut frame);
        frame
    }

    fn draw_border(&self, frame: &mut Frame, layout: Layout) {
        let Layout {
            x,
            y,
            width: w,
            height: h,
        } = layout;

        frame.put(x, y, '┌', BORDER);
        frame.put(x + w - 1, y, '┐', BORDER);
        frame.put(x, y + h - 1, '└', BORDER);
        frame.put(x + w - 1, y + h - 1, '┘', BORDER);
        for dx in 1..w - 1 {
            frame.put(x + dx, y, '─', BORDER);
            frame.put(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            frame.put(x, y + dy, '│', BORDER);
            frame.put(x + w - 1, y + dy, '│', BORDER);
        }
    }

    fn draw_piece(&self, frame: &mut Frame, layout: Layout, snap: &GameSnapshot, piece: &PieceSnapshot) {
        for cell in &piece.cells {
            self.draw_cell(frame, layout, snap, cell.x, cell.y, piece.color);
        }
    }

    fn draw_cell(&self, frame: &mut Frame, layout: Layout, snap: &GameSnapshot, x: i32, y: i32, color: Rgb) {
        let style = Style::new(color, BACKGROUND_COLOR);
        self.fill_cell(frame, layout, snap, x, y, BLOCK, style);
    }

    /// Paint board cell (x, y); y counts up from the bottom row.
    fn fill_cell(
        &self,
        frame: &mut Frame,
        layout: Layout,
        snap: &GameSnapshot,
        x: i32,
        y: i32,
        ch: char,
        style: Style,
    ) {
        if x < 0 || y < 0 || x as usize >= snap.width || y as usize >= snap.height {
            return;
        }
        let screen_row = snap.height as u16 - 1 - y as u16;
        let px = layout.x + 1 + x as u16 * self.cell_w;
        let py = layout.y + 1 + screen_row;
        frame.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_panel(&self, frame: &mut Frame, layout: Layout, snap: &GameSnapshot, viewport: Viewport) {
        let panel_x = layout.x.saturating_add(layout.width).saturating_add(PANEL_GAP);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_WIDTH {
            return;
        }

        let mut y = layout.y;
        let mut field = |frame: &mut Frame, label: &str, value: String| {
            frame.put_str(panel_x, y, label, LABEL);
            frame.put_str(panel_x, y.saturating_add(1), &value, VALUE);
            y = y.saturating_add(3);
        };
        field(frame, "SCORE", snap.score.to_string());
        field(frame, "LINES", snap.lines.to_string());
        field(frame, "SPEED", format!("{}ms", snap.fall_interval.as_millis()));
    }

    fn draw_centered(&self, frame: &mut Frame, layout: Layout, y: u16, text: &str) {
        let text_w = text.chars().count() as u16;
        let x = layout.x + layout.width.saturating_sub(text_w) / 2;
        frame.put_str(x, y, text, BANNER);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Session;

    #[test]
    fn test_layout_is_centered() {
        let snap = Session::with_seed(1).snapshot();
        let layout = GameView::default().layout(&snap, Viewport::new(80, 30));
        assert_eq!(layout.width, 22);
        assert_eq!(layout.height, 22);
        assert_eq!(layout.x, 29);
        assert_eq!(layout.y, 4);
    }

    #[test]
    fn test_border_corners() {
        let snap = Session::with_seed(1).snapshot();
        let frame = GameView::default().render(&snap, Viewport::new(80, 30));
        assert_eq!(frame.get(29, 4).map(|g| g.ch), Some('┌'));
        assert_eq!(frame.get(50, 25).map(|g| g.ch), Some('┘'));
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let snap = Session::with_seed(1).snapshot();
        let frame = GameView::default().render(&snap, Viewport::new(5, 3));
        assert_eq!(frame.width(), 5);
    }
}
