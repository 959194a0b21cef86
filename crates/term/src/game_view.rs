//! GameView: maps a core [`Frame`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, left to right: the bordered grid (each cell two columns wide),
//! then a side panel with the counters, the best score, a preview of the
//! next piece and the key help. Pause and game-over messages are drawn on
//! top of the grid.

use crate::core::{Frame, Piece};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::Phase;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Columns reserved right of the grid for the side panel
const PANEL_WIDTH: u16 = 16;

const HELP: [&str; 6] = [
    "←→  move",
    "↑   rotate",
    "↓   drop",
    "SPC pause",
    "R   restart",
    "Q   quit",
];

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

/// Where the bordered grid sits in the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
}

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        frame: &Frame<'_>,
        best: Option<u32>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let grid = frame.grid;
        let board_w = (grid.width() as u16).saturating_mul(self.cell_w);
        let board_h = (grid.height() as u16).saturating_mul(self.cell_h);
        let frame_w = board_w.saturating_add(2);
        let frame_h = board_h.saturating_add(2);
        let layout = Layout {
            start_x: viewport
                .width
                .saturating_sub(frame_w.saturating_add(PANEL_WIDTH))
                / 2,
            start_y: viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
        };

        let bg = CellStyle::plain(Rgb::new(80, 80, 90), BOARD_BG);
        fb.fill_rect(layout.start_x + 1, layout.start_y + 1, board_w, board_h, ' ', bg);
        self.draw_border(fb, layout, CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG));

        // Locked cells.
        for y in 0..grid.height() {
            for (x, cell) in grid.row(y).iter().enumerate() {
                let (cx, cy) = (x as u16, y as u16);
                match cell {
                    Some(color) => self.draw_block(fb, layout, cx, cy, Rgb::from(*color)),
                    None => self.draw_empty_cell(fb, layout, cx, cy),
                }
            }
        }

        // Falling piece; rows above the grid are not drawn.
        if frame.phase != Phase::GameOver {
            let fg = Rgb::from(frame.current.color);
            for (x, y) in frame.current.cells() {
                if x >= 0 && y >= 0 && (x as usize) < grid.width() && (y as usize) < grid.height()
                {
                    self.draw_block(fb, layout, x as u16, y as u16, fg);
                }
            }
        }

        self.draw_side_panel(fb, frame, best, viewport, layout);

        match frame.phase {
            Phase::Paused => self.draw_overlay(fb, layout, &["PAUSED", "", "SPACE to resume"]),
            Phase::GameOver => {
                let score = format!("Score  {}", frame.score);
                let lines = format!("Lines  {}", frame.lines);
                let level = format!("Level  {}", frame.level);
                let time = format!("Time   {}", frame.play_time_label());
                self.draw_overlay(
                    fb,
                    layout,
                    &["GAME OVER", "", &score, &lines, &level, &time, "", "R to restart"],
                );
            }
            Phase::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, frame: &Frame<'_>, best: Option<u32>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, best, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: Layout, style: CellStyle) {
        let Layout {
            start_x: x,
            start_y: y,
            frame_w: w,
            frame_h: h,
        } = layout;
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, layout: Layout, x: u16, y: u16) {
        let style = CellStyle {
            dim: true,
            ..CellStyle::plain(Rgb::new(90, 90, 100), BOARD_BG)
        };
        self.fill_cell_rect(fb, layout, x, y, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, layout: Layout, x: u16, y: u16, fg: Rgb) {
        let style = CellStyle {
            bold: true,
            ..CellStyle::plain(fg, BOARD_BG)
        };
        self.fill_cell_rect(fb, layout, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        layout: Layout,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = layout.start_x + 1 + cell_x * self.cell_w;
        let py = layout.start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        frame: &Frame<'_>,
        best: Option<u32>,
        viewport: Viewport,
        layout: Layout,
    ) {
        let panel_x = layout
            .start_x
            .saturating_add(layout.frame_w)
            .saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = layout.start_y;
        for (name, v) in [
            ("SCORE", Some(frame.score)),
            ("LEVEL", Some(frame.level)),
            ("LINES", Some(frame.lines)),
            ("BEST", best),
        ] {
            fb.put_str(panel_x, y, name, label);
            y = y.saturating_add(1);
            match v {
                Some(v) => fb.put_u32(panel_x, y, v, value),
                None => fb.put_str(panel_x, y, "-", value),
            }
            y = y.saturating_add(2);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        self.draw_preview(fb, frame.next, panel_x, y);
        y = y.saturating_add(frame.next.shape.height() as u16 + 1);

        let help = CellStyle {
            dim: true,
            ..value
        };
        for line in HELP {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, piece: &Piece, x: u16, y: u16) {
        let style = CellStyle {
            bold: true,
            ..CellStyle::plain(Rgb::from(piece.color), PANEL_BG)
        };
        for (dx, dy) in piece.shape.cells() {
            let px = x + dx as u16 * self.cell_w;
            let py = y + dy as u16 * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, layout: Layout, lines: &[&str]) {
        let style = CellStyle {
            bold: true,
            ..CellStyle::plain(Rgb::new(255, 255, 255), PANEL_BG)
        };
        let top = layout
            .start_y
            .saturating_add(layout.frame_h / 2)
            .saturating_sub(lines.len() as u16 / 2);
        for (i, text) in lines.iter().enumerate() {
            if text.is_empty() {
                continue;
            }
            let text_w = text.chars().count() as u16;
            let x = layout
                .start_x
                .saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
            fb.put_str(x, top.saturating_add(i as u16), text, style);
        }
    }
}
