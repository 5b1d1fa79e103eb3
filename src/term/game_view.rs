//! GameView: maps a game snapshot into a terminal framebuffer.
//!
//! Pure (no I/O) and unit-testable. Draws the two boards of the versus
//! layout side by side using the world geometry from `DuelLayout`: the
//! active piece falls on one board and the settled stack lives on the
//! other, with both boards sharing the single simulation.
//!
//! Grid rows have row 0 at the floor, so rows are flipped when mapped to
//! terminal coordinates.

use crate::core::pieces::get_offsets;
use crate::core::{DuelLayout, GameSnapshot};
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::PieceKind;

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

/// Renders the dual-board game into a framebuffer.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self { cell_w: 2, cell_h: 1 }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        layout: &DuelLayout,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::term::fb::Cell::default());

        let (origin_x, origin_y) = layout.board_origin();
        let left_x = (origin_x * self.cell_w as f32) as u16;
        let right_x = ((origin_x + layout.board_offset()) * self.cell_w as f32) as u16;
        let top_y = (origin_y * self.cell_h as f32) as u16;

        self.draw_board_frame(fb, snap, left_x, top_y);
        self.draw_board_frame(fb, snap, right_x, top_y);

        let (piece_x, stack_x) = if snap.falling_on_left {
            (left_x, right_x)
        } else {
            (right_x, left_x)
        };

        // Settled stack.
        for &((col, row), kind) in &snap.frozen {
            self.draw_grid_cell(fb, snap, stack_x, top_y, col, row, kind_style(kind));
        }

        // Active piece.
        let piece_style = kind_style(snap.piece.kind);
        for (dx, dy) in get_offsets(snap.piece.kind, snap.piece.rotation) {
            self.draw_grid_cell(
                fb,
                snap,
                piece_x,
                top_y,
                snap.piece.col + dx,
                snap.piece.row + dy,
                piece_style,
            );
        }

        // Score line under the right board.
        let frame_h = self.frame_height(snap);
        let score_style = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let score_y = top_y.saturating_add(frame_h);
        fb.put_str(right_x, score_y, &format!("SCORE {}", snap.score), score_style);

        // Overlays.
        if snap.waiting_for_start {
            self.draw_overlay(fb, snap, left_x, top_y, "PRESS SPACE TO START");
        } else if snap.game_over {
            self.draw_overlay(fb, snap, left_x, top_y, "GAME OVER - R TO RESTART");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, layout: &DuelLayout, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, layout, viewport, &mut fb);
        fb
    }

    fn frame_width(&self, snap: &GameSnapshot) -> u16 {
        (snap.width as u16) * self.cell_w + 2
    }

    fn frame_height(&self, snap: &GameSnapshot) -> u16 {
        (snap.height as u16) * self.cell_h + 2
    }

    fn draw_board_frame(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        let w = self.frame_width(snap);
        let h = self.frame_height(snap);
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };
        let well = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: Rgb::new(30, 30, 40),
            bold: false,
        };

        fb.fill_rect(x + 1, y + 1, w - 2, h - 2, '·', well);

        fb.put_char(x, y, '┌', border);
        fb.put_char(x + w - 1, y, '┐', border);
        fb.put_char(x, y + h - 1, '└', border);
        fb.put_char(x + w - 1, y + h - 1, '┘', border);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', border);
            fb.put_char(x + dx, y + h - 1, '─', border);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', border);
            fb.put_char(x + w - 1, y + dy, '│', border);
        }
    }

    /// Draw one grid cell inside a board frame, flipping the row axis.
    /// Cells outside the visible grid (for example a spawning piece poking
    /// above the top row) are clipped.
    fn draw_grid_cell(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        frame_x: u16,
        frame_y: u16,
        col: i8,
        row: i8,
        style: CellStyle,
    ) {
        if col < 0 || col >= snap.width || row < 0 || row >= snap.height {
            return;
        }
        let px = frame_x + 1 + (col as u16) * self.cell_w;
        let py = frame_y + 1 + ((snap.height - 1 - row) as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        frame_x: u16,
        frame_y: u16,
        text: &str,
    ) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bold: true,
            ..CellStyle::default()
        };
        let mid_y = frame_y + self.frame_height(snap) / 2;
        fb.put_str(frame_x + 2, mid_y, text, style);
    }
}

fn kind_style(kind: PieceKind) -> CellStyle {
    // Colors follow the classic per-kind palette.
    let fg = match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    };
    CellStyle {
        fg,
        bg: Rgb::new(30, 30, 40),
        bold: true,
    }
}
