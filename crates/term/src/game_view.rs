//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Piece};
use crate::fb::{block_color, CellStyle, FrameBuffer, Rgb};
use crate::types::{ColorId, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const GRID_STYLE: CellStyle = CellStyle::fg(Rgb::new(90, 90, 100)).on(WELL_BG).dim();
const GHOST_STYLE: CellStyle = CellStyle::fg(Rgb::new(140, 140, 140)).on(WELL_BG).dim();
const BORDER_STYLE: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const LABEL_STYLE: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
const VALUE_STYLE: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const OVERLAY_STYLE: CellStyle = CellStyle::fg(Rgb::new(255, 255, 255)).bold();

pub const GAME_OVER_TEXT: &str = "GAME OVER";
pub const GAME_OVER_HINT: &str = "R = Retry / Q = Quit";

/// Side panel width in columns, including the gap after the well.
const PANEL_W: u16 = 14;
/// Rows reserved for a piece preview.
const PREVIEW_ROWS: u16 = 4;

/// Where the well's top-left border corner lands on screen.
#[derive(Debug, Clone, Copy)]
struct Layout {
    x: u16,
    y: u16,
    frame_w: u16,
    frame_h: u16,
}

/// Draws the well, the falling piece with its ghost, and the side panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares up a cell with typical terminal glyphs.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Columns and rows needed to show the well plus the side panel.
    pub fn required_size(&self) -> Viewport {
        let frame_w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let frame_h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        Viewport::new(frame_w + PANEL_W, frame_h)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let layout = self.layout(viewport);

        fb.draw_box(layout.x, layout.y, layout.frame_w, layout.frame_h, BORDER_STYLE);

        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                let color = snap.board[y as usize][x as usize];
                if color == EMPTY {
                    self.fill_cell(fb, layout, x as i8, y as i8, '·', GRID_STYLE);
                } else {
                    self.draw_block(fb, layout, x as i8, y as i8, color);
                }
            }
        }

        if !snap.game_over {
            // Ghost first so the active piece wins where they overlap.
            let ghost = Piece {
                y: snap.ghost_y,
                ..snap.active
            };
            for (x, y) in ghost.cells() {
                self.fill_cell(fb, layout, x, y, '░', GHOST_STYLE);
            }
            for (x, y) in snap.active.cells() {
                self.draw_block(fb, layout, x, y, snap.active.color);
            }
        }

        self.draw_side_panel(fb, snap, layout);

        if snap.game_over {
            self.draw_game_over(fb, layout);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let need = self.required_size();
        let frame_w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let frame_h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        Layout {
            x: viewport.width.saturating_sub(need.width) / 2,
            y,
            frame_w,
            frame_h,
        }
    }

    /// Fill one board cell; cells outside the well are skipped.
    fn fill_cell(&self, fb: &mut FrameBuffer, at: Layout, x: i8, y: i8, ch: char, style: CellStyle) {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let px = at.x + 1 + x as u16 * self.cell_w;
        let py = at.y + 1 + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, at: Layout, x: i8, y: i8, color: ColorId) {
        if let Some(style) = block_style(color) {
            self.fill_cell(fb, at, x, y, '█', style);
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, at: Layout) {
        let px = at.x.saturating_add(at.frame_w).saturating_add(2);
        let mut y = at.y;

        fb.put_str(px, y, "SCORE", LABEL_STYLE);
        fb.put_u32(px, y + 1, snap.score, VALUE_STYLE);
        y += 3;

        fb.put_str(px, y, "LINES", LABEL_STYLE);
        fb.put_u32(px, y + 1, snap.lines, VALUE_STYLE);
        y += 3;

        fb.put_str(px, y, "NEXT", LABEL_STYLE);
        draw_preview(fb, px, y + 1, &snap.next, false);
        y += PREVIEW_ROWS + 2;

        fb.put_str(px, y, "HOLD", LABEL_STYLE);
        match snap.held {
            Some(held) => draw_preview(fb, px, y + 1, &held, !snap.can_hold),
            None => {
                fb.put_str(px, y + 1, "-", VALUE_STYLE);
            }
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, at: Layout) {
        let mid = at.y.saturating_add(at.frame_h / 2);
        let inner_x = at.x + 1;
        let inner_w = at.frame_w.saturating_sub(2);
        let banner = CellStyle::default().on(Rgb::new(0, 0, 0));
        fb.fill_rect(inner_x, mid.saturating_sub(1), inner_w, 4, ' ', banner);
        fb.put_str_centered(inner_x, inner_w, mid, GAME_OVER_TEXT, OVERLAY_STYLE);
        fb.put_str_centered(inner_x, inner_w, mid + 1, GAME_OVER_HINT, VALUE_STYLE);
    }
}

fn block_style(color: ColorId) -> Option<CellStyle> {
    block_color(color).map(|fg| CellStyle::fg(fg).on(WELL_BG).bold())
}

/// Draw a piece's shape at its own origin; two columns per cell.
fn draw_preview(fb: &mut FrameBuffer, x: u16, y: u16, piece: &Piece, dimmed: bool) {
    let Some(mut style) = block_style(piece.color) else {
        return;
    };
    style.bg = Rgb::new(0, 0, 0);
    if dimmed {
        style = CellStyle { bold: false, ..style }.dim();
    }
    for (dx, dy) in piece.shape.filled() {
        let cx = x + dx as u16 * 2;
        let cy = y + dy as u16;
        fb.fill_rect(cx, cy, 2, 1, '█', style);
    }
}
