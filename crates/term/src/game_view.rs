//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Each frame the landed blocks and the falling piece are composed into a
//! [`Playfield`]; the snapshot's board is never modified to do so. Board row 0
//! is the bottom row on screen.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

const BLOCK: char = '█';
const EMPTY: char = '·';

/// Side panel is skipped when narrower than this.
const PANEL_MIN_W: u16 = 12;

const KEY_HELP: [&str; 6] = [
    "←/→  move",
    "↑ ↓  rotate",
    "spc  drop",
    "p    pause",
    "r    restart",
    "q    quit",
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

/// Visible contents of every board cell, indexed `[y][x]`, row 0 at the bottom.
pub type Playfield = [[Option<PieceKind>; WIDTH]; HEIGHT];

/// Union of the landed blocks and the on-board cells of the falling piece.
pub fn compose_playfield(snap: &GameSnapshot) -> Playfield {
    let mut field = [[None; WIDTH]; HEIGHT];
    for (row, values) in field.iter_mut().zip(snap.board.iter()) {
        for (slot, &value) in row.iter_mut().zip(values.iter()) {
            *slot = piece_from_cell(value);
        }
    }

    if let Some(active) = snap.active {
        for (x, y) in active.cells() {
            let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
                continue;
            };
            if let Some(slot) = field.get_mut(y).and_then(|row| row.get_mut(x)) {
                *slot = Some(active.kind);
            }
        }
    }

    field
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Placement of the bordered board inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Column of the left border.
    pub left: u16,
    /// Row of the top border.
    pub top: u16,
    /// Frame size including the border.
    pub frame_w: u16,
    pub frame_h: u16,
    cell_w: u16,
    cell_h: u16,
}

impl BoardLayout {
    /// Top-left terminal position of board cell `(x, y)`.
    pub fn cell_origin(&self, x: u8, y: u8) -> (u16, u16) {
        let screen_row = (BOARD_HEIGHT - 1 - y) as u16;
        (
            self.left + 1 + x as u16 * self.cell_w,
            self.top + 1 + screen_row * self.cell_h,
        )
    }

    /// First column of the side panel.
    pub fn panel_x(&self) -> u16 {
        self.left.saturating_add(self.frame_w).saturating_add(2)
    }

    fn right(&self) -> u16 {
        self.left + self.frame_w - 1
    }

    fn bottom(&self) -> u16 {
        self.top + self.frame_h - 1
    }
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Where the board frame lands in `viewport`: centered horizontally,
    /// vertically per the anchor.
    pub fn layout(&self, viewport: Viewport) -> BoardLayout {
        let frame_w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let frame_h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        let top = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        BoardLayout {
            left: viewport.width.saturating_sub(frame_w) / 2,
            top,
            frame_w,
            frame_h,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
        }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(viewport);
        draw_frame(fb, &layout);

        let field = compose_playfield(snap);
        for (y, row) in field.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                let (ch, style) = cell_glyph(cell, y as u8);
                let (px, py) = layout.cell_origin(x as u8, y as u8);
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
            }
        }

        draw_panel(fb, snap, viewport, &layout);

        let banner = if snap.game_over {
            Some("GAME OVER")
        } else if snap.paused {
            Some("PAUSED")
        } else {
            None
        };
        if let Some(text) = banner {
            draw_banner(fb, &layout, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }
}

fn cell_glyph(cell: Option<PieceKind>, row: u8) -> (char, CellStyle) {
    let bg = empty_background(row);
    match cell {
        Some(kind) => (
            BLOCK,
            CellStyle {
                bold: true,
                ..CellStyle::new(piece_color(kind), bg)
            },
        ),
        None => {
            let dot = Rgb::new(
                bg.r.saturating_add(40),
                bg.g.saturating_add(40),
                bg.b.saturating_add(40),
            );
            (
                EMPTY,
                CellStyle {
                    dim: true,
                    ..CellStyle::new(dot, bg)
                },
            )
        }
    }
}

fn draw_frame(fb: &mut FrameBuffer, layout: &BoardLayout) {
    let style = CellStyle::new(Rgb::new(200, 200, 200), Rgb::default());
    let (left, top, right, bottom) = (layout.left, layout.top, layout.right(), layout.bottom());

    for x in left + 1..right {
        fb.put_char(x, top, '─', style);
        fb.put_char(x, bottom, '─', style);
    }
    for y in top + 1..bottom {
        fb.put_char(left, y, '│', style);
        fb.put_char(right, y, '│', style);
    }
    for (x, y, ch) in [
        (left, top, '┌'),
        (right, top, '┐'),
        (left, bottom, '└'),
        (right, bottom, '┘'),
    ] {
        fb.put_char(x, y, ch, style);
    }
}

fn draw_panel(fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, layout: &BoardLayout) {
    let x = layout.panel_x();
    if viewport.width.saturating_sub(x) < PANEL_MIN_W {
        return;
    }

    let label = CellStyle {
        bold: true,
        ..CellStyle::default()
    };
    let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::default());
    let mut y = layout.top;

    for (name, count) in [("LINES", snap.lines_cleared), ("PIECES", snap.locked_count)] {
        fb.put_str(x, y, name, label);
        fb.put_u32(x, y.saturating_add(1), count, value);
        y = y.saturating_add(3);
    }

    fb.put_str(x, y, "NOW", label);
    let now = snap.active.map_or("-", |active| piece_letter(active.kind));
    fb.put_str(x, y.saturating_add(1), now, value);
    y = y.saturating_add(3);

    let help = CellStyle { dim: true, ..value };
    for (line, row) in KEY_HELP.iter().zip(y..viewport.height) {
        fb.put_str(x, row, line, help);
    }
}

fn draw_banner(fb: &mut FrameBuffer, layout: &BoardLayout, text: &str) {
    let text_w = text.chars().count() as u16;
    let x = layout.left + layout.frame_w.saturating_sub(text_w) / 2;
    let y = layout.top + layout.frame_h / 2;
    let style = CellStyle {
        bold: true,
        ..CellStyle::new(Rgb::new(255, 255, 255), Rgb::default())
    };
    fb.put_str(x, y, text, style);
}

/// Block color for each piece kind.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(230, 40, 40),
        PieceKind::O => Rgb::new(60, 90, 240),
        PieceKind::S => Rgb::new(255, 140, 0),
        PieceKind::Z => Rgb::new(60, 220, 80),
        PieceKind::L => Rgb::new(240, 230, 60),
    }
}

/// Empty-cell background, shading from teal at the bottom row to violet at the top.
pub fn empty_background(row: u8) -> Rgb {
    let t = row as u32;
    let top = (BOARD_HEIGHT - 1) as u32;
    Rgb::new((10 + 70 * t / top) as u8, (80 - 70 * t / top) as u8, 90)
}

fn piece_from_cell(v: u8) -> Option<PieceKind> {
    v.checked_sub(1).and_then(PieceKind::from_index)
}

fn piece_letter(kind: PieceKind) -> &'static str {
    match kind {
        PieceKind::I => "I",
        PieceKind::O => "O",
        PieceKind::S => "S",
        PieceKind::Z => "Z",
        PieceKind::L => "L",
    }
}
