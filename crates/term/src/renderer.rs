//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a resize or `invalidate`) is a full
//! redraw; later frames repaint only the cells that changed. Commands are
//! queued into a byte buffer and written with a single flush per frame.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Frame currently on screen.
    shown: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor, no line wrap.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf
            .queue(terminal::EnterAlternateScreen)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?;
        self.shown = None;
        self.flush_buf()
    }

    /// Undo everything `enter` changed.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. after a resize event).
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Draw `fb` and keep it as the frame on screen.
    ///
    /// `fb` receives the previously shown buffer in exchange, so the caller can
    /// render the next frame into it without allocating. Its contents are
    /// stale and must be fully re-rendered.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let painted = match &self.shown {
            Some(shown) => encode_diff_into(shown, fb, &mut self.buf)?,
            None => encode_full_into(fb, &mut self.buf)?,
        };
        if painted > 0 || self.shown.is_none() {
            self.flush_buf()?;
        }

        let spare = self
            .shown
            .take()
            .unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
        self.shown = Some(std::mem::replace(fb, spare));
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

/// Queue a full-screen redraw of `fb` into `out`. Returns the cells painted.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<usize> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut painter = Painter::new(out);
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            painter.paint(x, y, fb.get(x, y).unwrap_or_default())?;
        }
    }
    painter.finish()
}

/// Queue the cells of `next` that differ from `prev` into `out`.
///
/// Frames of different sizes cannot be diffed and fall back to a full redraw.
/// Returns the cells painted.
pub fn encode_diff_into(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<usize> {
    if prev.width() != next.width() || prev.height() != next.height() {
        return encode_full_into(next, out);
    }
    let width = next.width() as usize;
    if width == 0 {
        return Ok(0);
    }

    let mut painter = Painter::new(out);
    let rows = prev.cells().chunks_exact(width).zip(next.cells().chunks_exact(width));
    for (y, (old, new)) in rows.enumerate() {
        if old == new {
            continue;
        }
        for (x, (a, b)) in old.iter().zip(new).enumerate() {
            if a != b {
                painter.paint(x as u16, y as u16, *b)?;
            }
        }
    }
    painter.finish()
}

/// Queues cells, skipping the cursor move when a cell directly follows the
/// previous one and the style change when the style is unchanged.
struct Painter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
    cursor: Option<(u16, u16)>,
    painted: usize,
}

impl<'a> Painter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self {
            out,
            style: None,
            cursor: None,
            painted: 0,
        }
    }

    fn paint(&mut self, x: u16, y: u16, cell: Cell) -> Result<()> {
        if self.cursor != Some((x, y)) {
            self.out.queue(cursor::MoveTo(x, y))?;
        }
        if self.style != Some(cell.style) {
            queue_style(self.out, cell.style)?;
            self.style = Some(cell.style);
        }
        self.out.queue(Print(cell.ch))?;
        self.cursor = Some((x.saturating_add(1), y));
        self.painted += 1;
        Ok(())
    }

    fn finish(self) -> Result<usize> {
        if self.painted > 0 {
            self.out
                .queue(ResetColor)?
                .queue(SetAttribute(Attribute::Reset))?;
        }
        Ok(self.painted)
    }
}

fn queue_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?
        .queue(SetForegroundColor(color(style.fg)))?
        .queue(SetBackgroundColor(color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
