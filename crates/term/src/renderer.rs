//! TerminalRenderer: flushes a game snapshot to a real terminal.
//!
//! Every frame is a full redraw encoded into a reusable byte buffer, then written in one go.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::{CellView, GameSnapshot};
use crate::types::{Coord, Rgb};

const BORDER: Rgb = Rgb::new(200, 200, 200);
const FROZEN: Rgb = Rgb::new(150, 150, 160);
const EMPTY: Rgb = Rgb::new(90, 90, 100);
const TEXT: Rgb = Rgb::new(220, 220, 220);

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw one frame. `status` is an optional line shown under the side panel.
    pub fn draw(&mut self, snap: &GameSnapshot, status: Option<&str>) -> Result<()> {
        self.buf.clear();
        encode_frame_into(snap, status, &mut self.buf)?;
        self.flush_buf()
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
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_frame_into(snap: &GameSnapshot, status: Option<&str>, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let inner_w = usize::try_from(snap.width.max(0))? * 2;
    let horizontal = "─".repeat(inner_w);

    set_fg(out, BORDER)?;
    out.queue(Print(format!("┌{horizontal}┐")))?;

    for y in 0..snap.height {
        out.queue(cursor::MoveTo(0, u16::try_from(y + 1)?))?;
        set_fg(out, BORDER)?;
        out.queue(Print('│'))?;
        for x in 0..snap.width {
            match snap.cell_at(Coord::new(x, y)) {
                Some(CellView::Active(kind)) => {
                    set_fg(out, kind.color())?;
                    out.queue(Print("██"))?;
                }
                Some(CellView::Frozen) => {
                    set_fg(out, FROZEN)?;
                    out.queue(Print("▓▓"))?;
                }
                None => {
                    set_fg(out, EMPTY)?;
                    out.queue(Print(" ·"))?;
                }
            }
        }
        set_fg(out, BORDER)?;
        out.queue(Print('│'))?;
    }

    out.queue(cursor::MoveTo(0, u16::try_from(snap.height + 1)?))?;
    out.queue(Print(format!("└{horizontal}┘")))?;

    // Side panel
    let panel_x = u16::try_from(inner_w + 4)?;
    let next = snap.next.map(|k| k.as_str()).unwrap_or("-");
    let lines = [
        "SCORE".to_string(),
        snap.score.to_string(),
        String::new(),
        "ROWS".to_string(),
        snap.rows_cleared.to_string(),
        String::new(),
        "NEXT".to_string(),
        next.to_uppercase(),
        String::new(),
        status.unwrap_or_default().to_string(),
    ];
    set_fg(out, TEXT)?;
    for (row, text) in lines.iter().enumerate() {
        out.queue(cursor::MoveTo(panel_x, u16::try_from(row + 1)?))?;
        out.queue(Print(text))?;
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn set_fg(out: &mut Vec<u8>, rgb: Rgb) -> Result<()> {
    out.queue(SetForegroundColor(Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }))?;
    Ok(())
}
