//! TerminalRenderer: flushes the color buffer to a real terminal.
//!
//! Frames are drawn in place by homing the cursor. There is no alternate
//! screen and no clear, so scroll-back above the grid is left alone.

use std::fmt;
use std::io::{self, Write};

use anyhow::Result;

use crossterm::{cursor, style::Print, terminal, Command, QueueableCommand};

use crate::compose::compose_into;
use crate::core::FrameBuffers;

/// Line break for a terminal in raw mode, where `\n` does not return the carriage.
pub const RAW_LINE_BREAK: &str = "\r\n";

/// Line break for cooked mode and plain output streams.
pub const COOKED_LINE_BREAK: &str = "\n";

/// How [`TerminalRenderer::enter`] left the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalMode {
    /// Raw mode, cursor hidden; Ctrl+C arrives as a key event.
    Raw,
    /// No controlling terminal; Ctrl+C arrives as a signal.
    Cooked,
}

/// Move the cursor to the top-left cell (`ESC[H`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorHome;

impl Command for CursorHome {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b[H")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        cursor::MoveTo(0, 0).execute_winapi()
    }
}

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    line_break: &'static str,
    buf: Vec<u8>,
    text: String,
    raw: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::with_writer(io::stdout(), RAW_LINE_BREAK)
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Render into any writer, breaking lines with `line_break`.
    pub fn with_writer(out: W, line_break: &'static str) -> Self {
        Self {
            out,
            line_break,
            buf: Vec::with_capacity(16 * 1024),
            text: String::with_capacity(16 * 1024),
            raw: false,
        }
    }

    /// Enable raw mode and hide the cursor.
    ///
    /// Without a controlling terminal raw mode is unavailable; frames are then
    /// written in cooked mode with `\n` line breaks and the cursor untouched.
    pub fn enter(&mut self) -> Result<TerminalMode> {
        self.enter_with(terminal::enable_raw_mode)
    }

    /// [`TerminalRenderer::enter`] with `enable_raw` switching the terminal.
    pub fn enter_with(
        &mut self,
        enable_raw: impl FnOnce() -> io::Result<()>,
    ) -> Result<TerminalMode> {
        if enable_raw().is_err() {
            self.line_break = COOKED_LINE_BREAK;
            return Ok(TerminalMode::Cooked);
        }
        self.raw = true;
        self.line_break = RAW_LINE_BREAK;
        self.buf.clear();
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()?;
        Ok(TerminalMode::Raw)
    }

    /// Show the cursor and leave raw mode, if [`TerminalRenderer::enter`] set them.
    pub fn exit(&mut self) -> Result<()> {
        self.exit_with(terminal::disable_raw_mode)
    }

    /// [`TerminalRenderer::exit`] with `disable_raw` restoring the terminal.
    pub fn exit_with(&mut self, disable_raw: impl FnOnce() -> io::Result<()>) -> Result<()> {
        if !self.raw {
            return Ok(());
        }
        self.raw = false;
        self.buf.clear();
        self.buf.queue(cursor::Show)?;
        let shown = self.flush_buf();
        disable_raw()?;
        shown
    }

    /// Home the cursor and write the grid for `fb`.
    pub fn draw(&mut self, fb: &FrameBuffers) -> Result<()> {
        self.buf.clear();
        encode_frame_into(fb, self.line_break, &mut self.text, &mut self.buf)?;
        self.flush_buf()
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode one frame into `out`: cursor home, then the composed grid.
///
/// `text` is scratch space reused across frames.
pub fn encode_frame_into(
    fb: &FrameBuffers,
    line_break: &str,
    text: &mut String,
    out: &mut Vec<u8>,
) -> Result<()> {
    text.clear();
    compose_into(fb.color(), fb.width() as usize, line_break, text);
    out.queue(CursorHome)?;
    out.queue(Print(text.as_str()))?;
    Ok(())
}
