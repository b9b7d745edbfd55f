use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use super::Canvas;

/// Raw-mode alternate screen. Dropping it puts the terminal back.
pub struct Terminal {
    out: Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(e) = execute!(out, EnterAlternateScreen, Hide, Clear(ClearType::All)) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        log::info!("Terminal: {:?}", terminal::size().ok());
        Ok(Self { out })
    }

    /// Write the whole canvas and flush. Colors are only re-sent on change.
    pub fn present(&mut self, canvas: &Canvas, status: Option<&str>) -> io::Result<()> {
        let mut current = None;
        for y in 0..canvas.height() {
            queue!(self.out, MoveTo(0, y as u16))?;
            for cell in canvas.row(y) {
                if current != Some(cell.color) {
                    queue!(self.out, SetForegroundColor(cell.color))?;
                    current = Some(cell.color);
                }
                queue!(self.out, Print(cell.ch))?;
            }
        }

        queue!(
            self.out,
            MoveTo(0, canvas.height() as u16),
            Clear(ClearType::CurrentLine),
        )?;
        if let Some(line) = status {
            queue!(self.out, SetForegroundColor(Color::DarkGrey), Print(line))?;
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(self.out, ResetColor, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
