//! Terminal backend
//!
//! Renders the play field as a grid of colored cells, one cell per 8x16
//! pixels, and reads keys in raw mode. Key release events are only reported
//! by terminals that support the keyboard enhancement protocol; elsewhere the
//! jump cut simply never fires.

use std::fs;
use std::io::{self, BufWriter, Stdout, Write, stdout};
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    ExecutableCommand, QueueableCommand, cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::{self, Print},
    terminal,
};

use super::image::png_dimensions;
use super::{AssetLoader, Clock, EventSource, Renderer, SystemClock};
use crate::error::{AssetError, SetupError};
use crate::renderer::{Color, colors};
use crate::sim::{InputEvent, Key, Rect};

/// Pixels covered by one terminal cell
const PX_PER_COL: i32 = 8;
const PX_PER_ROW: i32 = 16;

/// Target presentation rate
const FRAME_TIME: Duration = Duration::from_micros(16_667);

/// A sprite as the terminal can show it: a tinted glyph block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalTexture {
    pub width: u32,
    pub height: u32,
    pub glyph: char,
    pub tint: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

impl Cell {
    fn blank(bg: Color) -> Self {
        Self {
            ch: ' ',
            fg: colors::LABEL,
            bg,
        }
    }
}

pub struct TerminalBackend {
    out: BufWriter<Stdout>,
    screen: Rect,
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
    clock: SystemClock,
    last_present: Instant,
    enhanced_keys: bool,
}

impl TerminalBackend {
    /// Switch the terminal into raw mode on the alternate screen
    ///
    /// Fails if the terminal cannot be configured or is smaller than the
    /// play field. Everything is restored on drop.
    pub fn new(screen_size: i32) -> Result<Self, SetupError> {
        let cols = (screen_size / PX_PER_COL) as u16;
        let rows = (screen_size / PX_PER_ROW) as u16;

        let (term_cols, term_rows) =
            terminal::size().map_err(|e| SetupError::init("terminal size", e))?;
        if term_cols < cols || term_rows < rows {
            return Err(SetupError::Init {
                stage: "terminal size",
                message: format!(
                    "need at least {cols}x{rows} cells, terminal is {term_cols}x{term_rows}"
                ),
            });
        }

        terminal::enable_raw_mode().map_err(|e| SetupError::init("raw mode", e))?;

        // From here on Drop undoes whatever got switched on
        let mut backend = Self {
            out: BufWriter::new(stdout()),
            screen: Rect::new(0, 0, screen_size, screen_size),
            cols,
            rows,
            cells: vec![Cell::blank(colors::SKY); cols as usize * rows as usize],
            clock: SystemClock::new(),
            last_present: Instant::now(),
            enhanced_keys: false,
        };
        backend.enter().map_err(|e| SetupError::init("alternate screen", e))?;
        Ok(backend)
    }

    fn enter(&mut self) -> io::Result<()> {
        self.out.execute(terminal::EnterAlternateScreen)?;
        self.out.execute(cursor::Hide)?;
        if terminal::supports_keyboard_enhancement().unwrap_or(false) {
            self.out.execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
            self.enhanced_keys = true;
        } else {
            log::warn!("Terminal does not report key releases, jump height is fixed");
        }
        self.out.execute(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    /// Cells covered by a pixel rect, clipped to the play field
    fn cell_span(&self, rect: Rect) -> Option<(u16, u16, u16, u16)> {
        let clipped = self.screen.clip(&rect)?;
        let col0 = clipped.left() / PX_PER_COL;
        let row0 = clipped.top() / PX_PER_ROW;
        let col1 = (clipped.right() + PX_PER_COL - 1) / PX_PER_COL;
        let row1 = (clipped.bottom() + PX_PER_ROW - 1) / PX_PER_ROW;
        Some((
            col0 as u16,
            row0 as u16,
            (col1 as u16).min(self.cols),
            (row1 as u16).min(self.rows),
        ))
    }

    fn paint(&mut self, rect: Rect, mut f: impl FnMut(&mut Cell)) {
        let Some((col0, row0, col1, row1)) = self.cell_span(rect) else {
            return;
        };
        for row in row0..row1 {
            for col in col0..col1 {
                let index = row as usize * self.cols as usize + col as usize;
                f(&mut self.cells[index]);
            }
        }
    }

    fn map_key(event: KeyEvent) -> InputEvent {
        if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
            return InputEvent::Quit;
        }
        let key = match event.code {
            KeyCode::Up => Key::Up,
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Esc => return InputEvent::Quit,
            _ => Key::Other,
        };
        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => InputEvent::KeyDown(key),
            KeyEventKind::Release => InputEvent::KeyUp(key),
        }
    }
}

impl Drop for TerminalBackend {
    fn drop(&mut self) {
        if self.enhanced_keys {
            let _ = self.out.execute(PopKeyboardEnhancementFlags);
        }
        let _ = self.out.execute(style::ResetColor);
        let _ = self.out.execute(cursor::Show);
        let _ = self.out.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

impl Renderer for TerminalBackend {
    type Texture = TerminalTexture;

    fn clear(&mut self, color: Color) {
        self.cells.fill(Cell::blank(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.paint(rect, |cell| *cell = Cell::blank(color));
    }

    fn draw_textured_rect(&mut self, texture: &TerminalTexture, dest: Rect) {
        self.paint(dest, |cell| {
            cell.ch = texture.glyph;
            cell.fg = texture.tint;
        });
    }

    fn draw_label(&mut self, x: i32, y: i32, text: &str) {
        let row = y / PX_PER_ROW;
        if row < 0 || row >= self.rows as i32 {
            return;
        }
        let start = (x / PX_PER_COL).max(0);
        for (offset, ch) in text.chars().enumerate() {
            let col = start + offset as i32;
            if col >= self.cols as i32 {
                break;
            }
            let index = row as usize * self.cols as usize + col as usize;
            self.cells[index].ch = ch;
            self.cells[index].fg = colors::LABEL;
        }
    }

    fn present(&mut self) -> io::Result<()> {
        let mut fg = None;
        let mut bg = None;
        for row in 0..self.rows {
            self.out.queue(cursor::MoveTo(0, row))?;
            for col in 0..self.cols {
                let cell = self.cells[row as usize * self.cols as usize + col as usize];
                if bg != Some(cell.bg) {
                    self.out.queue(style::SetBackgroundColor(cell.bg.into()))?;
                    bg = Some(cell.bg);
                }
                if fg != Some(cell.fg) {
                    self.out.queue(style::SetForegroundColor(cell.fg.into()))?;
                    fg = Some(cell.fg);
                }
                self.out.queue(Print(cell.ch))?;
            }
        }
        self.out.queue(style::ResetColor)?;
        self.out.flush()?;

        // No vsync in a terminal, pace to the target frame time instead
        let next = self.last_present + FRAME_TIME;
        let now = Instant::now();
        if next > now {
            thread::sleep(next - now);
        }
        self.last_present = Instant::now();
        Ok(())
    }
}

impl AssetLoader for TerminalBackend {
    type Texture = TerminalTexture;

    fn load_texture(&mut self, path: &Path) -> Result<TerminalTexture, SetupError> {
        load_texture_file(path)
    }
}

impl EventSource for TerminalBackend {
    fn poll_event(&mut self) -> Option<InputEvent> {
        loop {
            match event::poll(Duration::ZERO) {
                Ok(true) => {}
                Ok(false) => return None,
                Err(e) => {
                    log::warn!("Input poll failed: {e}");
                    return None;
                }
            }
            match event::read() {
                Ok(Event::Key(key)) => return Some(Self::map_key(key)),
                // Resize, focus, mouse: nothing to do
                Ok(_) => {}
                Err(e) => {
                    log::warn!("Input read failed: {e}");
                    return None;
                }
            }
        }
    }
}

impl Clock for TerminalBackend {
    fn now_millis(&self) -> u64 {
        self.clock.now_millis()
    }
}

impl From<Color> for style::Color {
    fn from(c: Color) -> Self {
        style::Color::Rgb {
            r: c.r,
            g: c.g,
            b: c.b,
        }
    }
}

/// Read and validate a sprite file. Glyph and tint come from the file name.
pub fn load_texture_file(path: &Path) -> Result<TerminalTexture, SetupError> {
    let fail = |reason: AssetError| SetupError::AssetLoad {
        path: path.to_path_buf(),
        reason,
    };
    let bytes = fs::read(path).map_err(|e| fail(AssetError::Unreadable(e.to_string())))?;
    let (width, height) = png_dimensions(&bytes).map_err(fail)?;

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let glyph = stem
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('#');
    let tint = match stem {
        "duck" => colors::DUCK,
        "coin" => colors::COIN,
        "cactus" => colors::CACTUS,
        _ => colors::LABEL,
    };

    log::debug!("Loaded {} ({width}x{height})", path.display());
    Ok(TerminalTexture {
        width,
        height,
        glyph,
        tint,
    })
}
