//! Terminal LCD: renders the 320×240 logical screen into terminal cells and
//! reads the left mouse button as the touch panel.
//!
//! All terminal I/O lives here. The game only sees the `Lcd` trait.

use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind},
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use fruit_dodge::config::{SCREEN_SIZE_X, SCREEN_SIZE_Y};
use fruit_dodge::entities::Vector2;
use fruit_dodge::platform::{Lcd, LcdColor};
use fruit_dodge::spr::{rgb, SprImage};

/// Minimum time between presented frames (≈60 FPS).
const FRAME: Duration = Duration::from_micros(16_667);

// ── Colour palette ────────────────────────────────────────────────────────────

fn term_color(color: LcdColor) -> Color {
    match color {
        LcdColor::Black => Color::Black,
        LcdColor::White => Color::White,
        LcdColor::Cyan => Color::Cyan,
    }
}

/// Placeholder colour for images that have no `.spr` file.
fn placeholder_color(image_id: &str) -> Color {
    const PALETTE: [Color; 6] = [
        Color::Green,
        Color::Yellow,
        Color::Magenta,
        Color::Cyan,
        Color::Red,
        Color::Blue,
    ];
    let hash = image_id.bytes().fold(0usize, |h, b| h.wrapping_mul(31).wrapping_add(b as usize));
    PALETTE[hash % PALETTE.len()]
}

pub struct TerminalLcd<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
    background: LcdColor,
    font: LcdColor,
    sprite_dir: Option<PathBuf>,
    images: HashMap<String, Option<SprImage>>,
    touch: Option<Vector2>,
    quit: bool,
    last_frame: Instant,
}

impl<W: Write> TerminalLcd<W> {
    pub fn new(out: W, sprite_dir: Option<PathBuf>) -> std::io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(TerminalLcd {
            out,
            cols: cols.max(1),
            rows: rows.max(1),
            background: LcdColor::Black,
            font: LcdColor::White,
            sprite_dir,
            images: HashMap::new(),
            touch: None,
            quit: false,
            last_frame: Instant::now(),
        })
    }

    // ── Coordinate mapping ────────────────────────────────────────────────────

    fn col_of(&self, x: f32) -> i32 {
        (x * self.cols as f32 / SCREEN_SIZE_X).floor() as i32
    }

    fn row_of(&self, y: f32) -> i32 {
        (y * self.rows as f32 / SCREEN_SIZE_Y).floor() as i32
    }

    /// Logical pixel at the centre of a terminal cell.
    fn cell_center(&self, col: u16, row: u16) -> Vector2 {
        Vector2::new(
            (col as f32 + 0.5) * SCREEN_SIZE_X / self.cols as f32,
            (row as f32 + 0.5) * SCREEN_SIZE_Y / self.rows as f32,
        )
    }

    fn image(&mut self, image_id: &str) -> Option<&SprImage> {
        if !self.images.contains_key(image_id) {
            let loaded = self.sprite_dir.as_ref().and_then(|dir| {
                let path = dir.join(format!("{}.spr", image_id));
                match SprImage::load(&path) {
                    Ok(img) => Some(img),
                    Err(e) => {
                        log::warn!("sprite {}: {}", path.display(), e);
                        None
                    }
                }
            });
            self.images.insert(image_id.to_string(), loaded);
        }
        self.images.get(image_id).and_then(Option::as_ref)
    }

    // ── Input ─────────────────────────────────────────────────────────────────

    fn handle_event(&mut self, ev: Event, tapped: &mut Option<Vector2>) {
        match ev {
            Event::Mouse(mouse) => {
                let p = self.cell_center(mouse.column, mouse.row);
                match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        self.touch = Some(p);
                        *tapped = Some(p);
                    }
                    MouseEventKind::Drag(MouseButton::Left) => self.touch = Some(p),
                    MouseEventKind::Up(MouseButton::Left) => self.touch = None,
                    _ => {}
                }
            }
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) => match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.quit = true,
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    self.quit = true
                }
                _ => {}
            },
            Event::Resize(cols, rows) => {
                self.cols = cols.max(1);
                self.rows = rows.max(1);
            }
            _ => {}
        }
    }
}

impl<W: Write> Lcd for TerminalLcd<W> {
    fn clear(&mut self) -> std::io::Result<()> {
        self.out
            .queue(style::SetBackgroundColor(term_color(self.background)))?;
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn set_background_color(&mut self, color: LcdColor) {
        self.background = color;
    }

    fn set_font_color(&mut self, color: LcdColor) {
        self.font = color;
    }

    fn write_at(&mut self, text: &str, x: f32, y: f32) -> std::io::Result<()> {
        let col = self.col_of(x).clamp(0, self.cols as i32 - 1) as u16;
        let row = self.row_of(y).clamp(0, self.rows as i32 - 1) as u16;

        // Dark text goes on a light patch so it stays readable on the
        // terminal's dark background.
        let bg = if self.font == LcdColor::Black {
            Color::Grey
        } else {
            term_color(self.background)
        };
        self.out.queue(cursor::MoveTo(col, row))?;
        self.out.queue(style::SetBackgroundColor(bg))?;
        self.out.queue(style::SetForegroundColor(term_color(self.font)))?;
        self.out.queue(Print(text))?;
        self.out.queue(style::ResetColor)?;
        Ok(())
    }

    fn draw_image(&mut self, image_id: &str, top_left: Vector2, size: Vector2) -> std::io::Result<()> {
        if size.x <= 0.0 || size.y <= 0.0 {
            return Ok(());
        }

        let c0 = self.col_of(top_left.x).max(0);
        let c1 = self.col_of(top_left.x + size.x).min(self.cols as i32 - 1);
        let r0 = self.row_of(top_left.y).max(0);
        let r1 = self.row_of(top_left.y + size.y).min(self.rows as i32 - 1);
        if c0 > c1 || r0 > r1 {
            return Ok(());
        }

        // Sample once per covered cell.
        let mut cells = Vec::new();
        for row in r0..=r1 {
            for col in c0..=c1 {
                let center = self.cell_center(col as u16, row as u16);
                let u = (center.x - top_left.x) / size.x;
                let v = (center.y - top_left.y) / size.y;
                cells.push((col as u16, row as u16, u, v));
            }
        }

        if let Some(img) = self.image(image_id).cloned() {
            for (col, row, u, v) in cells {
                if let Some(value) = img.sample(u, v) {
                    let (r, g, b) = rgb(value);
                    self.out.queue(cursor::MoveTo(col, row))?;
                    self.out.queue(style::SetBackgroundColor(Color::Rgb { r, g, b }))?;
                    self.out.queue(Print(" "))?;
                }
            }
            self.out.queue(style::ResetColor)?;
            return Ok(());
        }

        // No pixel art available: outline the rectangle and label it.
        self.out
            .queue(style::SetForegroundColor(placeholder_color(image_id)))?;
        for (col, row, _, _) in &cells {
            let edge_x = *col as i32 == c0 || *col as i32 == c1;
            let edge_y = *row as i32 == r0 || *row as i32 == r1;
            let glyph = match (edge_x, edge_y) {
                (true, true) => "+",
                (true, false) => "|",
                (false, true) => "-",
                (false, false) => continue,
            };
            self.out.queue(cursor::MoveTo(*col, *row))?;
            self.out.queue(Print(glyph))?;
        }

        let label = image_id.rsplit('/').next().unwrap_or(image_id);
        let inner = (c1 - c0 - 1).max(0) as usize;
        if inner > 0 && r1 > r0 {
            let text: String = label.chars().take(inner).collect();
            let col = c0 + 1 + (inner - text.chars().count()) as i32 / 2;
            self.out.queue(cursor::MoveTo(col as u16, ((r0 + r1) / 2) as u16))?;
            self.out.queue(Print(text))?;
        }
        self.out.queue(style::ResetColor)?;
        Ok(())
    }

    fn update(&mut self) -> std::io::Result<()> {
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        self.out.flush()?;

        let elapsed = self.last_frame.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
        self.last_frame = Instant::now();
        Ok(())
    }

    /// Drain pending terminal events without blocking. A press that was
    /// already released within the same drain still counts as a touch for
    /// this poll, so quick clicks are not lost.
    fn touch(&mut self) -> std::io::Result<Option<Vector2>> {
        let mut tapped = None;
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            self.handle_event(ev, &mut tapped);
        }
        if self.quit {
            return Ok(None);
        }
        Ok(self.touch.or(tapped))
    }

    fn quit_requested(&self) -> bool {
        self.quit
    }
}
