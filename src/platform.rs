//! Collaborator seams: the display/touch surface and the clock.
//!
//! Game code only talks to these traits, so the terminal backend in the
//! binary and the scripted fakes in the tests are interchangeable.

use std::io;
use std::thread;
use std::time::{Duration, Instant};

use crate::entities::Vector2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LcdColor {
    Black,
    White,
    Cyan,
}

/// The simulator's LCD plus its touch panel. Coordinates are logical pixels
/// on the 320×240 screen.
pub trait Lcd {
    fn clear(&mut self) -> io::Result<()>;

    fn set_background_color(&mut self, color: LcdColor);

    fn set_font_color(&mut self, color: LcdColor);

    fn write_at(&mut self, text: &str, x: f32, y: f32) -> io::Result<()>;

    /// Draw the image `image_id` stretched over the given rectangle.
    fn draw_image(&mut self, image_id: &str, top_left: Vector2, size: Vector2) -> io::Result<()>;

    /// Present everything drawn since the last update.
    fn update(&mut self) -> io::Result<()>;

    /// Current touch point, or `None` when nothing is touching the screen.
    fn touch(&mut self) -> io::Result<Option<Vector2>>;

    /// Set when the user asked to leave the program. Wait loops bail out
    /// early once this is true.
    fn quit_requested(&self) -> bool {
        false
    }
}

/// Monotonic time source.
pub trait Clock {
    /// Seconds since an arbitrary fixed origin.
    fn now(&mut self) -> f64;

    fn sleep(&mut self, secs: f64);
}

/// Wall clock backed by `Instant`.
#[derive(Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        SystemClock {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&mut self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }

    fn sleep(&mut self, secs: f64) {
        if secs > 0.0 {
            thread::sleep(Duration::from_secs_f64(secs));
        }
    }
}
