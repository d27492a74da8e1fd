#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;

use fruit_dodge::entities::Vector2;
use fruit_dodge::platform::{Clock, Lcd, LcdColor};

/// Everything the fake display was asked to do, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Clear,
    Write { text: String, x: f32, y: f32, color: LcdColor },
    Image { id: String, top_left: Vector2, size: Vector2 },
    Update,
}

/// Display that replays a scripted touch sequence. Once the script runs out
/// it reports no touch and asks to quit, so every wait loop terminates.
pub struct FakeLcd {
    pub script: VecDeque<Option<Vector2>>,
    pub calls: Vec<Call>,
    font: LcdColor,
}

impl FakeLcd {
    pub fn new(script: Vec<Option<Vector2>>) -> Self {
        FakeLcd {
            script: script.into(),
            calls: Vec::new(),
            font: LcdColor::White,
        }
    }

    pub fn writes(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Write { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn images(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Image { id, .. } => Some(id.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn updates(&self) -> usize {
        self.calls.iter().filter(|c| **c == Call::Update).count()
    }
}

impl Lcd for FakeLcd {
    fn clear(&mut self) -> io::Result<()> {
        self.calls.push(Call::Clear);
        Ok(())
    }

    fn set_background_color(&mut self, _color: LcdColor) {}

    fn set_font_color(&mut self, color: LcdColor) {
        self.font = color;
    }

    fn write_at(&mut self, text: &str, x: f32, y: f32) -> io::Result<()> {
        self.calls.push(Call::Write {
            text: text.to_string(),
            x,
            y,
            color: self.font,
        });
        Ok(())
    }

    fn draw_image(&mut self, image_id: &str, top_left: Vector2, size: Vector2) -> io::Result<()> {
        self.calls.push(Call::Image {
            id: image_id.to_string(),
            top_left,
            size,
        });
        Ok(())
    }

    fn update(&mut self) -> io::Result<()> {
        self.calls.push(Call::Update);
        Ok(())
    }

    fn touch(&mut self) -> io::Result<Option<Vector2>> {
        Ok(self.script.pop_front().flatten())
    }

    fn quit_requested(&self) -> bool {
        self.script.is_empty()
    }
}

/// Clock that advances by a fixed step every time it is read.
pub struct FakeClock {
    pub t: f64,
    pub step: f64,
    pub sleeps: usize,
}

impl FakeClock {
    pub fn stepping(step: f64) -> Self {
        FakeClock {
            t: 0.0,
            step,
            sleeps: 0,
        }
    }
}

impl Clock for FakeClock {
    fn now(&mut self) -> f64 {
        let t = self.t;
        self.t += self.step;
        t
    }

    fn sleep(&mut self, secs: f64) {
        self.sleeps += 1;
        self.t += secs;
    }
}
