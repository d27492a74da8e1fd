//! Game entity types: the vector/sprite helper layer and the fruit hazard.
//!
//! Everything here is plain data plus small, side-effect-free mutators. The
//! only I/O is `Sprite::draw`, which hands the transformed rectangle to the
//! display collaborator.

use std::io;
use std::ops::{Add, Mul, Sub};

use crate::config::{FRUIT_BASE_VELOCITY, FRUIT_SCALE};
use crate::platform::Lcd;

// ── Vector2 ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Vector2 { x, y }
    }

    /// Component-wise product.
    pub fn scaled_by(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x * other.x, self.y * other.y)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Vector2;

    fn mul(self, factor: f32) -> Vector2 {
        Vector2::new(self.x * factor, self.y * factor)
    }
}

// ── Sprite ────────────────────────────────────────────────────────────────────

/// A drawable rectangle backed by an image resource.
///
/// `position` is where the anchor lands on screen; with the default anchor
/// (0, 0) that is the top-left corner, with (0.5, 0.5) it is the centre.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub image_id: String,
    /// Native image size in pixels, before `scale`.
    pub size: Vector2,
    pub position: Vector2,
    pub scale: f32,
    pub anchor: Vector2,
}

impl Sprite {
    pub fn new(image_id: impl Into<String>, size: Vector2) -> Self {
        Sprite {
            image_id: image_id.into(),
            size,
            position: Vector2::ZERO,
            scale: 1.0,
            anchor: Vector2::ZERO,
        }
    }

    /// Multiplies the current scale.
    pub fn scale(&mut self, factor: f32) {
        self.scale *= factor;
    }

    pub fn move_to(&mut self, to: Vector2) {
        self.position = to;
    }

    pub fn anchor_point(&mut self, anchor: Vector2) {
        self.anchor = anchor;
    }

    pub fn scaled_size(&self) -> Vector2 {
        self.size * self.scale
    }

    /// Top-left corner of the drawn rectangle.
    pub fn top_left(&self) -> Vector2 {
        self.position - self.anchor.scaled_by(self.scaled_size())
    }

    /// Hit-test against the drawn rectangle. All four edges are inclusive.
    pub fn is_point_within(&self, p: Vector2) -> bool {
        let min = self.top_left();
        let max = min + self.scaled_size();
        p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
    }

    pub fn draw<L: Lcd + ?Sized>(&self, lcd: &mut L) -> io::Result<()> {
        lcd.draw_image(&self.image_id, self.top_left(), self.scaled_size())
    }
}

// ── Fruit ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FruitKind {
    Lemon,
    Apple,
    Watermelon,
    Tangerine,
}

impl FruitKind {
    /// Spawn table; indexed by `rand_int % 4`.
    pub const ALL: [FruitKind; 4] = [
        FruitKind::Lemon,
        FruitKind::Apple,
        FruitKind::Watermelon,
        FruitKind::Tangerine,
    ];

    pub fn image_id(self) -> &'static str {
        match self {
            FruitKind::Lemon => "fruit/lemon",
            FruitKind::Apple => "fruit/apple",
            FruitKind::Watermelon => "fruit/watermelon",
            FruitKind::Tangerine => "fruit/tangerine",
        }
    }

    /// Native image size in pixels.
    pub fn size(self) -> Vector2 {
        match self {
            FruitKind::Watermelon => Vector2::new(14.0, 12.0),
            _ => Vector2::new(12.0, 12.0),
        }
    }
}

/// Every fruit falls straight down the screen.
pub const FALL_DIRECTION: Vector2 = Vector2::new(0.0, 1.0);

/// A moving hazard. Owns its sprite; the gameplay loop only borrows it.
#[derive(Clone, Debug, PartialEq)]
pub struct Fruit {
    sprite: Sprite,
    pub kind: FruitKind,
    /// Multiplier on `FRUIT_BASE_VELOCITY`, in [1.0, 2.0).
    pub speed: f32,
    pub position: Vector2,
}

impl Fruit {
    pub fn new(kind: FruitKind, speed: f32, spawn: Vector2) -> Self {
        let mut sprite = Sprite::new(kind.image_id(), kind.size());
        sprite.anchor_point(Vector2::new(0.5, 0.5));
        sprite.scale(FRUIT_SCALE);
        sprite.move_to(spawn);
        Fruit {
            sprite,
            kind,
            speed,
            position: spawn,
        }
    }

    /// Advance along the fall path by `dt` seconds and resync the sprite.
    pub fn step_path(&mut self, dt: f32) {
        self.position = self.position + FALL_DIRECTION * (FRUIT_BASE_VELOCITY * self.speed * dt);
        self.sprite.move_to(self.position);
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }
}

// ── Session outcome ───────────────────────────────────────────────────────────

/// Why a gameplay session stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    /// A fruit touched the pointer.
    Collision,
    /// The touch was lifted.
    Released,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    Ended(EndReason),
}
