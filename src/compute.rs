//! Gameplay logic: fruit spawning and the per-tick session update.
//!
//! Nothing here touches the display or the clock directly. Time arrives as a
//! `now` argument and all randomness comes through an injected `Rng`, so
//! tests can replay a session tick by tick.

use std::io;

use rand::Rng;

use crate::config::{
    SpawnArea, POINTER_SCALE, RAND_MAX, SCREEN_SIZE_X, SCREEN_SIZE_Y, SPAWN_INTERVAL,
    SPAWN_PRIME, TIMER_POS,
};
use crate::entities::{EndReason, Fruit, FruitKind, SessionStatus, Sprite, Vector2};
use crate::platform::{Lcd, LcdColor};

// ── Random source ─────────────────────────────────────────────────────────────

/// One draw from the simulator-style integer source, uniform in `0..=RAND_MAX`.
pub fn rand_int(rng: &mut impl Rng) -> u32 {
    rng.gen_range(0..=RAND_MAX)
}

/// Build a fruit with a random kind, speed and spawn point.
///
/// Speed is one of ten steps `1.0, 1.1, .. 1.9`.
pub fn make_random_fruit(rng: &mut impl Rng, area: SpawnArea) -> Fruit {
    let kind = FruitKind::ALL[(rand_int(rng) % 4) as usize];

    let (x, y) = (rand_int(rng), rand_int(rng));
    let spawn = match area {
        SpawnArea::Raw => Vector2::new(x as f32, y as f32),
        SpawnArea::Screen => Vector2::new(
            (x % SCREEN_SIZE_X as u32) as f32,
            (y % SCREEN_SIZE_Y as u32) as f32,
        ),
    };

    let speed = 1.0 + (rand_int(rng) % 10) as f32 / 10.0;

    Fruit::new(kind, speed, spawn)
}

// ── Session ───────────────────────────────────────────────────────────────────

/// State of one gameplay session. The fruit vector is the only owner of the
/// active fruit; dropping the session releases all of them at once.
#[derive(Clone, Debug)]
pub struct Session {
    pub character: Sprite,
    pub fruits: Vec<Fruit>,
    /// Accumulated survival time in seconds.
    pub elapsed: f32,
    pub last_tick: f64,
    pub last_spawn: f64,
    pub spawn_area: SpawnArea,
    pub status: SessionStatus,
}

pub fn init_session(now: f64, spawn_area: SpawnArea) -> Session {
    let mut character = Sprite::new("pointer", Vector2::new(8.0, 8.0));
    character.anchor_point(Vector2::new(0.5, 0.5));
    character.scale(POINTER_SCALE);

    Session {
        character,
        fruits: Vec::new(),
        elapsed: 0.0,
        last_tick: now,
        last_spawn: now - SPAWN_PRIME,
        spawn_area,
        status: SessionStatus::Running,
    }
}

/// Advance the session to `now`.
///
/// `touch` is the current touch point; `None` means the finger was lifted,
/// which ends the session without advancing anything. A collision detected
/// during this tick still lets the tick finish (spawn, timer) so the caller
/// can render it before leaving the loop.
pub fn tick(
    session: &mut Session,
    touch: Option<Vector2>,
    now: f64,
    rng: &mut impl Rng,
) -> SessionStatus {
    if session.status != SessionStatus::Running {
        return session.status;
    }

    let Some(touch) = touch else {
        session.status = SessionStatus::Ended(EndReason::Released);
        return session.status;
    };

    session.character.move_to(touch);

    // A clock that steps backwards must not shrink the survival time.
    let dt = (now - session.last_tick).max(0.0) as f32;
    let mut hit = false;
    for fruit in &mut session.fruits {
        fruit.step_path(dt);
        if fruit.sprite().is_point_within(touch) {
            hit = true;
        }
    }
    session.last_tick = now;

    if now - session.last_spawn > SPAWN_INTERVAL {
        let fruit = make_random_fruit(rng, session.spawn_area);
        log::debug!(
            "spawned {:?} at ({}, {}) speed {}",
            fruit.kind,
            fruit.position.x,
            fruit.position.y,
            fruit.speed
        );
        session.fruits.push(fruit);
        session.last_spawn = now;
    }

    session.elapsed += dt;

    if hit {
        session.status = SessionStatus::Ended(EndReason::Collision);
    }
    session.status
}

/// Format a time for the HUD and the end screens.
pub fn format_time(secs: f32) -> String {
    format!("{:.2}", secs)
}

/// Draw one gameplay frame: pointer, all fruit, running timer.
pub fn render_session<L: Lcd + ?Sized>(lcd: &mut L, session: &Session) -> io::Result<()> {
    lcd.set_background_color(LcdColor::Black);
    lcd.clear()?;

    session.character.draw(lcd)?;
    for fruit in &session.fruits {
        fruit.sprite().draw(lcd)?;
    }

    lcd.set_font_color(LcdColor::White);
    lcd.write_at(&format_time(session.elapsed), TIMER_POS.0, TIMER_POS.1)?;

    lcd.update()
}
