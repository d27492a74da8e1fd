//! Game constants and the environment-driven runtime configuration.

use std::env;
use std::path::PathBuf;

use crate::entities::Vector2;

// ── Screen ────────────────────────────────────────────────────────────────────

/// Logical LCD size in pixels.
pub const SCREEN_SIZE_X: f32 = 320.0;
pub const SCREEN_SIZE_Y: f32 = 240.0;

pub const SCREEN_CENTER: Vector2 = Vector2::new(SCREEN_SIZE_X / 2.0, SCREEN_SIZE_Y / 2.0);

// ── Gameplay ──────────────────────────────────────────────────────────────────

pub const MENU_SCALE: f32 = 4.0;
pub const POINTER_SCALE: f32 = 2.0;
pub const FRUIT_SCALE: f32 = 2.0;

/// Seconds between fruit spawns.
pub const SPAWN_INTERVAL: f64 = 3.0;

/// How far before session start the spawn timer is primed, so the first tick
/// is already past `SPAWN_INTERVAL`.
pub const SPAWN_PRIME: f64 = 4.0;

/// Fall rate of a speed-1.0 fruit, pixels per second.
pub const FRUIT_BASE_VELOCITY: f32 = 40.0;

/// Upper bound (inclusive) of the simulator's random integer source.
pub const RAND_MAX: u32 = 32767;

/// Sleep between polls in the blocking wait loops.
pub const POLL_INTERVAL: f64 = 1.0 / 60.0;

// ── HUD positions ─────────────────────────────────────────────────────────────

pub const TIMER_POS: (f32, f32) = (240.0, 15.0);
pub const FINAL_TIME_POS: (f32, f32) = (187.0, 166.0);
pub const HIGH_SCORE_POS: (f32, f32) = (200.0, 91.0);
pub const GAME_COUNT_POS: (f32, f32) = (250.0, 130.0);

// ── Runtime configuration ─────────────────────────────────────────────────────

pub const HISTORY_FILE: &str = "playerTimeFile.txt";

const ENV_HISTORY: &str = "FRUIT_DODGE_HISTORY";
const ENV_SPRITES: &str = "FRUIT_DODGE_SPRITES";
const ENV_SPAWN: &str = "FRUIT_DODGE_SPAWN";

/// Where new fruit may appear.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpawnArea {
    /// Raw `(rand_int, rand_int)` coordinates, most of which land off-screen.
    #[default]
    Raw,
    /// Coordinates reduced into the visible screen.
    Screen,
}

impl SpawnArea {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "raw" => Some(SpawnArea::Raw),
            "screen" => Some(SpawnArea::Screen),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub history_path: PathBuf,
    /// Directory holding `.spr` images; `None` draws placeholder boxes.
    pub sprite_dir: Option<PathBuf>,
    pub spawn_area: SpawnArea,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            history_path: PathBuf::from(HISTORY_FILE),
            sprite_dir: None,
            spawn_area: SpawnArea::Raw,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unknown or empty values keep the
    /// default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = GameConfig::default();
        if let Some(path) = lookup(ENV_HISTORY).filter(|s| !s.is_empty()) {
            cfg.history_path = PathBuf::from(path);
        }
        if let Some(dir) = lookup(ENV_SPRITES).filter(|s| !s.is_empty()) {
            cfg.sprite_dir = Some(PathBuf::from(dir));
        }
        if let Some(raw) = lookup(ENV_SPAWN) {
            match SpawnArea::from_str(&raw) {
                Some(area) => cfg.spawn_area = area,
                None => log::warn!("ignoring {}={:?}, expected raw|screen", ENV_SPAWN, raw),
            }
        }
        cfg
    }
}
