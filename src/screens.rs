//! Screen handlers: menu, stats, how-to, credits, gameplay and game over.
//!
//! Each handler builds its sprites, draws, then blocks on touch polling until
//! the user moves on. Handlers call each other directly; the menu is the
//! root and only returns when the display reports a quit request.

use std::io;

use rand::Rng;

use crate::compute::{format_time, init_session, render_session, tick};
use crate::config::{
    SpawnArea, FINAL_TIME_POS, GAME_COUNT_POS, HIGH_SCORE_POS, MENU_SCALE, POLL_INTERVAL,
    SCREEN_CENTER, SCREEN_SIZE_Y,
};
use crate::entities::{EndReason, SessionStatus, Sprite, Vector2};
use crate::history::HistoryStore;
use crate::platform::{Clock, Lcd, LcdColor};

/// Result of one finished gameplay session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionOutcome {
    pub elapsed: f32,
    pub reason: EndReason,
}

/// Which menu button a touch landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Play,
    Stats,
    HowTo,
    Credits,
}

fn menu_sprite(image_id: &str, size: (f32, f32), cell: (f32, f32)) -> Sprite {
    let mut sprite = Sprite::new(image_id, Vector2::new(size.0, size.1));
    sprite.scale(MENU_SCALE);
    sprite.move_to(Vector2::new(cell.0, cell.1) * MENU_SCALE);
    sprite
}

/// Centered full-panel background used by the stats, how-to, credits and
/// game-over screens.
fn panel(image_id: &str, scale: f32) -> Sprite {
    let mut sprite = Sprite::new(image_id, Vector2::new(80.0, 60.0));
    sprite.scale(scale);
    sprite.anchor_point(Vector2::new(0.5, 0.5));
    sprite.move_to(SCREEN_CENTER);
    sprite
}

fn back_button() -> Sprite {
    let mut sprite = Sprite::new("menu/back_button", Vector2::new(16.0, 8.0));
    sprite.anchor_point(Vector2::new(0.0, 1.0));
    sprite.move_to(Vector2::new(8.0, SCREEN_SIZE_Y - 8.0));
    sprite
}

/// Main menu layout.
pub struct Menu {
    pub logo: Sprite,
    pub play: Sprite,
    pub stats: Sprite,
    pub how_to: Sprite,
    pub credits: Sprite,
}

impl Menu {
    pub fn new() -> Self {
        Menu {
            logo: menu_sprite("menu/logo", (41.0, 21.0), (7.0, 4.0)),
            play: menu_sprite("menu/play_button", (46.0, 25.0), (4.0, 30.0)),
            stats: menu_sprite("menu/stats_button", (26.0, 19.0), (52.0, 2.0)),
            how_to: menu_sprite("menu/how_to_button", (27.0, 16.0), (52.0, 22.0)),
            credits: menu_sprite("menu/credits_button", (26.0, 15.0), (52.0, 41.0)),
        }
    }

    /// First button containing `p`, checked in play, stats, how-to, credits
    /// order.
    pub fn hit(&self, p: Vector2) -> Option<MenuChoice> {
        if self.play.is_point_within(p) {
            Some(MenuChoice::Play)
        } else if self.stats.is_point_within(p) {
            Some(MenuChoice::Stats)
        } else if self.how_to.is_point_within(p) {
            Some(MenuChoice::HowTo)
        } else if self.credits.is_point_within(p) {
            Some(MenuChoice::Credits)
        } else {
            None
        }
    }

    fn draw<L: Lcd + ?Sized>(&self, lcd: &mut L) -> io::Result<()> {
        self.logo.draw(lcd)?;
        self.play.draw(lcd)?;
        self.stats.draw(lcd)?;
        self.how_to.draw(lcd)?;
        self.credits.draw(lcd)
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the screens need: display, clock, randomness and history.
pub struct App<L, C, R, H> {
    pub lcd: L,
    pub clock: C,
    pub rng: R,
    pub history: H,
    pub spawn_area: SpawnArea,
}

impl<L: Lcd, C: Clock, R: Rng, H: HistoryStore> App<L, C, R, H> {
    pub fn new(lcd: L, clock: C, rng: R, history: H, spawn_area: SpawnArea) -> Self {
        App {
            lcd,
            clock,
            rng,
            history,
            spawn_area,
        }
    }

    // ── Menu ──────────────────────────────────────────────────────────────────

    /// Run the menu until the display reports a quit request.
    pub fn show_menu(&mut self) -> io::Result<()> {
        let menu = Menu::new();

        while !self.lcd.quit_requested() {
            self.lcd.set_background_color(LcdColor::Black);
            self.lcd.clear()?;
            menu.draw(&mut self.lcd)?;

            if let Some(p) = self.lcd.touch()? {
                match menu.hit(p) {
                    Some(MenuChoice::Play) => {
                        self.do_gameplay_loop()?;
                    }
                    Some(MenuChoice::Stats) => self.show_stats_screen()?,
                    Some(MenuChoice::HowTo) => self.show_how_to_screen()?,
                    Some(MenuChoice::Credits) => self.show_credits()?,
                    None => {}
                }
                self.wait_for_no_touch()?;
            }

            self.lcd.update()?;
        }

        log::info!("quit requested, leaving menu");
        Ok(())
    }

    pub fn show_stats_screen(&mut self) -> io::Result<()> {
        self.lcd.clear()?;
        panel("menu/stats_background", 3.0).draw(&mut self.lcd)?;

        let high_score = self.history.high_score();
        let games = self.history.count();
        self.lcd.set_font_color(LcdColor::Black);
        self.lcd
            .write_at(&format_time(high_score), HIGH_SCORE_POS.0, HIGH_SCORE_POS.1)?;
        self.lcd
            .write_at(&games.to_string(), GAME_COUNT_POS.0, GAME_COUNT_POS.1)?;
        self.lcd.update()?;

        self.wait_for_back_button_press()
    }

    pub fn show_how_to_screen(&mut self) -> io::Result<()> {
        self.lcd.clear()?;
        panel("menu/instruction_background", 3.0).draw(&mut self.lcd)?;
        self.lcd.update()?;

        self.wait_for_back_button_press()
    }

    pub fn show_credits(&mut self) -> io::Result<()> {
        self.lcd.clear()?;
        panel("menu/credits_background", 4.0).draw(&mut self.lcd)?;
        self.lcd.update()?;

        self.wait_for_back_button_press()
    }

    // ── Gameplay ──────────────────────────────────────────────────────────────

    /// Play one session, show the result, record it, and wait for a tap.
    ///
    /// A session cut short by a quit request is not a finished game: it is
    /// neither shown nor recorded.
    pub fn do_gameplay_loop(&mut self) -> io::Result<SessionOutcome> {
        let outcome = self.play_session()?;
        if self.lcd.quit_requested() {
            log::info!("quit during session after {}s, not recorded", outcome.elapsed);
            return Ok(outcome);
        }
        log::info!(
            "session ended by {:?} after {}s",
            outcome.reason,
            outcome.elapsed
        );

        self.show_game_over_screen(outcome.elapsed)?;
        self.history.append(outcome.elapsed);
        self.wait_for_tap()?;

        Ok(outcome)
    }

    /// Tick the session until it ends. The fruit are released when the
    /// session goes out of scope here.
    pub fn play_session(&mut self) -> io::Result<SessionOutcome> {
        let mut session = init_session(self.clock.now(), self.spawn_area);
        log::info!("session started");

        let reason = loop {
            let touch = self.lcd.touch()?;
            let now = self.clock.now();
            match tick(&mut session, touch, now, &mut self.rng) {
                SessionStatus::Running => render_session(&mut self.lcd, &session)?,
                SessionStatus::Ended(EndReason::Collision) => {
                    render_session(&mut self.lcd, &session)?;
                    break EndReason::Collision;
                }
                SessionStatus::Ended(EndReason::Released) => break EndReason::Released,
            }
        };

        Ok(SessionOutcome {
            elapsed: session.elapsed,
            reason,
        })
    }

    pub fn show_game_over_screen(&mut self, final_time: f32) -> io::Result<()> {
        self.lcd.set_background_color(LcdColor::Black);
        self.lcd.clear()?;
        panel("menu/game_over_background", 1.0).draw(&mut self.lcd)?;

        self.lcd.set_font_color(LcdColor::Cyan);
        self.lcd
            .write_at(&format_time(final_time), FINAL_TIME_POS.0, FINAL_TIME_POS.1)?;
        self.lcd.update()
    }

    // ── Waits ─────────────────────────────────────────────────────────────────

    pub fn wait_for_back_button_press(&mut self) -> io::Result<()> {
        let back = back_button();
        back.draw(&mut self.lcd)?;
        self.lcd.update()?;

        while !self.lcd.quit_requested() {
            if let Some(p) = self.lcd.touch()? {
                if back.is_point_within(p) {
                    break;
                }
            }
            self.clock.sleep(POLL_INTERVAL);
        }
        Ok(())
    }

    pub fn wait_for_no_touch(&mut self) -> io::Result<()> {
        while self.lcd.touch()?.is_some() {
            if self.lcd.quit_requested() {
                break;
            }
            self.clock.sleep(POLL_INTERVAL);
        }
        Ok(())
    }

    pub fn wait_for_touch(&mut self) -> io::Result<()> {
        while self.lcd.touch()?.is_none() {
            if self.lcd.quit_requested() {
                break;
            }
            self.clock.sleep(POLL_INTERVAL);
        }
        Ok(())
    }

    /// Release, press, release.
    pub fn wait_for_tap(&mut self) -> io::Result<()> {
        self.wait_for_no_touch()?;
        self.wait_for_touch()?;
        self.wait_for_no_touch()
    }
}
