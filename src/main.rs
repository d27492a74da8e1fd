mod display;

use std::io::{stdout, BufWriter, Write};

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use fruit_dodge::config::GameConfig;
use fruit_dodge::history::FileHistory;
use fruit_dodge::platform::SystemClock;
use fruit_dodge::screens::App;

use crate::display::TerminalLcd;

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = GameConfig::from_env();
    log::info!("starting with {:?}", config);

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(EnableMouseCapture)?;
    out.execute(cursor::Hide)?;

    let result = run(&mut out, config);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(out: &mut W, config: GameConfig) -> std::io::Result<()> {
    let lcd = TerminalLcd::new(out, config.sprite_dir.clone())?;
    let history = FileHistory::new(config.history_path.clone());

    let mut app = App::new(
        lcd,
        SystemClock::new(),
        thread_rng(),
        history,
        config.spawn_area,
    );
    app.show_menu()
}
