use chrono::Utc;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use purrfect::build_info;
use purrfect::core::constants::{AUTOSAVE_INTERVAL_SECONDS, TICK_INTERVAL_MS};
use purrfect::core::game_state::GameState;
use purrfect::core::tick::{self, InputAction, TickEvent, TickResult};
use purrfect::input::{self, GameOverlay, ShopCursor};
use purrfect::save_manager::{LoadOutcome, SaveManager};
use purrfect::ui::{self, EventLog};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "purrfect {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Purrfect - Terminal Cat-Petting Idle Game\n");
                println!("Usage: purrfect [command]\n");
                println!("Commands:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'purrfect --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let save_manager = SaveManager::new()?;
    let (mut state, load_outcome) = save_manager.load_with_offline_catch_up(Utc::now().timestamp());

    let mut log = EventLog::new();
    match load_outcome {
        LoadOutcome::Loaded { offline } => {
            log.push_event(&TickEvent::OfflineProgress(offline));
        }
        LoadOutcome::Fresh => {
            log.push("A cat appears. Press SPACE to pet it.".to_string());
        }
        LoadOutcome::Recovered { error } => {
            log.push(format!("Save could not be read ({}); starting over.", error));
        }
    }

    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run_game(&mut terminal, &mut state, &save_manager, &mut log);

    // Restore the terminal before surfacing any error.
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut GameState,
    save_manager: &SaveManager,
    log: &mut EventLog,
) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut cursor = ShopCursor::new();
    let mut overlay = GameOverlay::None;

    let mut last_tick = Instant::now();
    let mut last_autosave = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw_ui(frame, state, &cursor, log, overlay))?;

        let mut result = TickResult::new();

        if event::poll(Duration::from_millis(TICK_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    let outcome = input::handle_key(key, overlay, &mut cursor);
                    overlay = outcome.overlay;
                    if let Some(action) = outcome.action {
                        let now = Utc::now();
                        tick::apply_action(
                            state,
                            action,
                            now.timestamp(),
                            now.timestamp_millis() as f64 / 1000.0,
                            &mut rng,
                            &mut result,
                        );
                        if action == InputAction::Save {
                            log.push("Saved.".to_string());
                        }
                    }
                }
            }
        }

        let dt = last_tick.elapsed().as_secs_f64();
        last_tick = Instant::now();
        tick::game_tick(state, dt, &mut result);

        for event in &result.events {
            log.push_event(event);
        }

        let autosave_due = last_autosave.elapsed().as_secs_f64() >= AUTOSAVE_INTERVAL_SECONDS;
        if result.save_requested || autosave_due {
            state.last_played_at = Utc::now().timestamp();
            if let Err(e) = save_manager.save(state) {
                log.push(format!("Save failed: {}", e));
            }
            last_autosave = Instant::now();
        }

        if result.quit {
            state.last_played_at = Utc::now().timestamp();
            save_manager.save(state)?;
            return Ok(());
        }
    }
}
