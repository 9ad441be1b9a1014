use crossterm::event::{
    self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{cursor, ExecutableCommand};
use flapper::core::constants::{CONFIG_FILE, INPUT_POLL_MS, KEY_REPEAT_WINDOW_MS};
use flapper::high_score::persist_high_score;
use flapper::input::{handle_key, InputResult, RepeatFilter};
use flapper::ui::draw_ui;
use flapper::utils::build_info::version_string;
use flapper::utils::persistence::data_path;
use flapper::{
    load_config, FrameDriver, GameConfig, GameState, HighScoreStore, InputBuffer,
    JsonHighScoreStore, MemoryHighScoreStore,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

type Term = Terminal<CrosstermBackend<Stdout>>;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let mut reset_high_score = false;

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("{}", version_string());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Flapper - terminal arcade game\n");
                println!("Usage: flapper [option]\n");
                println!("Options:");
                println!("  --reset-high-score  Clear the saved best score, then play");
                println!("  --version           Show version information");
                println!("  --help              Show this help message\n");
                println!("Keys: Space/Up flap, Enter start, Q/Esc quit");
                println!("Config: ~/.flapper/{} (optional)", CONFIG_FILE);
                std::process::exit(0);
            }
            "--reset-high-score" => reset_high_score = true,
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'flapper --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Logging is best-effort; a read-only home just means no log file
    if let Ok(path) = flapper::logging::init() {
        log::info!("{} starting, logging to {}", version_string(), path.display());
    }

    // Configuration errors refuse to start
    let config = match data_path(CONFIG_FILE) {
        Ok(path) => match load_config(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("invalid config {}: {}", path.display(), e);
                eprintln!("Invalid config {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        Err(_) => GameConfig::default(),
    };
    log::debug!("config: {:?}", config);

    let store: Box<dyn HighScoreStore> = match JsonHighScoreStore::new() {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("high score will not persist: {}", e);
            Box::new(MemoryHighScoreStore::default())
        }
    };
    if reset_high_score {
        match store.save(0) {
            Ok(()) => log::info!("high score reset"),
            Err(e) => log::warn!("could not reset high score: {}", e),
        }
    }

    let high_score = store.load();
    let state = match GameState::new(config, high_score) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Invalid config: {}", e);
            std::process::exit(1);
        }
    };
    log::info!("loaded high score {}", high_score);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(cursor::Hide)?;
    // Lets key repeats be told apart from presses where the terminal supports it
    let enhanced = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Without enhancement, auto-repeat arrives as ordinary presses
    let repeats =
        (!enhanced).then(|| RepeatFilter::new(Duration::from_millis(KEY_REPEAT_WINDOW_MS)));
    let result = run(&mut terminal, state, store.as_ref(), repeats);

    // Cleanup terminal
    restore_terminal(&mut terminal, enhanced)?;

    match result {
        Ok(final_state) => {
            println!("Best score: {}", final_state.high_score);
            log::info!("exiting, best score {}", final_state.high_score);
            Ok(())
        }
        Err(e) => {
            log::error!("terminal error: {}", e);
            Err(e)
        }
    }
}

/// Undo every terminal mode change, even if an earlier step fails.
/// Returns the first error.
fn restore_terminal(terminal: &mut Term, enhanced: bool) -> io::Result<()> {
    let pop = if enhanced {
        terminal
            .backend_mut()
            .execute(PopKeyboardEnhancementFlags)
            .map(|_| ())
    } else {
        Ok(())
    };
    let show = terminal.backend_mut().execute(cursor::Show).map(|_| ());
    let raw = disable_raw_mode();
    let leave = terminal.backend_mut().execute(LeaveAlternateScreen).map(|_| ());

    first_error([pop, show, raw, leave])
}

/// Log every failed step and keep the first error.
fn first_error<const N: usize>(steps: [io::Result<()>; N]) -> io::Result<()> {
    let mut first = Ok(());
    for step in steps {
        if let Err(e) = step {
            log::warn!("terminal restore failed: {}", e);
            if first.is_ok() {
                first = Err(e);
            }
        }
    }
    first
}

/// Main loop: draw, collect input, advance the simulation by elapsed time.
fn run(
    terminal: &mut Term,
    mut state: GameState,
    store: &dyn HighScoreStore,
    mut repeats: Option<RepeatFilter>,
) -> io::Result<GameState> {
    let mut driver = FrameDriver::default();
    let mut input = InputBuffer::new();
    let mut rng = rand::thread_rng();
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| draw_ui(frame, &state))?;

        // Collect every event that arrived since the last frame
        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            loop {
                if let Event::Key(key) = event::read()? {
                    let fresh = repeats
                        .as_mut()
                        .map_or(true, |filter| filter.accept(&key, Instant::now()));
                    if fresh && handle_key(key, &mut input) == InputResult::Quit {
                        return Ok(state);
                    }
                }
                if !event::poll(Duration::from_millis(0))? {
                    break;
                }
            }
        }

        // Carry the sub-millisecond remainder into the next frame
        let dt_ms = last_frame.elapsed().as_millis() as u64;
        last_frame += Duration::from_millis(dt_ms);

        let (next, report) = driver.run_frame(state, &mut input, dt_ms, &mut rng);
        state = next;

        if report.run_started {
            log::info!("run started (best {})", state.high_score);
        }
        if let Some(cause) = report.collision {
            log::info!(
                "run ended after {} ticks: {}, score {}",
                state.tick_count,
                cause.describe(),
                state.score
            );
        }
        if let Some(score) = report.new_high_score {
            persist_high_score(store, score);
        }
    }
}
