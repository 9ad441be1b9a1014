// Play area (logical pixels)
pub const PLAY_WIDTH: f64 = 320.0;
pub const PLAY_HEIGHT: f64 = 480.0;

// Bird
pub const BIRD_X: f64 = 50.0;
pub const BIRD_WIDTH: f64 = 34.0;
pub const BIRD_HEIGHT: f64 = 24.0;
pub const GRAVITY: f64 = 0.5;
pub const JUMP_IMPULSE: f64 = -8.0;

// Pipes
pub const PIPE_WIDTH: f64 = 52.0;
pub const SCROLL_SPEED: f64 = 2.0;
pub const SPAWN_INTERVAL_TICKS: u64 = 100;
pub const PIPE_GAP: f64 = 150.0;

// Gap generator, as fractions of play area height
pub const MIN_GAP_FRACTION: f64 = 0.25;
pub const MAX_GAP_FRACTION: f64 = 0.35;
pub const FIRST_CENTER_FRACTION: f64 = 0.40;
pub const CENTER_MIN_FRACTION: f64 = 0.28;
pub const CENTER_MAX_FRACTION: f64 = 0.72;
pub const MAX_MOVEMENT_FRACTION: f64 = 0.20;
pub const CENTER_PULL: f64 = 0.10;
pub const MIN_BARRIER_FRACTION: f64 = 0.10;

// Death animation (cosmetic)
pub const DEATH_SPIN_PER_TICK: f64 = 0.12;
pub const DEATH_MAX_ROTATION: f64 = std::f64::consts::FRAC_PI_2;

// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 16; // ~60 FPS, one tick per rendered frame
pub const MAX_FRAME_DT_MS: u64 = 100;
pub const INPUT_POLL_MS: u64 = 8;
/// Same key again within this window is OS auto-repeat, not a new press.
/// Only used when the terminal cannot report repeat events itself.
pub const KEY_REPEAT_WINDOW_MS: u64 = 100;

// Files under ~/.flapper/
pub const DATA_DIR_NAME: &str = ".flapper";
pub const HIGH_SCORE_FILE: &str = "highscore.json";
pub const CONFIG_FILE: &str = "config.json";
pub const LOG_FILE: &str = "flapper.log";
