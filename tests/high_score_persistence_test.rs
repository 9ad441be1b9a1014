//! Integration test: high score persistence
//!
//! A crash with a better score must survive a restart of the program; a worse
//! score must leave the stored best alone.

use flapper::high_score::persist_high_score;
use flapper::{
    dispatch, step, FrameDriver, GameConfig, GameMode, GameState, HighScoreStore, InputBuffer,
    JsonHighScoreStore, Trigger,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs;
use std::path::PathBuf;

fn temp_store(name: &str) -> JsonHighScoreStore {
    let path: PathBuf = std::env::temp_dir()
        .join(format!("flapper-it-{}", std::process::id()))
        .join(name);
    fs::remove_file(&path).ok();
    JsonHighScoreStore::at(path)
}

/// Start a run with `score` already banked and crash it into the ceiling.
fn crash_with_score(store: &JsonHighScoreStore, score: u32) -> GameState {
    let state = GameState::new(GameConfig::default(), store.load()).unwrap();
    let mut state = dispatch(state, Trigger::Start);
    state.score = score;
    state.bird.y = 0.0;

    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let (state, result) = step(state, &mut rng);
    assert_eq!(state.mode, GameMode::Ended);
    if let Some(best) = result.new_high_score {
        persist_high_score(store, best);
    }
    state
}

#[test]
fn test_better_score_round_trips() {
    let store = temp_store("better.json");
    store.save(4).unwrap();

    let state = crash_with_score(&store, 9);
    assert_eq!(state.high_score, 9);

    // Next program start
    let reloaded = GameState::new(GameConfig::default(), store.load()).unwrap();
    assert_eq!(reloaded.high_score, 9);
    fs::remove_file(store.path()).ok();
}

#[test]
fn test_worse_score_keeps_stored_best() {
    let store = temp_store("worse.json");
    store.save(12).unwrap();

    let state = crash_with_score(&store, 3);
    assert_eq!(state.high_score, 12);
    assert_eq!(store.load(), 12);
    fs::remove_file(store.path()).ok();
}

#[test]
fn test_equal_score_is_not_a_new_best() {
    let store = temp_store("equal.json");
    store.save(6).unwrap();

    let state = GameState::new(GameConfig::default(), store.load()).unwrap();
    let mut state = dispatch(state, Trigger::Start);
    state.score = 6;
    state.bird.y = 0.0;
    let (_, result) = step(state, &mut ChaCha8Rng::seed_from_u64(2));
    assert!(result.new_high_score.is_none());
    fs::remove_file(store.path()).ok();
}

#[test]
fn test_first_run_without_file_starts_at_zero() {
    let store = temp_store("fresh.json");
    let state = GameState::new(GameConfig::default(), store.load()).unwrap();
    assert_eq!(state.high_score, 0);
}

#[test]
fn test_frame_driver_reports_new_best() {
    let store = temp_store("driver.json");
    let state = GameState::new(GameConfig::default(), store.load()).unwrap();
    let mut driver = FrameDriver::new(16);
    let mut input = InputBuffer::new();
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    input.push(Trigger::Start);
    let (mut state, _) = driver.run_frame(state, &mut input, 0, &mut rng);
    state.score = 2;

    let mut best = None;
    for _ in 0..100 {
        let (next, report) = driver.run_frame(state, &mut input, 16, &mut rng);
        state = next;
        if let Some(score) = report.new_high_score {
            persist_high_score(&store, score);
            best = Some(score);
            break;
        }
    }

    assert_eq!(best, Some(2));
    assert_eq!(store.load(), 2);
    fs::remove_file(store.path()).ok();
}
