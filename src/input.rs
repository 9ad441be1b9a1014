//! Keyboard input for the game screen.
//!
//! Turns crossterm key events into the two game triggers. Only key presses
//! count: repeat and release events are dropped so holding a key flaps once.
//! Terminals without keyboard enhancement report auto-repeat as presses;
//! `RepeatFilter` drops those by timing instead.

use crate::core::game_loop::InputBuffer;
use crate::core::state_machine::Trigger;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};

/// Result of handling a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue the game loop normally.
    Continue,
    /// Leave the game.
    Quit,
}

/// Map one key to a trigger, if it is bound to one.
pub fn key_to_trigger(key: &KeyEvent) -> Option<Trigger> {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(Trigger::Jump)
        }
        KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => Some(Trigger::Start),
        _ => None,
    }
}

/// Handle one key event: queue its trigger, or report a quit.
pub fn handle_key(key: KeyEvent, input: &mut InputBuffer) -> InputResult {
    if key.kind != KeyEventKind::Press {
        return InputResult::Continue;
    }

    let ctrl_c =
        key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl_c || matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')) {
        return InputResult::Quit;
    }

    if let Some(trigger) = key_to_trigger(&key) {
        input.push(trigger);
    }
    InputResult::Continue
}

/// Drops presses of a bound key that arrive within `window` of the previous
/// press of the same key. Every dropped press restarts the window, so a held
/// key stays suppressed for as long as the OS keeps repeating it.
#[derive(Debug, Clone)]
pub struct RepeatFilter {
    window: Duration,
    last: Option<(KeyCode, Instant)>,
}

impl RepeatFilter {
    pub fn new(window: Duration) -> Self {
        Self { window, last: None }
    }

    /// True if `key` should reach `handle_key`.
    pub fn accept(&mut self, key: &KeyEvent, now: Instant) -> bool {
        if key.kind != KeyEventKind::Press || key_to_trigger(key).is_none() {
            return true;
        }
        let repeat = matches!(
            self.last,
            Some((code, at)) if code == key.code && now.saturating_duration_since(at) < self.window
        );
        self.last = Some((key.code, now));
        !repeat
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_jump_keys() {
        for code in [KeyCode::Char(' '), KeyCode::Up, KeyCode::Char('k')] {
            assert_eq!(
                key_to_trigger(&key(code, KeyEventKind::Press)),
                Some(Trigger::Jump)
            );
        }
    }

    #[test]
    fn test_start_keys() {
        for code in [KeyCode::Enter, KeyCode::Char('s')] {
            assert_eq!(
                key_to_trigger(&key(code, KeyEventKind::Press)),
                Some(Trigger::Start)
            );
        }
    }

    #[test]
    fn test_press_is_queued() {
        let mut input = InputBuffer::new();
        let result = handle_key(key(KeyCode::Char(' '), KeyEventKind::Press), &mut input);
        assert_eq!(result, InputResult::Continue);
        assert_eq!(input.drain(), vec![Trigger::Jump]);
    }

    #[test]
    fn test_repeat_and_release_ignored() {
        let mut input = InputBuffer::new();
        handle_key(key(KeyCode::Char(' '), KeyEventKind::Repeat), &mut input);
        handle_key(key(KeyCode::Char(' '), KeyEventKind::Release), &mut input);
        assert!(input.is_empty());
    }

    #[test]
    fn test_quit_keys() {
        let mut input = InputBuffer::new();
        assert_eq!(
            handle_key(key(KeyCode::Esc, KeyEventKind::Press), &mut input),
            InputResult::Quit
        );
        assert_eq!(
            handle_key(key(KeyCode::Char('q'), KeyEventKind::Press), &mut input),
            InputResult::Quit
        );
        let ctrl_c = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_key(ctrl_c, &mut input), InputResult::Quit);
        assert!(input.is_empty());
    }

    #[test]
    fn test_unbound_key_does_nothing() {
        let mut input = InputBuffer::new();
        let result = handle_key(key(KeyCode::Char('x'), KeyEventKind::Press), &mut input);
        assert_eq!(result, InputResult::Continue);
        assert!(input.is_empty());
    }

    #[test]
    fn test_auto_repeat_presses_dropped() {
        let mut filter = RepeatFilter::new(Duration::from_millis(100));
        let space = key(KeyCode::Char(' '), KeyEventKind::Press);
        let t0 = Instant::now();

        assert!(filter.accept(&space, t0));
        // OS repeat stream every 33 ms while held
        for i in 1..10 {
            assert!(!filter.accept(&space, t0 + Duration::from_millis(33 * i)));
        }
        // Released, then pressed again later
        assert!(filter.accept(&space, t0 + Duration::from_millis(33 * 9 + 150)));
    }

    #[test]
    fn test_repeat_filter_passes_distinct_keys() {
        let mut filter = RepeatFilter::new(Duration::from_millis(100));
        let t0 = Instant::now();
        assert!(filter.accept(&key(KeyCode::Char(' '), KeyEventKind::Press), t0));
        assert!(filter.accept(&key(KeyCode::Up, KeyEventKind::Press), t0));
        // Quit keys are never filtered
        assert!(filter.accept(&key(KeyCode::Esc, KeyEventKind::Press), t0));
        assert!(filter.accept(&key(KeyCode::Esc, KeyEventKind::Press), t0));
    }
}
