use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four headings.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit step on the grid; y grows downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events consumed by the game state machine.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Confirm,
    MenuPrev,
    MenuNext,
    Yes,
    No,
    Quit,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Translates one terminal key event into a game input.
///
/// Only presses are mapped; key release and repeat events return `None`.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    let input = match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => GameInput::Direction(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S') => GameInput::Direction(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A') => GameInput::Direction(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D') => GameInput::Direction(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => GameInput::Confirm,
        KeyCode::Tab => GameInput::MenuNext,
        KeyCode::BackTab => GameInput::MenuPrev,
        KeyCode::Char('y' | 'Y') => GameInput::Yes,
        KeyCode::Char('n' | 'N') => GameInput::No,
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => GameInput::Quit,
        _ => return None,
    };

    Some(input)
}

/// Waits up to `timeout` for one terminal event and maps it to a game input.
pub fn poll_input(timeout: Duration) -> io::Result<Option<GameInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) => Ok(map_key(key)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    use super::{direction_change_is_valid, map_key, Direction, GameInput};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn opposite_deltas_cancel_out() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.delta();
            let (ox, oy) = direction.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn reversal_is_never_a_valid_change() {
        for direction in Direction::ALL {
            assert!(!direction_change_is_valid(direction, direction.opposite()));
        }

        assert!(direction_change_is_valid(Direction::Up, Direction::Left));
        assert!(direction_change_is_valid(Direction::Up, Direction::Right));
    }

    #[test]
    fn arrows_and_wasd_map_to_directions() {
        assert_eq!(
            map_key(press(KeyCode::Up)),
            Some(GameInput::Direction(Direction::Up))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('a'))),
            Some(GameInput::Direction(Direction::Left))
        );
        assert_eq!(map_key(press(KeyCode::Enter)), Some(GameInput::Confirm));
        assert_eq!(map_key(press(KeyCode::Char('y'))), Some(GameInput::Yes));
        assert_eq!(map_key(press(KeyCode::Char('n'))), Some(GameInput::No));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(GameInput::Quit));
        assert_eq!(map_key(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(GameInput::Quit));
    }

    #[test]
    fn key_release_is_ignored() {
        let key = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(key), None);
    }
}
