use std::io::{self, Stdout};
use std::panic;
use std::time::Instant;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::{debug, error};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};

use crate::game::GameState;
use crate::renderer;

/// The game screen: a ratatui terminal plus the clock driving blink and
/// rainbow animation.
pub struct GameScreen<B: Backend> {
    terminal: Terminal<B>,
    started: Instant,
}

impl<B: Backend> GameScreen<B> {
    pub fn new(backend: B) -> io::Result<Self> {
        Ok(Self {
            terminal: Terminal::new(backend)?,
            started: Instant::now(),
        })
    }

    /// Renders one frame of `state`.
    pub fn draw(&mut self, state: &GameState) -> io::Result<()> {
        let animation_ms = u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX);
        self.terminal
            .draw(|frame| renderer::render(frame, state, animation_ms))?;
        Ok(())
    }

    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }
}

impl GameScreen<CrosstermBackend<Stdout>> {
    /// Draws on the process's stdout; pair with a live [`RawTerminal`].
    pub fn stdout() -> io::Result<Self> {
        Self::new(CrosstermBackend::new(io::stdout()))
    }
}

/// Raw mode and the alternate screen, held for as long as the game runs.
///
/// Dropping the guard, or panicking while it is held, puts the shell back
/// the way it was.
pub struct RawTerminal {
    _private: (),
}

impl RawTerminal {
    pub fn acquire() -> io::Result<Self> {
        install_panic_hook();
        enable_raw_mode()?;

        if let Err(error) = execute!(io::stdout(), EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error);
        }

        debug!("terminal switched to raw mode");
        Ok(Self { _private: () })
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        if let Err(error) = leave_raw_mode() {
            error!("could not restore terminal: {error}");
        }
    }
}

fn install_panic_hook() {
    let previous = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        let _ = leave_raw_mode();
        error!("panic: {info}");
        previous(info);
    }));
}

fn leave_raw_mode() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), Show, LeaveAlternateScreen)
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use crate::config::GRID_SIZE;
    use crate::game::GameState;
    use crate::input::GameInput;

    use super::GameScreen;

    fn screen_text(screen: &GameScreen<TestBackend>) -> String {
        screen
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn draws_menu_then_board() {
        let mut screen = GameScreen::new(TestBackend::new(80, 30)).expect("test backend");
        let mut state = GameState::new_with_seed(GRID_SIZE, 5).expect("board has room");

        screen.draw(&state).expect("menu frame");
        assert!(screen_text(&screen).contains("START"));

        state.apply_input(GameInput::Confirm).expect("start");
        screen.draw(&state).expect("board frame");
        let text = screen_text(&screen);
        assert!(!text.contains("START"));
        assert!(text.contains("SCORE: 0"));
    }
}
