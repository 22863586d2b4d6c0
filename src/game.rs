use std::mem;
use std::time::Duration;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{GridSize, INITIAL_MOVE_DELAY, MIN_MOVE_DELAY, MOVE_DELAY_STEP};
use crate::error::GameError;
use crate::events::GameEvent;
use crate::food::{spawn_clear_of, Food, FoodKind};
use crate::input::{Direction, GameInput};
use crate::particles::ParticleField;
use crate::power_up::PowerUpTimers;
use crate::snake::Snake;

/// Current high-level screen.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Menu,
    Playing,
    GameOver,
}

/// Entries of the start menu.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MenuItem {
    Start,
    Quit,
}

/// Why the last round ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// What the launcher should do after an input was handled.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum InputOutcome {
    Continue,
    Exit,
}

/// Complete mutable game state for one process run.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub high_score: u32,
    pub move_delay: Duration,
    pub move_timer: Duration,
    pub power_ups: PowerUpTimers,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    menu_selection: MenuItem,
    particles: ParticleField,
    bounds: GridSize,
    rng: StdRng,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Creates a state seeded from system entropy.
    pub fn new(bounds: GridSize) -> Result<Self, GameError> {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, mut rng: StdRng) -> Result<Self, GameError> {
        let snake = Snake::spawn(bounds);
        let food = spawn_clear_of(&mut rng, bounds, &snake)?;

        Ok(Self {
            snake,
            food,
            score: 0,
            high_score: 0,
            move_delay: INITIAL_MOVE_DELAY,
            move_timer: Duration::ZERO,
            power_ups: PowerUpTimers::default(),
            status: GameStatus::Menu,
            death_reason: None,
            menu_selection: MenuItem::Start,
            particles: ParticleField::default(),
            bounds,
            rng,
            events: Vec::new(),
        })
    }

    /// Starts a fresh round. The high score survives.
    pub fn reset(&mut self) -> Result<(), GameError> {
        self.snake.reset(self.bounds);
        self.food = spawn_clear_of(&mut self.rng, self.bounds, &self.snake)?;
        self.score = 0;
        self.move_delay = INITIAL_MOVE_DELAY;
        self.move_timer = Duration::ZERO;
        self.power_ups = PowerUpTimers::default();
        self.particles.clear();
        self.death_reason = None;
        Ok(())
    }

    /// Applies one external input event according to the current screen.
    pub fn apply_input(&mut self, input: GameInput) -> Result<InputOutcome, GameError> {
        if input == GameInput::Quit {
            return Ok(InputOutcome::Exit);
        }

        match self.status {
            GameStatus::Menu => return self.apply_menu_input(input),
            GameStatus::Playing => {
                if let GameInput::Direction(direction) = input {
                    self.snake.change_direction(direction);
                }
            }
            GameStatus::GameOver => match input {
                GameInput::Yes => self.start_round()?,
                GameInput::No => {
                    info!("returning to menu");
                    self.status = GameStatus::Menu;
                    self.menu_selection = MenuItem::Start;
                    self.events.push(GameEvent::MenuNavigate);
                }
                _ => {}
            },
        }

        Ok(InputOutcome::Continue)
    }

    fn apply_menu_input(&mut self, input: GameInput) -> Result<InputOutcome, GameError> {
        let selection = match input {
            GameInput::MenuPrev | GameInput::Direction(Direction::Up) => MenuItem::Start,
            GameInput::MenuNext | GameInput::Direction(Direction::Down) => MenuItem::Quit,
            GameInput::Confirm => {
                return match self.menu_selection {
                    MenuItem::Start => {
                        self.start_round()?;
                        Ok(InputOutcome::Continue)
                    }
                    MenuItem::Quit => Ok(InputOutcome::Exit),
                };
            }
            _ => return Ok(InputOutcome::Continue),
        };

        self.menu_selection = selection;
        self.events.push(GameEvent::MenuNavigate);
        Ok(InputOutcome::Continue)
    }

    fn start_round(&mut self) -> Result<(), GameError> {
        self.reset()?;
        self.status = GameStatus::Playing;
        self.events.push(GameEvent::ConfirmSelect);
        info!("new round started, high score {}", self.high_score);
        Ok(())
    }

    /// Advances the simulation by one real-time frame of length `dt`.
    ///
    /// The snake only moves once the accumulated time reaches the effective
    /// move delay; food expiry, power-ups and particles advance every frame.
    pub fn update(&mut self, dt: Duration) -> Result<(), GameError> {
        if self.status != GameStatus::Playing {
            return Ok(());
        }

        self.move_timer += dt;
        if self.move_timer >= self.power_ups.effective_move_delay(self.move_delay) {
            self.step()?;
            if self.death_reason == Some(DeathReason::WallCollision) {
                return Ok(());
            }
        }

        if self.food.tick() {
            debug!("{:?} at {:?} expired", self.food.kind, self.food.position);
            self.respawn_food()?;
        }

        self.move_timer = self
            .power_ups
            .clamp_move_timer(self.move_timer, self.move_delay);
        self.power_ups.tick();
        self.particles.update();

        Ok(())
    }

    /// Performs one movement step immediately: move, eat, collide.
    pub fn step(&mut self) -> Result<(), GameError> {
        if self.status != GameStatus::Playing {
            return Ok(());
        }

        self.move_timer = Duration::ZERO;

        let Some(head) = self.snake.move_forward(self.bounds) else {
            self.end_round(DeathReason::WallCollision);
            return Ok(());
        };
        self.events.push(GameEvent::Moved);

        if head == self.food.position {
            let eaten = self.food.kind;
            self.eat(eaten);
            self.respawn_food()?;

            if eaten.effect().speeds_up {
                self.move_delay = self
                    .move_delay
                    .saturating_sub(MOVE_DELAY_STEP)
                    .max(MIN_MOVE_DELAY);
            }
        }

        if !self.power_ups.is_ghosted() && self.snake.head_overlaps_body() {
            self.end_round(DeathReason::SelfCollision);
        }

        Ok(())
    }

    fn eat(&mut self, kind: FoodKind) {
        let effect = kind.effect();
        let head = self.snake.head();

        self.score = self.score.saturating_add_signed(effect.score_delta);
        self.snake.grow(effect.growth);
        if effect.rainbow {
            self.snake.set_rainbow(true);
        }
        if effect.halves_body && self.snake.len() > 3 {
            self.snake.truncate(self.snake.len() / 2);
        }
        if let Some((power_up, ticks)) = effect.power_up {
            debug!("{power_up:?} active for {ticks} ticks");
            self.power_ups.activate(power_up, ticks);
        }
        if let Some(batch) = &effect.particles {
            self.particles.emit(&mut self.rng, head, batch);
        }

        self.events.push(effect.event);
        debug!("ate {kind:?} at {head:?}, score {}", self.score);
    }

    fn respawn_food(&mut self) -> Result<(), GameError> {
        self.food = spawn_clear_of(&mut self.rng, self.bounds, &self.snake)?;
        Ok(())
    }

    fn end_round(&mut self, reason: DeathReason) {
        self.status = GameStatus::GameOver;
        self.death_reason = Some(reason);
        self.events.push(GameEvent::Died);
        if self.score > self.high_score {
            self.high_score = self.score;
        }
        info!(
            "game over ({reason:?}): score {}, length {}, high score {}",
            self.score,
            self.snake.len(),
            self.high_score
        );
    }

    /// Hands over every event raised since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    #[must_use]
    pub fn menu_selection(&self) -> MenuItem {
        self.menu_selection
    }

    #[must_use]
    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }
}
