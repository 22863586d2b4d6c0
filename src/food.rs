use log::warn;
use rand::Rng;

use crate::config::{
    palette, GridSize, BOMB_FOOD_LIFESPAN, GHOST_FOOD_LIFESPAN, GHOST_MODE_TICKS,
    SPAWN_RETRY_LIMIT, SPEED_BOOST_TICKS, SPEED_FOOD_LIFESPAN,
};
use crate::error::GameError;
use crate::events::GameEvent;
use crate::particles::ParticleBatch;
use crate::power_up::PowerUp;
use crate::snake::{Position, Snake};

/// Food variety, drawn with fixed weights on every spawn.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum FoodKind {
    Apple,
    Golden,
    Speed,
    Ghost,
    Bomb,
}

/// Everything a pickup does, looked up per kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoodEffect {
    pub score_delta: i32,
    pub growth: u32,
    pub power_up: Option<(PowerUp, u32)>,
    pub rainbow: bool,
    /// Halve the body when it is longer than three segments.
    pub halves_body: bool,
    /// Shorten the move interval after eating.
    pub speeds_up: bool,
    pub particles: Option<ParticleBatch>,
    pub event: GameEvent,
}

static APPLE_EFFECT: FoodEffect = FoodEffect {
    score_delta: 10,
    growth: 1,
    power_up: None,
    rainbow: false,
    halves_body: false,
    speeds_up: true,
    particles: None,
    event: GameEvent::AteApple,
};

static GOLDEN_EFFECT: FoodEffect = FoodEffect {
    score_delta: 50,
    growth: 3,
    power_up: None,
    rainbow: true,
    halves_body: false,
    speeds_up: true,
    particles: Some(ParticleBatch {
        count: 20,
        spread: 5.0,
        palette: &[palette::YELLOW, palette::CYAN, palette::PURPLE, palette::GREEN],
        life: 1.0,
    }),
    event: GameEvent::AteGolden,
};

static SPEED_EFFECT: FoodEffect = FoodEffect {
    score_delta: 25,
    growth: 0,
    power_up: Some((PowerUp::SpeedBoost, SPEED_BOOST_TICKS)),
    rainbow: false,
    halves_body: false,
    speeds_up: true,
    particles: Some(ParticleBatch {
        count: 15,
        spread: 8.0,
        palette: &[palette::CYAN],
        life: 1.0,
    }),
    event: GameEvent::AteSpeed,
};

static GHOST_EFFECT: FoodEffect = FoodEffect {
    score_delta: 30,
    growth: 0,
    power_up: Some((PowerUp::GhostMode, GHOST_MODE_TICKS)),
    rainbow: false,
    halves_body: false,
    speeds_up: true,
    particles: Some(ParticleBatch {
        count: 10,
        spread: 3.0,
        palette: &[palette::WHITE],
        life: 1.5,
    }),
    event: GameEvent::AteGhost,
};

static BOMB_EFFECT: FoodEffect = FoodEffect {
    score_delta: -20,
    growth: 0,
    power_up: None,
    rainbow: false,
    halves_body: true,
    speeds_up: false,
    particles: Some(ParticleBatch {
        count: 30,
        spread: 10.0,
        palette: &[palette::RED],
        life: 0.8,
    }),
    event: GameEvent::AteBomb,
};

impl FoodKind {
    /// Maps a uniform draw in `[0, 1)` onto the weighted kinds
    /// (apple 60%, golden 20%, speed 10%, ghost 5%, bomb 5%).
    #[must_use]
    pub fn from_roll(roll: f64) -> Self {
        if roll < 0.6 {
            Self::Apple
        } else if roll < 0.8 {
            Self::Golden
        } else if roll < 0.9 {
            Self::Speed
        } else if roll < 0.95 {
            Self::Ghost
        } else {
            Self::Bomb
        }
    }

    /// Draws a kind from `rng`.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_roll(rng.gen_range(0.0..1.0))
    }

    /// Ticks before an uneaten item is replaced; `None` never expires.
    #[must_use]
    pub fn lifespan(self) -> Option<u32> {
        match self {
            Self::Apple | Self::Golden => None,
            Self::Speed => Some(SPEED_FOOD_LIFESPAN),
            Self::Ghost => Some(GHOST_FOOD_LIFESPAN),
            Self::Bomb => Some(BOMB_FOOD_LIFESPAN),
        }
    }

    #[must_use]
    pub fn effect(self) -> &'static FoodEffect {
        match self {
            Self::Apple => &APPLE_EFFECT,
            Self::Golden => &GOLDEN_EFFECT,
            Self::Speed => &SPEED_EFFECT,
            Self::Ghost => &GHOST_EFFECT,
            Self::Bomb => &BOMB_EFFECT,
        }
    }
}

/// Food entity currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
    pub kind: FoodKind,
    elapsed: u32,
    lifespan: Option<u32>,
}

impl Food {
    /// Creates food of `kind` at `position` with a fresh timer.
    #[must_use]
    pub fn new(position: Position, kind: FoodKind) -> Self {
        Self {
            position,
            kind,
            elapsed: 0,
            lifespan: kind.lifespan(),
        }
    }

    /// Rolls a random cell and a weighted kind. Snake occupancy is not
    /// considered here; see [`spawn_clear_of`].
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Self {
        let position = Position {
            x: rng.gen_range(0..i32::from(bounds.width)),
            y: rng.gen_range(0..i32::from(bounds.height)),
        };
        Self::new(position, FoodKind::roll(rng))
    }

    /// Advances the expiry timer by one frame. Returns `true` once the food
    /// has expired and should be replaced. Permanent food never expires.
    pub fn tick(&mut self) -> bool {
        let Some(lifespan) = self.lifespan else {
            return false;
        };

        self.elapsed = self.elapsed.saturating_add(1);
        self.elapsed >= lifespan
    }

    #[must_use]
    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    #[must_use]
    pub fn lifespan(&self) -> Option<u32> {
        self.lifespan
    }

    /// Share of the lifespan still left, for timer bars.
    #[must_use]
    pub fn remaining_fraction(&self) -> Option<f32> {
        self.lifespan.map(|lifespan| {
            let left = lifespan.saturating_sub(self.elapsed);
            left as f32 / lifespan as f32
        })
    }
}

/// Spawns food that does not overlap the snake.
///
/// Re-rolls [`Food::spawn`] up to [`SPAWN_RETRY_LIMIT`] times, then picks
/// among the free cells directly. Fails only when the snake fills the board.
pub fn spawn_clear_of<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Result<Food, GameError> {
    for _ in 0..SPAWN_RETRY_LIMIT {
        let food = Food::spawn(rng, bounds);
        if !snake.occupies(food.position) {
            return Ok(food);
        }
    }

    warn!(
        "food placement missed {SPAWN_RETRY_LIMIT} times with snake length {}, scanning free cells",
        snake.len()
    );

    let position = free_position(rng, bounds, snake).ok_or(GameError::BoardSaturated {
        width: bounds.width,
        height: bounds.height,
    })?;
    Ok(Food::new(position, FoodKind::roll(rng)))
}

fn free_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Option<Position> {
    let mut candidates = Vec::with_capacity(bounds.total_cells());

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}
