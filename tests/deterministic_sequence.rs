use std::time::Duration;

use arcade_snake::config::{GridSize, GHOST_MODE_TICKS, GRID_SIZE};
use arcade_snake::events::{AudioSink, GameEvent};
use arcade_snake::food::{Food, FoodKind};
use arcade_snake::game::{DeathReason, GameState, GameStatus, InputOutcome};
use arcade_snake::input::{Direction, GameInput};
use arcade_snake::snake::{Position, Snake};

/// Collects every event so scenarios can assert on the audio stream.
#[derive(Default)]
struct RecordingAudio {
    events: Vec<GameEvent>,
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

fn start(seed: u64) -> GameState {
    let mut state = GameState::new_with_seed(GRID_SIZE, seed).expect("board has room");
    let outcome = state
        .apply_input(GameInput::Confirm)
        .expect("start should succeed");
    assert_eq!(outcome, InputOutcome::Continue);
    state
}

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let mut state = start(42);
    let mut audio = RecordingAudio::default();

    state.snake = Snake::new(Position { x: 17, y: 1 }, Direction::Right);
    state.food = Food::new(Position { x: 18, y: 1 }, FoodKind::Apple);

    state.update(Duration::from_millis(100)).expect("update");
    assert_eq!(state.status, GameStatus::Playing);
    assert_eq!(state.score, 10);
    assert_eq!(state.move_delay, Duration::from_millis(98));
    assert_eq!(state.snake.head(), Position { x: 18, y: 1 });

    state.food = Food::new(Position { x: 0, y: 19 }, FoodKind::Apple);
    state.update(Duration::from_millis(98)).expect("update");
    assert_eq!(state.snake.len(), 2);
    assert_eq!(state.snake.head(), Position { x: 19, y: 1 });

    state
        .apply_input(GameInput::Direction(Direction::Up))
        .expect("input");
    state.update(Duration::from_millis(98)).expect("update");
    assert_eq!(state.snake.head(), Position { x: 19, y: 0 });

    state.update(Duration::from_millis(98)).expect("update");
    assert_eq!(state.status, GameStatus::GameOver);
    assert_eq!(state.death_reason, Some(DeathReason::WallCollision));
    assert_eq!(state.high_score, 10);

    for event in state.drain_events() {
        audio.play(event);
    }
    assert_eq!(
        audio.events,
        vec![
            GameEvent::ConfirmSelect,
            GameEvent::Moved,
            GameEvent::AteApple,
            GameEvent::Moved,
            GameEvent::Moved,
            GameEvent::Died,
        ]
    );
}

#[test]
fn ghost_fruit_lets_the_snake_pass_through_itself_until_it_wears_off() {
    let mut state = start(7);
    let bounds = state.bounds();
    assert_eq!(
        bounds,
        GridSize {
            width: 20,
            height: 20
        }
    );

    // A hook-shaped snake: turning down from (5,5) runs into its own body.
    state.snake = Snake::from_segments(
        vec![
            Position { x: 5, y: 5 },
            Position { x: 4, y: 5 },
            Position { x: 4, y: 6 },
            Position { x: 5, y: 6 },
            Position { x: 6, y: 6 },
            Position { x: 6, y: 7 },
        ],
        Direction::Right,
    );
    state.food = Food::new(Position { x: 5, y: 6 }, FoodKind::Ghost);
    state
        .apply_input(GameInput::Direction(Direction::Down))
        .expect("input");

    state.step().expect("step");
    assert_eq!(state.power_ups.ghost_mode_ticks, GHOST_MODE_TICKS);
    assert_eq!(state.status, GameStatus::Playing);

    // Ghost frames tick down every update, even without movement.
    for _ in 0..GHOST_MODE_TICKS {
        state.update(Duration::ZERO).expect("update");
    }
    assert!(!state.power_ups.is_ghosted());
    assert_eq!(state.status, GameStatus::Playing);
}

#[test]
fn play_again_keeps_high_score_and_no_returns_to_menu() {
    let mut state = start(3);

    state.snake = Snake::new(Position { x: 2, y: 2 }, Direction::Right);
    state.food = Food::new(Position { x: 3, y: 2 }, FoodKind::Golden);
    state.step().expect("step");
    assert_eq!(state.score, 50);

    state
        .apply_input(GameInput::Direction(Direction::Up))
        .expect("input");
    state.food = Food::new(Position { x: 19, y: 19 }, FoodKind::Apple);
    for _ in 0..3 {
        state.step().expect("step");
    }
    assert_eq!(state.status, GameStatus::GameOver);
    assert_eq!(state.high_score, 50);

    state.apply_input(GameInput::Yes).expect("input");
    assert_eq!(state.status, GameStatus::Playing);
    assert_eq!(state.score, 0);
    assert_eq!(state.high_score, 50);

    state.snake = Snake::new(Position { x: 0, y: 0 }, Direction::Left);
    state.step().expect("step");
    assert_eq!(state.high_score, 50);

    state.apply_input(GameInput::No).expect("input");
    assert_eq!(state.status, GameStatus::Menu);
    assert_eq!(
        state.apply_input(GameInput::Quit).expect("input"),
        InputOutcome::Exit
    );
}

#[test]
fn long_random_run_keeps_invariants() {
    let mut state = start(99);
    let turns = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    for frame in 0..20_000u32 {
        if state.status != GameStatus::Playing {
            state.apply_input(GameInput::Yes).expect("restart");
        }
        if frame % 7 == 0 {
            let turn = turns[(frame / 7) as usize % turns.len()];
            state
                .apply_input(GameInput::Direction(turn))
                .expect("input");
        }

        state.update(Duration::from_millis(16)).expect("update");

        assert!(state.move_delay >= Duration::from_millis(50));
        assert!(state.move_delay <= Duration::from_millis(100));
        assert!(!state.snake.occupies(state.food.position) || state.status != GameStatus::Playing);
        assert!(state.high_score >= state.score || state.status == GameStatus::Playing);
        for particle in state.particles().iter() {
            assert!(particle.life > 0.0 && particle.life <= 1.5);
        }
    }
}
