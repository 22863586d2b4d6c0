use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::{direction_change_is_valid, Direction};

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring cell one step towards `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns the centre cell of the grid.
    #[must_use]
    pub fn center_of(bounds: GridSize) -> Self {
        Self {
            x: i32::from(bounds.width / 2),
            y: i32::from(bounds.height / 2),
        }
    }
}

/// Mutable snake state: body, heading, queued growth and the rainbow cosmetic.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    /// Heading used by the last completed move; reversals are judged against it.
    moved_direction: Direction,
    pending_growth: u32,
    rainbow: bool,
}

impl Snake {
    /// Creates a one-cell snake at `start` with the provided direction.
    #[must_use]
    pub fn new(start: Position, direction: Direction) -> Self {
        Self::from_segments(vec![start], direction)
    }

    /// Creates the starting snake: one cell in the centre, heading right.
    #[must_use]
    pub fn spawn(bounds: GridSize) -> Self {
        Self::new(Position::center_of(bounds), Direction::Right)
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        debug_assert!(!segments.is_empty());

        Self {
            body: VecDeque::from(segments),
            direction,
            moved_direction: direction,
            pending_growth: 0,
            rainbow: false,
        }
    }

    /// Restores the starting snake in place.
    pub fn reset(&mut self, bounds: GridSize) {
        *self = Self::spawn(bounds);
    }

    /// Queues `amount` extra segments, added over the next moves.
    pub fn grow(&mut self, amount: u32) {
        self.pending_growth = self.pending_growth.saturating_add(amount);
    }

    /// Advances the head one cell along the current heading.
    ///
    /// Returns the new head, or `None` when it would leave `bounds`. In that
    /// case the body is untouched and the caller decides what leaving means.
    pub fn move_forward(&mut self, bounds: GridSize) -> Option<Position> {
        let next_head = self.next_head_position();
        if !next_head.is_within_bounds(bounds) {
            return None;
        }

        self.moved_direction = self.direction;
        self.body.push_front(next_head);
        if self.pending_growth > 0 {
            self.pending_growth -= 1;
        } else {
            let _ = self.body.pop_back();
        }

        Some(next_head)
    }

    /// Returns the head position for the next movement tick.
    #[must_use]
    pub fn next_head_position(&self) -> Position {
        self.head().step(self.direction)
    }

    /// Turns towards `direction` unless it is the exact opposite of the
    /// current heading.
    ///
    /// Turns queued between two moves are also checked against the heading
    /// of the last move, so a quick pair of turns cannot fold the snake back
    /// onto its neck.
    pub fn change_direction(&mut self, direction: Direction) {
        if direction_change_is_valid(self.direction, direction)
            && direction_change_is_valid(self.moved_direction, direction)
        {
            self.direction = direction;
        }
    }

    /// Cuts the body down to its first `len` segments (never below one).
    pub fn truncate(&mut self, len: usize) {
        self.body.truncate(len.max(1));
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the heading the next move will use.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn pending_growth(&self) -> u32 {
        self.pending_growth
    }

    #[must_use]
    pub fn is_rainbow(&self) -> bool {
        self.rainbow
    }

    pub fn set_rainbow(&mut self, rainbow: bool) {
        self.rainbow = rainbow;
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    const BOUNDS: GridSize = GridSize {
        width: 20,
        height: 20,
    };

    #[test]
    fn reset_places_single_cell_in_center_heading_right() {
        let mut snake = Snake::from_segments(
            vec![Position { x: 1, y: 1 }, Position { x: 1, y: 2 }],
            Direction::Up,
        );
        snake.grow(4);
        snake.set_rainbow(true);

        snake.reset(BOUNDS);

        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position { x: 10, y: 10 });
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.pending_growth(), 0);
        assert!(!snake.is_rainbow());
    }

    #[test]
    fn snake_moves_one_cell_per_tick() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);

        let head = snake.move_forward(BOUNDS);

        assert_eq!(head, Some(Position { x: 6, y: 5 }));
        assert_eq!(snake.head(), Position { x: 6, y: 5 });
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn leaving_the_grid_returns_none_and_keeps_body() {
        let mut snake = Snake::new(Position { x: 19, y: 3 }, Direction::Right);

        assert_eq!(snake.move_forward(BOUNDS), None);
        assert_eq!(snake.head(), Position { x: 19, y: 3 });

        let mut snake = Snake::new(Position { x: 4, y: 0 }, Direction::Up);
        assert_eq!(snake.move_forward(BOUNDS), None);
    }

    #[test]
    fn grow_is_applied_over_following_moves() {
        let mut snake = Snake::new(Position { x: 2, y: 5 }, Direction::Right);

        snake.grow(3);
        assert_eq!(snake.len(), 1);

        for expected in 2..=4 {
            snake.move_forward(BOUNDS);
            assert_eq!(snake.len(), expected);
        }

        snake.move_forward(BOUNDS);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.pending_growth(), 0);
    }

    #[test]
    fn reversal_is_ignored_for_every_heading() {
        for heading in Direction::ALL {
            let mut snake = Snake::new(Position { x: 5, y: 5 }, heading);

            snake.change_direction(heading.opposite());

            assert_eq!(snake.direction(), heading);
        }
    }

    #[test]
    fn two_quick_turns_cannot_reverse_the_snake() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);

        snake.change_direction(Direction::Up);
        snake.change_direction(Direction::Left);

        assert_eq!(snake.direction(), Direction::Up);
        snake.move_forward(BOUNDS);
        assert_eq!(snake.head(), Position { x: 5, y: 4 });

        snake.change_direction(Direction::Left);
        assert_eq!(snake.direction(), Direction::Left);
    }

    #[test]
    fn opposite_of_pending_turn_is_ignored() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);

        snake.change_direction(Direction::Up);
        snake.change_direction(Direction::Down);

        assert_eq!(snake.direction(), Direction::Up);
        snake.move_forward(BOUNDS);
        assert_eq!(snake.head(), Position { x: 5, y: 4 });
    }

    #[test]
    fn single_cell_snake_never_collides_with_itself() {
        let mut snake = Snake::new(Position { x: 0, y: 0 }, Direction::Right);

        for _ in 0..19 {
            snake.move_forward(BOUNDS);
            assert!(!snake.head_overlaps_body());
        }
    }

    #[test]
    fn turning_into_body_registers_collision() {
        let mut snake = Snake::from_segments(
            vec![
                Position { x: 2, y: 2 },
                Position { x: 1, y: 2 },
                Position { x: 1, y: 3 },
                Position { x: 2, y: 3 },
                Position { x: 3, y: 3 },
            ],
            Direction::Right,
        );

        snake.change_direction(Direction::Down);
        snake.grow(1);
        snake.move_forward(BOUNDS);

        assert!(snake.head_overlaps_body());
    }

    #[test]
    fn truncate_keeps_head_segments() {
        let segments: Vec<Position> = (0..7).map(|x| Position { x: 7 - x, y: 1 }).collect();
        let mut snake = Snake::from_segments(segments, Direction::Right);

        snake.truncate(3);

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position { x: 7, y: 1 });

        snake.truncate(0);
        assert_eq!(snake.len(), 1);
    }
}
