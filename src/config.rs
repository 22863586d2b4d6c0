use std::time::Duration;

use ratatui::style::Color;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// The fixed square play field.
pub const GRID_SIZE: GridSize = GridSize {
    width: 20,
    height: 20,
};

/// Frame rate of the real-time loop; per-frame timers count in these frames.
pub const FRAMES_PER_SECOND: u32 = 60;

/// Target frame interval of the real-time loop.
pub const FRAME_INTERVAL: Duration =
    Duration::from_nanos(1_000_000_000 / FRAMES_PER_SECOND as u64);

/// Movement interval at the start of every game.
pub const INITIAL_MOVE_DELAY: Duration = Duration::from_millis(100);

/// Floor for the movement interval.
pub const MIN_MOVE_DELAY: Duration = Duration::from_millis(50);

/// Amount the movement interval shrinks per non-bomb pickup.
pub const MOVE_DELAY_STEP: Duration = Duration::from_millis(2);

/// Speed boost duration in frames.
pub const SPEED_BOOST_TICKS: u32 = 300;

/// Ghost mode duration in frames.
pub const GHOST_MODE_TICKS: u32 = 180;

/// Frames an uneaten speed fruit stays on the board.
pub const SPEED_FOOD_LIFESPAN: u32 = 300;

/// Frames an uneaten ghost fruit stays on the board.
pub const GHOST_FOOD_LIFESPAN: u32 = 180;

/// Frames an uneaten bomb stays on the board.
pub const BOMB_FOOD_LIFESPAN: u32 = 240;

/// Random placement attempts before falling back to a free-cell scan.
pub const SPAWN_RETRY_LIMIT: usize = 1024;

/// Size of a grid cell in the pixel units particle tuning was authored in.
pub const PIXELS_PER_CELL: f32 = 40.0;

/// Downward acceleration applied to particles each frame, in cells.
pub const PARTICLE_GRAVITY: f32 = 0.5 / PIXELS_PER_CELL;

/// Life lost by each particle per frame.
pub const PARTICLE_DECAY: f32 = 0.02;

/// Retro palette shared by the simulation (particle colours) and the renderer.
pub mod palette {
    use ratatui::style::Color;

    pub const GREEN: Color = Color::Rgb(0, 255, 0);
    pub const DARK_GREEN: Color = Color::Rgb(0, 180, 0);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const DARK_RED: Color = Color::Rgb(80, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const PURPLE: Color = Color::Rgb(255, 0, 255);
    pub const CYAN: Color = Color::Rgb(0, 255, 255);
    pub const ORANGE: Color = Color::Rgb(255, 165, 0);
    pub const GRID: Color = Color::Rgb(20, 20, 20);
}

/// Background colour of the play field.
pub const PLAY_BG: Color = Color::Black;

/// Border colour of the play field.
pub const BORDER_FG: Color = palette::RED;

/// Glyph for one cell; doubled horizontally so cells look square.
pub const GLYPH_CELL: &str = "██";

/// Empty cell glyph; drawn in the faint grid colour.
pub const GLYPH_EMPTY: &str = "· ";

/// Glyph for a particle drawn over a cell.
pub const GLYPH_PARTICLE: &str = "••";

pub const GLYPH_FOOD_GOLDEN: &str = "<>";
pub const GLYPH_FOOD_SPEED: &str = ">>";
pub const GLYPH_FOOD_GHOST: &str = "()";
pub const GLYPH_FOOD_BOMB: &str = "@*";

/// Snake eyes, facing the heading; drawn white on the head colour.
pub const GLYPH_HEAD_UP: &str = "''";
pub const GLYPH_HEAD_DOWN: &str = "..";
pub const GLYPH_HEAD_LEFT: &str = ": ";
pub const GLYPH_HEAD_RIGHT: &str = " :";

/// Upper half-block glyph used for the food timer bar.
pub const GLYPH_HALF_UPPER: &str = "▀";
