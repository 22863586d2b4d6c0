use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{
    palette, GridSize, BORDER_FG, GLYPH_CELL, GLYPH_EMPTY, GLYPH_FOOD_BOMB, GLYPH_FOOD_GHOST,
    GLYPH_FOOD_GOLDEN, GLYPH_FOOD_SPEED, GLYPH_HEAD_DOWN, GLYPH_HEAD_LEFT, GLYPH_HEAD_RIGHT,
    GLYPH_HEAD_UP, GLYPH_PARTICLE, PLAY_BG,
};
use crate::food::FoodKind;
use crate::game::{GameState, GameStatus};
use crate::input::Direction;
use crate::snake::Position;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_start_menu};

/// Terminal columns per grid cell.
const CELL_WIDTH: u16 = 2;

/// Renders the full frame from immutable state.
///
/// `animation_ms` is wall-clock time since start-up; it only drives
/// cosmetic pulsing and never feeds back into the simulation.
pub fn render(frame: &mut Frame<'_>, state: &GameState, animation_ms: u64) {
    let area = frame.area();

    if state.status == GameStatus::Menu {
        render_start_menu(frame, area, state.menu_selection(), state.high_score);
        return;
    }

    let play_area = render_hud(frame, area, state);
    let board = board_rect(play_area, state.bounds());
    let block = Block::bordered().border_style(Style::new().fg(BORDER_FG).bg(PLAY_BG));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    let buffer = frame.buffer_mut();
    render_grid(buffer, inner, state.bounds());
    render_snake(buffer, inner, state, animation_ms);
    render_food(buffer, inner, state, animation_ms);
    render_particles(buffer, inner, state);

    if state.status == GameStatus::GameOver {
        render_game_over_menu(
            frame,
            board,
            state.score,
            state.high_score,
            state.death_reason,
            animation_ms % 1000 < 500,
        );
    }
}

fn board_rect(area: Rect, bounds: GridSize) -> Rect {
    let width = (bounds.width * CELL_WIDTH + 2).min(area.width);
    let height = (bounds.height + 2).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_grid(buffer: &mut Buffer, inner: Rect, bounds: GridSize) {
    let style = Style::new().fg(palette::GRID).bg(PLAY_BG);
    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            if let Some((column, row)) = cell_to_terminal(inner, bounds, Position { x, y }) {
                buffer.set_string(column, row, GLYPH_EMPTY, style);
            }
        }
    }
}

fn render_snake(buffer: &mut Buffer, inner: Rect, state: &GameState, animation_ms: u64) {
    let ghosted = state.power_ups.is_ghosted();

    for (index, segment) in state.snake.segments().enumerate() {
        let Some((x, y)) = cell_to_terminal(inner, state.bounds(), *segment) else {
            continue;
        };

        let color = if state.snake.is_rainbow() {
            let hue = (index as f32 * 20.0 + animation_ms as f32 / 10.0) % 360.0;
            hsl_to_rgb(hue, 1.0, 0.5)
        } else if index == 0 {
            palette::GREEN
        } else {
            palette::DARK_GREEN
        };

        let (glyph, mut style) = if index == 0 {
            (
                head_glyph(state.snake.direction()),
                Style::new().fg(palette::WHITE).bg(color),
            )
        } else {
            (GLYPH_CELL, Style::new().fg(color).bg(PLAY_BG))
        };
        if ghosted {
            style = style.add_modifier(Modifier::DIM);
        }

        buffer.set_string(x, y, glyph, style);
    }
}

fn render_food(buffer: &mut Buffer, inner: Rect, state: &GameState, animation_ms: u64) {
    let food = &state.food;
    let Some((x, y)) = cell_to_terminal(inner, state.bounds(), food.position) else {
        return;
    };

    let (glyph, style) = match food.kind {
        FoodKind::Apple => (GLYPH_CELL, Style::new().fg(palette::RED).bg(PLAY_BG)),
        FoodKind::Golden => {
            let pulse = (animation_ms as f32 * 0.005).sin().abs() > 0.5;
            let style = Style::new()
                .fg(if pulse { palette::YELLOW } else { palette::PURPLE })
                .bg(palette::YELLOW)
                .add_modifier(Modifier::BOLD);
            (GLYPH_FOOD_GOLDEN, style)
        }
        FoodKind::Speed => (
            GLYPH_FOOD_SPEED,
            Style::new()
                .fg(palette::WHITE)
                .bg(palette::CYAN)
                .add_modifier(Modifier::BOLD),
        ),
        FoodKind::Ghost => {
            let fade = (animation_ms as f32 * 0.01).sin().abs() * 0.5 + 0.5;
            let mut style = Style::new().fg(palette::WHITE).bg(PLAY_BG);
            if fade < 0.75 {
                style = style.add_modifier(Modifier::DIM);
            }
            (GLYPH_FOOD_GHOST, style)
        }
        FoodKind::Bomb => {
            let spark = if food.elapsed() % 10 < 5 {
                palette::YELLOW
            } else {
                palette::ORANGE
            };
            (GLYPH_FOOD_BOMB, Style::new().fg(spark).bg(palette::DARK_RED))
        }
    };

    buffer.set_string(x, y, glyph, style);
}

fn render_particles(buffer: &mut Buffer, inner: Rect, state: &GameState) {
    for particle in state.particles().iter() {
        let position = Position {
            x: particle.x.floor() as i32,
            y: particle.y.floor() as i32,
        };
        let Some((x, y)) = cell_to_terminal(inner, state.bounds(), position) else {
            continue;
        };

        let mut style = Style::new().fg(particle.color);
        if particle.life < 0.5 {
            style = style.add_modifier(Modifier::DIM);
        }
        buffer.set_string(x, y, GLYPH_PARTICLE, style);
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_HEAD_UP,
        Direction::Down => GLYPH_HEAD_DOWN,
        Direction::Left => GLYPH_HEAD_LEFT,
        Direction::Right => GLYPH_HEAD_RIGHT,
    }
}

fn cell_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.saturating_mul(CELL_WIDTH);
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> Color {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue / 60.0;
    let second = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, second, 0.0),
        1 => (second, chroma, 0.0),
        2 => (0.0, chroma, second),
        3 => (0.0, second, chroma),
        4 => (second, 0.0, chroma),
        _ => (chroma, 0.0, second),
    };
    let offset = lightness - chroma / 2.0;
    let channel = |value: f32| ((value + offset) * 255.0).round().clamp(0.0, 255.0) as u8;

    Color::Rgb(channel(r), channel(g), channel(b))
}
