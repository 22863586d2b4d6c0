use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::{palette, FRAMES_PER_SECOND, GLYPH_HALF_UPPER};
use crate::game::GameState;
use crate::power_up::PowerUp;

/// Width of the food timer bar at a full lifespan.
const TIMER_BAR_WIDTH: usize = 10;

/// Renders the two-line HUD and returns the remaining play area below it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState) -> Rect {
    let [score_area, status_area, play_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(score_line(state.score, state.high_score)),
        score_area,
    );
    frame.render_widget(Paragraph::new(status_line(state)), status_area);

    play_area
}

fn score_line(score: u32, high_score: u32) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("SCORE: {score}"),
            Style::new().fg(palette::WHITE).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(format!("HIGH: {high_score}"), Style::new().fg(palette::CYAN)),
    ])
}

fn status_line(state: &GameState) -> Line<'static> {
    let mut spans = Vec::new();

    let boost = state.power_ups.remaining(PowerUp::SpeedBoost);
    if boost > 0 {
        spans.push(Span::styled(
            format!("SPEED: {}s  ", seconds_left(boost)),
            Style::new().fg(palette::CYAN),
        ));
    }

    let ghost = state.power_ups.remaining(PowerUp::GhostMode);
    if ghost > 0 {
        spans.push(Span::styled(
            format!("GHOST: {}s  ", seconds_left(ghost)),
            Style::new().fg(palette::WHITE),
        ));
    }

    if let Some(fraction) = state.food.remaining_fraction() {
        spans.push(Span::raw(format!("{:?}: ", state.food.kind)));
        spans.push(Span::styled(
            timer_bar(fraction),
            Style::new().fg(timer_color(fraction)),
        ));
    }

    Line::from(spans)
}

/// Whole seconds shown for a frame countdown, rounded up.
fn seconds_left(ticks: u32) -> u32 {
    ticks / FRAMES_PER_SECOND + 1
}

fn timer_bar(fraction: f32) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * TIMER_BAR_WIDTH as f32).round() as usize;
    GLYPH_HALF_UPPER.repeat(filled)
}

fn timer_color(fraction: f32) -> ratatui::style::Color {
    if fraction > 0.5 {
        palette::GREEN
    } else if fraction > 0.25 {
        palette::YELLOW
    } else {
        palette::RED
    }
}

#[cfg(test)]
mod tests {
    use crate::config::palette;

    use super::{seconds_left, timer_bar, timer_color};

    #[test]
    fn power_up_seconds_round_up() {
        assert_eq!(seconds_left(300), 6);
        assert_eq!(seconds_left(179), 3);
        assert_eq!(seconds_left(1), 1);
    }

    #[test]
    fn timer_bar_scales_with_fraction() {
        assert_eq!(timer_bar(1.0).chars().count(), 10);
        assert_eq!(timer_bar(0.5).chars().count(), 5);
        assert!(timer_bar(0.0).is_empty());
    }

    #[test]
    fn timer_turns_red_when_nearly_gone() {
        assert_eq!(timer_color(0.9), palette::GREEN);
        assert_eq!(timer_color(0.4), palette::YELLOW);
        assert_eq!(timer_color(0.1), palette::RED);
    }
}
