use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::config::palette;
use crate::game::{DeathReason, MenuItem};

/// Draws the start screen with the Start/Quit selector.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect, selection: MenuItem, high_score: u32) {
    let popup = centered_popup(area, 70, 70);
    frame.render_widget(Clear, popup);

    let [title_row, body_row, footer_row] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(6),
        Constraint::Length(2),
    ])
    .areas(popup);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from("S N A K E").style(
                Style::new()
                    .fg(palette::GREEN)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from("RETRO ARCADE").style(Style::new().fg(palette::CYAN)),
        ])
        .alignment(Alignment::Center),
        title_row,
    );

    let item_style = |item: MenuItem| {
        let color = if item == selection {
            palette::YELLOW
        } else {
            palette::WHITE
        };
        Style::new().fg(color).add_modifier(Modifier::BOLD)
    };

    let mut body = Vec::new();
    if high_score > 0 {
        body.push(
            Line::from(format!("HIGH SCORE: {high_score}")).style(Style::new().fg(palette::PURPLE)),
        );
    }
    body.push(Line::from(""));
    body.push(Line::from("START").style(item_style(MenuItem::Start)));
    body.push(Line::from(""));
    body.push(Line::from("QUIT").style(item_style(MenuItem::Quit)));

    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .block(Block::bordered()),
        body_row,
    );

    frame.render_widget(
        Paragraph::new(Line::from("Use ARROWS/WASD to select, ENTER to confirm"))
            .alignment(Alignment::Center)
            .style(Style::new().fg(palette::WHITE)),
        footer_row,
    );
}

/// Draws the game-over box over the board.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    high_score: u32,
    death_reason: Option<DeathReason>,
    cursor_visible: bool,
) {
    let popup = centered_popup(area, 80, 50);
    frame.render_widget(Clear, popup);

    let prompt = if cursor_visible {
        "Play again? Y/N _"
    } else {
        "Play again? Y/N  "
    };
    let lines = vec![
        Line::from("GAME OVER").style(Style::new().fg(palette::RED).add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from(format!("FINAL SCORE: {score}")).style(Style::new().fg(palette::YELLOW)),
        Line::from(format!("HIGH SCORE: {high_score}")).style(Style::new().fg(palette::CYAN)),
        Line::from(match death_reason {
            Some(DeathReason::WallCollision) => "You left the arena",
            Some(DeathReason::SelfCollision) => "You bit yourself",
            None => "",
        }),
        Line::from(""),
        Line::from(prompt),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().border_style(Style::new().fg(palette::RED))),
        popup,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
