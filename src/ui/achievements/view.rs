use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::api::AchievementsSummary;
use crate::ui::achievements::AchievementsFlowState;
use crate::ui::money::format_naira;
use crate::ui::render::render_card;
use crate::ui::theme;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw(frame: &mut Frame<'_>, area: Rect, flow: &AchievementsFlowState, tick: usize) {
    if flow.loading {
        let spinner = SPINNER_FRAMES[tick % SPINNER_FRAMES.len()];
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {spinner} Loading achievements..."),
                Style::default().fg(theme::TEXT),
            )),
            Line::from(""),
        ];
        render_card(frame, area, "Your Achievements", lines);
        return;
    }

    if let Some(message) = &flow.error {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {message}"),
                Style::default().fg(theme::ERROR),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "  Esc: go back",
                Style::default().fg(theme::TEXT_DIM),
            )),
            Line::from(""),
        ];
        render_card(frame, area, "Your Achievements", lines);
        return;
    }

    // Neither data nor a fetch in flight: the neutral empty view.
    let Some(summary) = &flow.data else {
        return;
    };

    draw_summary(frame, area, summary);
}

fn draw_summary(frame: &mut Frame<'_>, area: Rect, summary: &AchievementsSummary) {
    let width = area.width.min(64);
    let column = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(section_height(&summary.unlocked_achievements)),
            Constraint::Length(section_height(&summary.next_available_achievements)),
            Constraint::Min(0),
        ])
        .split(column);

    draw_badge(frame, chunks[0], summary);
    draw_list(
        frame,
        chunks[1],
        "Unlocked Achievements",
        &summary.unlocked_achievements,
        "✓",
        theme::SUCCESS,
        "No achievements unlocked yet",
    );
    draw_list(
        frame,
        chunks[2],
        "Next Available Achievements",
        &summary.next_available_achievements,
        "○",
        theme::TEXT_DIM,
        "No more achievements available",
    );
}

fn section_height(items: &[String]) -> u16 {
    // One row per entry, or one for the empty fallback, plus borders.
    (items.len().max(1) as u16).saturating_add(2)
}

fn draw_badge(frame: &mut Frame<'_>, area: Rect, summary: &AchievementsSummary) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {}", summary.current_badge),
                Style::default().fg(theme::BADGE).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  your current level", Style::default().fg(theme::TEXT_DIM)),
        ]),
        Line::from(vec![
            Span::styled(
                format!(" Next: {}", summary.next_badge),
                Style::default().fg(theme::TEXT),
            ),
            Span::styled(
                format!(
                    "  {} to unlock",
                    format_naira(summary.remaining_to_unlock_next_badge)
                ),
                Style::default().fg(theme::TEXT_DIM),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(titled_block("Current Badge")), area);
}

fn draw_list(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &'static str,
    items: &[String],
    marker: &'static str,
    marker_color: Color,
    empty_text: &'static str,
) {
    let lines: Vec<Line<'static>> = if items.is_empty() {
        vec![Line::from(Span::styled(
            format!(" {empty_text}"),
            Style::default().fg(theme::TEXT_DIM),
        ))]
    } else {
        items
            .iter()
            .map(|item| {
                Line::from(vec![
                    Span::styled(format!(" {marker} "), Style::default().fg(marker_color)),
                    Span::styled(item.clone(), Style::default().fg(theme::TEXT)),
                ])
            })
            .collect()
    };

    frame.render_widget(Paragraph::new(lines).block(titled_block(title)), area);
}

fn titled_block(title: &'static str) -> Block<'static> {
    Block::default()
        .title(Span::styled(title, Style::default().fg(theme::TITLE)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::CARD_BORDER))
}
