use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::app::App;
use crate::ui::theme;

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let separator_style = Style::default().fg(theme::TEXT_DIM);
        let line = Line::from(vec![
            Span::styled(
                "  Perks",
                Style::default().fg(theme::TITLE).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(app.route().path(), Style::default().fg(theme::TEXT)),
            Span::styled("  │  ", separator_style),
            Span::styled(
                app.config().api.base_url.clone(),
                Style::default().fg(theme::TEXT_DIM),
            ),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(theme::CARD_BORDER)),
        )
    }
}
