use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::router::Route;
use crate::ui::theme;
use crate::ui::{achievements, purchase};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());

    frame.render_widget(Header::new().widget(app), header);

    match app.route() {
        Route::Purchase => purchase::view::draw(frame, body, app.form(), app.purchase()),
        Route::Achievements { .. } => {
            achievements::view::draw(frame, body, app.achievements(), app.tick());
        }
    }

    frame.render_widget(Footer::new().widget(app, footer), footer);
}

/// Render a bordered, titled card centered in `area`, sized to its
/// content.
pub fn render_card(frame: &mut Frame<'_>, area: Rect, title: &'static str, lines: Vec<Line<'static>>) {
    let width = lines
        .iter()
        .map(Line::width)
        .max()
        .unwrap_or(0)
        .saturating_add(4)
        .max(44) as u16;
    let height = (lines.len() as u16).saturating_add(2);
    let card = centered_rect_by_size(area, width, height);

    frame.render_widget(Clear, card);
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(theme::TITLE)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::CARD_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), card);
}
