use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::ui::purchase::{FormField, PurchaseFlowState, PurchaseFormState};
use crate::ui::render::render_card;
use crate::ui::theme;

pub fn draw(
    frame: &mut Frame<'_>,
    area: Rect,
    form: &PurchaseFormState,
    flow: &PurchaseFlowState,
) {
    if flow.success {
        draw_success(frame, area);
    } else {
        draw_form(frame, area, form, flow);
    }
}

fn draw_success(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Purchase made successfully!",
            Style::default().fg(theme::SUCCESS),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Enter: view achievements",
            Style::default().fg(theme::TEXT_DIM),
        )),
        Line::from(""),
    ];
    render_card(frame, area, "Make a Purchase", lines);
}

fn draw_form(
    frame: &mut Frame<'_>,
    area: Rect,
    form: &PurchaseFormState,
    flow: &PurchaseFlowState,
) {
    let mut lines = Vec::new();
    push_field(
        &mut lines,
        "Email",
        &form.email,
        form.focus == FormField::Email,
        "john.doe@example.com",
    );
    lines.push(Line::from(""));
    push_field(
        &mut lines,
        "Amount",
        &form.amount,
        form.focus == FormField::Amount,
        "1000",
    );
    lines.push(Line::from(""));

    // Validation errors and backend rejections share the inline slot
    // above the submit hint.
    if let Some(message) = form.error.as_deref().or(flow.error.as_deref()) {
        lines.push(Line::from(Span::styled(
            format!("  {message}"),
            Style::default().fg(theme::ERROR),
        )));
        lines.push(Line::from(""));
    }

    let action = if flow.loading {
        Span::styled("  Processing...", Style::default().fg(theme::TEXT_DIM))
    } else {
        Span::styled("  Enter: purchase", Style::default().fg(theme::TEXT_DIM))
    };
    lines.push(Line::from(action));

    render_card(frame, area, "Make a Purchase", lines);
}

fn push_field(
    lines: &mut Vec<Line<'static>>,
    label: &'static str,
    value: &str,
    focused: bool,
    placeholder: &'static str,
) {
    let label_style = if focused {
        Style::default().fg(theme::TITLE).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::TEXT_DIM)
    };
    lines.push(Line::from(Span::styled(format!("  {label}"), label_style)));

    let (text, style) = if value.is_empty() && !focused {
        (
            placeholder.to_string(),
            Style::default().fg(theme::TEXT_DIM).add_modifier(Modifier::DIM),
        )
    } else {
        let mut text = value.to_string();
        if focused {
            text.push('▏');
        }
        (text, Style::default().fg(theme::TEXT))
    };
    lines.push(Line::from(Span::styled(format!("  > {text}"), style)));
}
