//! Blocking popups: delete confirmation and request-failure alert.

use crate::app::state::AppState;
use crate::ui::question_list::truncate_to_width;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

const CONFIRM_DELETE_PROMPT: &str = "Are you sure you want to delete the question?";

fn popup_area(area: Rect, height: u16) -> Rect {
    // 60% of the width; at most `area.width`, so it fits back in a u16
    let popup_w = (u32::from(area.width) * 60 / 100) as u16;
    let popup_w = popup_w
        .max(40)
        .min(area.width.saturating_sub(4));
    let popup_h = height.min(area.height.saturating_sub(2));
    let popup_x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    Rect::new(popup_x, popup_y, popup_w, popup_h)
}

pub fn render(frame: &mut Frame, state: &AppState) {
    // An alert outranks a pending confirmation
    if let Some(ref message) = state.alert {
        render_alert(frame, message);
    } else if let Some(id) = state.confirm_delete {
        render_confirm(frame, state, id);
    }
}

fn render_alert(frame: &mut Frame, message: &str) {
    let area = popup_area(frame.area(), 7);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Error ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(Theme::alert_border())
        .style(Style::default().bg(Theme::BG_DARK));

    let text = vec![
        Line::from(Span::styled(message, Theme::question_text())),
        Line::default(),
        Line::from(vec![
            Span::styled("Enter", Theme::key_hint()),
            Span::styled(" Dismiss", Style::default().fg(Theme::TEXT_SECONDARY)),
        ]),
    ];
    let p = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);
    frame.render_widget(p, area);
}

fn render_confirm(frame: &mut Frame, state: &AppState, id: i64) {
    let area = popup_area(frame.area(), 8);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Delete question ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(Style::default().fg(Theme::ACCENT_AMBER))
        .style(Style::default().bg(Theme::BG_DARK));

    let question = state
        .view
        .questions
        .iter()
        .find(|q| q.id == id)
        .map(|q| q.question.as_str())
        .unwrap_or_default();
    let width = (area.width as usize).saturating_sub(4);

    let text = vec![
        Line::from(Span::styled(CONFIRM_DELETE_PROMPT, Theme::question_text())),
        Line::from(Span::styled(
            truncate_to_width(question, width),
            Theme::question_meta(),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("y", Theme::key_hint()),
            Span::styled(" Delete  ", Style::default().fg(Theme::TEXT_SECONDARY)),
            Span::styled("n", Theme::key_hint()),
            Span::styled(" Cancel", Style::default().fg(Theme::TEXT_SECONDARY)),
        ]),
    ];
    let p = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(p, area);
}
