use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    if state.is_loading() {
        let frame_idx = (state.tick_count as usize) % SPINNER.len();
        parts.push(Span::styled(
            format!(" {} ", SPINNER[frame_idx]),
            Style::default().fg(Theme::ACCENT_AMBER).bg(Color::DarkGray),
        ));
    }

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    let focus_name = match state.focus {
        FocusPanel::Categories => "CATEGORIES",
        FocusPanel::Questions => "QUESTIONS",
        FocusPanel::Search => "SEARCH",
    };
    let hint = " Tab focus  / search  d delete  q quit ";

    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let right = focus_name.len() + 3;
    let mut remaining = (area.width as usize).saturating_sub(used + right);
    if remaining > hint.len() {
        remaining -= hint.len();
        parts.push(Span::styled(hint, Style::default().fg(Color::Gray).bg(Color::DarkGray)));
    }
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Theme::ACCENT_TEAL).bg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
