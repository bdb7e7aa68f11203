use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Search;
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .title(" Search ")
        .title_style(if focused {
            Theme::title()
        } else {
            Theme::border()
        })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let input_text = &state.search.text;

    if focused {
        let line = Line::from(vec![
            Span::styled("❯ ", Style::default().fg(Theme::ACCENT_TEAL)),
            Span::styled(input_text.as_str(), Theme::input_text()),
        ]);
        frame.render_widget(Paragraph::new(line), inner);

        // Chevron "❯ " is two cells wide
        let prompt_offset = 2u16;
        let typed = input_text[..state.search.cursor].width() as u16;
        let cursor_x = inner.x + prompt_offset + typed;
        frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
    } else if input_text.is_empty() {
        let hint = Span::styled("press / to search", Style::default().fg(Theme::TEXT_MUTED));
        frame.render_widget(Paragraph::new(Line::from(hint)), inner);
    } else {
        frame.render_widget(
            Paragraph::new(input_text.as_str()).style(Theme::input_text()),
            inner,
        );
    }
}
