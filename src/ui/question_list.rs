use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use unicode_width::UnicodeWidthChar;

/// Cut `text` to at most `max` terminal cells, marking the cut with "…".
pub fn truncate_to_width(text: &str, max: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Questions;
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let title = if state.view.is_data_loaded {
        format!(" Questions ({}) ", state.view.total_questions)
    } else {
        " Questions ".to_string()
    };

    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);

    if !state.view.is_data_loaded || state.view.questions.is_empty() {
        let msg = if state.view.is_data_loaded {
            "  No questions found."
        } else {
            "  Loading questions..."
        };
        let p = Paragraph::new(Line::from(Span::styled(
            msg,
            Style::default().fg(Theme::TEXT_MUTED),
        )))
        .block(block);
        frame.render_widget(p, area);
        return;
    }

    // border (2) + indent (3)
    let text_width = (area.width as usize).saturating_sub(5);
    let mut items: Vec<ListItem> = Vec::new();

    for q in &state.view.questions {
        let category = state
            .view
            .category_for(q)
            .map(|c| c.kind.clone())
            .unwrap_or_else(|| format!("category #{}", q.category));

        let mut meta = category;
        if state.config.ui.show_difficulty {
            meta.push_str(&format!(" · difficulty {}", q.difficulty));
        }

        let mut lines = vec![
            Line::from(vec![
                Span::styled(" ? ", Style::default().fg(Theme::ACCENT_TEAL)),
                Span::styled(truncate_to_width(&q.question, text_width), Theme::question_text()),
            ]),
            Line::from(Span::styled(
                format!("   {}", truncate_to_width(&meta, text_width)),
                Theme::question_meta(),
            )),
        ];
        if state.is_revealed(q.id) {
            lines.push(Line::from(vec![
                Span::styled("   Answer: ", Theme::question_meta()),
                Span::styled(
                    truncate_to_width(&q.answer, text_width.saturating_sub(8)),
                    Theme::answer(),
                ),
            ]));
        }
        items.push(ListItem::new(lines));
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(if focused {
            Theme::selected()
        } else {
            Style::default()
        });
    let mut list_state = ListState::default().with_selected(Some(state.selected_question));
    frame.render_stateful_widget(list, area, &mut list_state);
}
