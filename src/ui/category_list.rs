use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

/// One row per category starting at `category_offset`, so row `n` under the
/// header is category `category_offset + n` (the mouse handler relies on this).
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Categories;
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .title(" Categories ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);

    let mut items: Vec<ListItem> = Vec::new();
    for (i, cat) in state
        .view
        .categories
        .iter()
        .enumerate()
        .skip(state.category_offset)
    {
        let is_current = state.view.current_category == Some(cat.id)
            && state.source == ListSource::Category(cat.id);
        let (icon, mut style) = if is_current {
            (" ▸ ", Theme::category_current())
        } else {
            ("   ", Theme::category_normal())
        };
        if focused && i == state.selected_category {
            style = style.patch(Theme::selected());
        }
        items.push(ListItem::new(Line::from(vec![
            Span::styled(icon, style),
            Span::styled(cat.kind.clone(), style),
        ])));
    }

    if items.is_empty() {
        items.push(ListItem::new(Span::styled(
            " —",
            Style::default().fg(Theme::TEXT_MUTED),
        )));
    }

    frame.render_widget(List::new(items).block(block), area);
}
