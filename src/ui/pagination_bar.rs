//! The row of clickable page markers under the question list.

use crate::app::pagination::PageMarker;
use crate::app::state::{AppState, ViewState};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

fn label(marker: &PageMarker) -> String {
    format!(" {} ", marker.number)
}

/// `(offset, width)` of every marker relative to the bar's left edge. One
/// leading space, one space between markers.
pub fn marker_columns(markers: &[PageMarker]) -> Vec<(u16, u16)> {
    let mut x = 1u16;
    markers
        .iter()
        .map(|m| {
            let w = label(m).len() as u16;
            let col = (x, w);
            x = x.saturating_add(w + 1);
            col
        })
        .collect()
}

/// Markers that can start inside a bar of `area`'s width. Each marker takes
/// at least four columns including its gap.
pub fn visible_markers(area: Rect, view: &ViewState) -> Vec<PageMarker> {
    view.page_markers(area.width as usize / 4 + 1)
}

/// The page number under `(column, row)`, if any.
pub fn marker_at(area: Rect, markers: &[PageMarker], column: u16, row: u16) -> Option<u32> {
    if row != area.y || area.height == 0 {
        return None;
    }
    marker_columns(markers)
        .into_iter()
        .zip(markers)
        .take_while(|((offset, _), _)| area.x.saturating_add(*offset) < area.right())
        .find(|((offset, width), _)| {
            let start = area.x + offset;
            let end = start.saturating_add(*width).min(area.right());
            column >= start && column < end
        })
        .map(|(_, m)| m.number)
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let markers = visible_markers(area, &state.view);
    if markers.is_empty() {
        if state.view.is_data_loaded {
            let empty = Span::styled(" no pages", Style::default().fg(Theme::TEXT_MUTED));
            frame.render_widget(Paragraph::new(Line::from(empty)), area);
        }
        return;
    }

    let mut spans = vec![Span::raw(" ")];
    for m in &markers {
        let style = if m.active {
            Theme::page_active()
        } else {
            Theme::page_inactive()
        };
        spans.push(Span::styled(label(m), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
