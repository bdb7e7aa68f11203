mod category_list;
pub mod layout;
mod modal;
pub mod pagination_bar;
mod question_list;
mod search_box;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    category_list::render(frame, app_layout.categories, state);
    search_box::render(frame, app_layout.search_box, state);
    question_list::render(frame, app_layout.questions, state);
    pagination_bar::render(frame, app_layout.pagination, state);
    status_bar::render(frame, app_layout.status_bar, state);
    modal::render(frame, state);
}
