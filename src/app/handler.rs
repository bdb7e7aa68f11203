use crate::api::error::ApiError;
use crate::api::model::{QuestionId, QuestionPage, QuestionResults};
use crate::app::action::Action;
use crate::app::event::{AppEvent, RequestToken};
use crate::app::reducer::{self, ViewAction};
use crate::app::state::*;
use crate::ui::{layout, pagination_bar};
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use tracing::{debug, info};

/// Requests page 1 of the unfiltered list.
pub fn initial_load(state: &mut AppState) -> Vec<Action> {
    reducer::dispatch(state, ViewAction::PageSelected(1))
}

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::PageLoaded {
            token,
            page,
            result,
        } => {
            handle_page_loaded(state, token, page, result);
            vec![]
        }
        AppEvent::CategoryLoaded {
            token,
            category,
            result,
        } => {
            handle_filtered_loaded(state, token, ListSource::Category(category), result);
            vec![]
        }
        AppEvent::SearchLoaded {
            token,
            term,
            result,
        } => {
            handle_filtered_loaded(state, token, ListSource::Search(term), result);
            vec![]
        }
        AppEvent::QuestionDeleted { id, token, result } => {
            handle_question_deleted(state, id, token, result)
        }
        AppEvent::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            if state.is_loading() {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_page_loaded(
    state: &mut AppState,
    token: RequestToken,
    page: u32,
    result: Result<QuestionPage, ApiError>,
) {
    state.finish_request();
    if !state.questions_gen.is_current(token) {
        debug!(?token, page, "discarding stale page response");
        return;
    }
    match result {
        Ok(resp) => {
            reducer::reduce_page(&mut state.view, resp);
            state.source = ListSource::Page;
            after_load(state);
        }
        Err(e) => state.show_alert(e.user_message()),
    }
}

fn handle_filtered_loaded(
    state: &mut AppState,
    token: RequestToken,
    source: ListSource,
    result: Result<QuestionResults, ApiError>,
) {
    state.finish_request();
    if !state.questions_gen.is_current(token) {
        debug!(?token, ?source, "discarding stale filtered response");
        return;
    }
    match result {
        Ok(results) => {
            reducer::reduce_filtered(&mut state.view, results);
            state.source = source;
            state.selected_question = 0;
            after_load(state);
        }
        Err(e) => state.show_alert(e.user_message()),
    }
}

fn after_load(state: &mut AppState) {
    state.clamp_selection();
    sync_category_scroll(state);
    state.mark_updated();
    state.dirty = true;
}

fn handle_question_deleted(
    state: &mut AppState,
    id: QuestionId,
    token: RequestToken,
    result: Result<QuestionId, ApiError>,
) -> Vec<Action> {
    state.finish_request();
    match result {
        Ok(deleted) => {
            info!(id = deleted, "question deleted");
            state.revealed.remove(&id);
            // A list request issued after the delete owns the view now
            if state.questions_gen.is_current(token) {
                reducer::dispatch(state, ViewAction::Refresh)
            } else {
                debug!(id, ?token, "skipping refresh after delete");
                vec![]
            }
        }
        Err(e) => {
            state.show_alert(e.user_message());
            vec![]
        }
    }
}

/// Category rows that fit inside the panel's borders.
fn category_rows(state: &AppState) -> usize {
    let area = layout::compute_layout(state.viewport).categories;
    area.height.saturating_sub(2) as usize
}

fn sync_category_scroll(state: &mut AppState) {
    let rows = category_rows(state);
    state.scroll_categories_into_view(rows);
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(w, h) => {
            state.viewport = Rect::new(0, 0, w, h);
            sync_category_scroll(state);
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Popups capture all input while visible
    if state.alert.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            state.alert = None;
        }
        return vec![];
    }
    if let Some(id) = state.confirm_delete.take() {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                reducer::dispatch(state, ViewAction::QuestionDeleted(id))
            }
            _ => {
                debug!(id, "delete cancelled");
                vec![]
            }
        };
    }

    match key.code {
        KeyCode::Tab => {
            state.cycle_focus();
            return vec![];
        }
        KeyCode::BackTab => {
            state.cycle_focus_back();
            return vec![];
        }
        _ => {}
    }

    match state.focus {
        FocusPanel::Search => handle_search_key(state, key),
        FocusPanel::Categories => handle_category_key(state, key),
        FocusPanel::Questions => handle_question_key(state, key),
    }
}

/// Bindings shared by the two list panels.
fn handle_list_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char('q') => vec![Action::Quit],
        KeyCode::Char('r') => reducer::dispatch(state, ViewAction::Refresh),
        KeyCode::Char('/') => {
            state.focus = FocusPanel::Search;
            vec![]
        }
        KeyCode::Left | KeyCode::PageUp => {
            if state.view.page > 1 {
                let page = state.view.page - 1;
                reducer::dispatch(state, ViewAction::PageSelected(page))
            } else {
                vec![]
            }
        }
        KeyCode::Right | KeyCode::PageDown => {
            if state.view.page < state.view.page_count() {
                let page = state.view.page + 1;
                reducer::dispatch(state, ViewAction::PageSelected(page))
            } else {
                vec![]
            }
        }
        _ => vec![],
    }
}

fn handle_question_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.select_prev_question();
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.select_next_question();
            vec![]
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(id) = state.selected_question().map(|q| q.id) {
                state.toggle_reveal(id);
            }
            vec![]
        }
        KeyCode::Char('d') | KeyCode::Delete => match state.selected_question().map(|q| q.id) {
            Some(id) => request_delete(state, id),
            None => vec![],
        },
        _ => handle_list_key(state, key),
    }
}

fn handle_category_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.select_prev_category();
            sync_category_scroll(state);
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.select_next_category();
            sync_category_scroll(state);
            vec![]
        }
        KeyCode::Enter => match state.selected_category().map(|c| c.id) {
            Some(id) => reducer::dispatch(state, ViewAction::CategorySelected(id)),
            None => vec![],
        },
        _ => handle_list_key(state, key),
    }
}

fn handle_search_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter => {
            let term = state.search.take_text();
            state.focus = FocusPanel::Questions;
            reducer::dispatch(state, ViewAction::SearchSubmitted(term))
        }
        KeyCode::Esc => {
            state.focus = FocusPanel::Questions;
            vec![]
        }
        KeyCode::Char('w') if ctrl => {
            state.search.delete_word_back();
            vec![]
        }
        KeyCode::Char('a') if ctrl => {
            state.search.move_home();
            vec![]
        }
        KeyCode::Char('e') if ctrl => {
            state.search.move_end();
            vec![]
        }
        KeyCode::Char(c) if !ctrl => {
            state.search.insert_char(c);
            vec![]
        }
        KeyCode::Backspace => {
            state.search.delete_back();
            vec![]
        }
        KeyCode::Delete => {
            state.search.delete_forward();
            vec![]
        }
        KeyCode::Left => {
            state.search.move_left();
            vec![]
        }
        KeyCode::Right => {
            state.search.move_right();
            vec![]
        }
        KeyCode::Home => {
            state.search.move_home();
            vec![]
        }
        KeyCode::End => {
            state.search.move_end();
            vec![]
        }
        KeyCode::Up => {
            state.search.history_up();
            vec![]
        }
        KeyCode::Down => {
            state.search.history_down();
            vec![]
        }
        _ => vec![],
    }
}

/// The per-question action dispatcher; deletion is the only action.
fn request_delete(state: &mut AppState, id: QuestionId) -> Vec<Action> {
    if state.config.behavior.confirm_delete {
        state.confirm_delete = Some(id);
        vec![]
    } else {
        reducer::dispatch(state, ViewAction::QuestionDeleted(id))
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if state.alert.is_some() || state.confirm_delete.is_some() {
        return vec![];
    }
    let app_layout = layout::compute_layout(state.viewport);
    let (col, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            state.dirty = true;

            let markers = pagination_bar::visible_markers(app_layout.pagination, &state.view);
            if let Some(page) = pagination_bar::marker_at(app_layout.pagination, &markers, col, row)
            {
                return reducer::dispatch(state, ViewAction::PageSelected(page));
            }

            let cats = app_layout.categories;
            if contains(cats, col, row) {
                state.focus = FocusPanel::Categories;
                // Header row doubles as "show all"
                if row == cats.y {
                    return reducer::dispatch(state, ViewAction::Refresh);
                }
                let index = state.category_offset + (row - cats.y - 1) as usize;
                if row + 1 < cats.bottom() && index < state.view.categories.len() {
                    state.selected_category = index;
                    let id = state.view.categories[index].id;
                    return reducer::dispatch(state, ViewAction::CategorySelected(id));
                }
                return vec![];
            }

            if contains(app_layout.search_box, col, row) {
                state.focus = FocusPanel::Search;
            } else if contains(app_layout.questions, col, row) {
                state.focus = FocusPanel::Questions;
            }
            vec![]
        }
        MouseEventKind::ScrollUp if contains(app_layout.questions, col, row) => {
            state.select_prev_question();
            state.dirty = true;
            vec![]
        }
        MouseEventKind::ScrollDown if contains(app_layout.questions, col, row) => {
            state.select_next_question();
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn contains(area: Rect, col: u16, row: u16) -> bool {
    col >= area.x && col < area.right() && row >= area.y && row < area.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::model::{Category, CurrentCategory, Question};
    use crate::config::AppConfig;

    fn question(id: i64, category: i64) -> Question {
        Question {
            id,
            question: format!("Question {id}"),
            answer: format!("Answer {id}"),
            category,
            difficulty: 2,
        }
    }

    fn categories() -> Vec<Category> {
        vec![
            Category { id: 1, kind: "Science".into() },
            Category { id: 2, kind: "Art".into() },
            Category { id: 3, kind: "Geography".into() },
        ]
    }

    fn page_response(total: usize) -> QuestionPage {
        QuestionPage {
            questions: (1..=total.min(10) as i64).map(|i| question(i, 1)).collect(),
            total_questions: total,
            categories: categories(),
            current_category: Some(CurrentCategory::Category(Category {
                id: 1,
                kind: "Science".into(),
            })),
        }
    }

    fn network_error() -> ApiError {
        ApiError::Status {
            status: 500,
            message: "Internal Server Error.".into(),
        }
    }

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn click(state: &mut AppState, column: u16, row: u16) -> Vec<Action> {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            })),
        )
    }

    fn token_of(action: &Action) -> RequestToken {
        match action {
            Action::FetchPage { token, .. }
            | Action::FetchCategory { token, .. }
            | Action::Search { token, .. } => *token,
            other => panic!("no token on {other:?}"),
        }
    }

    /// State after the initial load of a 25-question list.
    fn loaded_state() -> AppState {
        let mut state = AppState::new(AppConfig::default());
        state.viewport = Rect::new(0, 0, 120, 40);
        let actions = initial_load(&mut state);
        handle_event(
            &mut state,
            AppEvent::PageLoaded {
                token: token_of(&actions[0]),
                page: 1,
                result: Ok(page_response(25)),
            },
        );
        state
    }

    #[test]
    fn test_initial_load_requests_first_page() {
        let mut state = AppState::new(AppConfig::default());
        let actions = initial_load(&mut state);
        assert!(matches!(actions.as_slice(), [Action::FetchPage { page: 1, .. }]));
        assert!(state.is_loading());
    }

    #[test]
    fn test_page_loaded_populates_view() {
        let state = loaded_state();
        assert!(state.view.is_data_loaded);
        assert_eq!(state.view.questions.len(), 10);
        assert_eq!(state.view.total_questions, 25);
        assert_eq!(state.view.categories.len(), 3);
        assert_eq!(state.view.current_category, Some(1));
        assert!(!state.is_loading());
        assert!(state.last_updated.is_some());
    }

    #[test]
    fn test_failed_load_alerts_once_and_keeps_state() {
        let mut state = loaded_state();
        let before = state.view.clone();
        let actions = press(&mut state, KeyCode::Char('r'));
        handle_event(
            &mut state,
            AppEvent::PageLoaded {
                token: token_of(&actions[0]),
                page: 1,
                result: Err(network_error()),
            },
        );
        assert_eq!(state.view, before);
        assert_eq!(
            state.alert.as_deref(),
            Some("Unable to load questions. Please try your request again")
        );

        // The alert swallows input until dismissed
        assert!(press(&mut state, KeyCode::Char('r')).is_empty());
        press(&mut state, KeyCode::Enter);
        assert!(state.alert.is_none());
    }

    #[test]
    fn test_failed_category_load_alerts_and_keeps_state() {
        let mut state = loaded_state();
        let before = state.view.clone();
        let actions = reducer::dispatch(&mut state, ViewAction::CategorySelected(3));
        handle_event(
            &mut state,
            AppEvent::CategoryLoaded {
                token: token_of(&actions[0]),
                category: 3,
                result: Err(network_error()),
            },
        );
        assert_eq!(state.view, before);
        assert_eq!(state.source, ListSource::Page);
        assert_eq!(
            state.alert.as_deref(),
            Some("Unable to load questions. Please try your request again")
        );
        assert!(!state.is_loading());
    }

    #[test]
    fn test_failed_search_alerts_and_keeps_state() {
        let mut state = loaded_state();
        state.source = ListSource::Category(1);
        let before = state.view.clone();
        let actions = reducer::dispatch(&mut state, ViewAction::SearchSubmitted("title".into()));
        handle_event(
            &mut state,
            AppEvent::SearchLoaded {
                token: token_of(&actions[0]),
                term: "title".into(),
                result: Err(ApiError::Rejected("unprocessable".into())),
            },
        );
        assert_eq!(state.view, before);
        assert_eq!(state.source, ListSource::Category(1));
        assert!(state.alert.is_some());
    }

    #[test]
    fn test_clicking_page_marker_two() {
        let mut state = loaded_state();
        let area = layout::compute_layout(state.viewport).pagination;
        let markers = pagination_bar::visible_markers(area, &state.view);
        assert_eq!(
            markers.iter().map(|m| m.number).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );

        let (x, w) = pagination_bar::marker_columns(&markers)[1];
        let actions = click(&mut state, area.x + x + w / 2, area.y);

        assert_eq!(state.view.page, 2);
        assert!(matches!(actions.as_slice(), [Action::FetchPage { page: 2, .. }]));
    }

    #[test]
    fn test_arrow_keys_stay_within_pages() {
        let mut state = loaded_state();
        assert!(press(&mut state, KeyCode::Left).is_empty());
        let actions = press(&mut state, KeyCode::Right);
        assert!(matches!(actions.as_slice(), [Action::FetchPage { page: 2, .. }]));
        state.view.page = 3;
        assert!(press(&mut state, KeyCode::Right).is_empty());
    }

    #[test]
    fn test_category_click_fetches_and_keeps_categories() {
        let mut state = loaded_state();
        let cats = layout::compute_layout(state.viewport).categories;
        // third row under the header is category id 3
        let actions = click(&mut state, cats.x + 2, cats.y + 3);
        assert_eq!(actions.len(), 1);
        let Action::FetchCategory { token, category } = actions[0] else {
            panic!("unexpected {actions:?}");
        };
        assert_eq!(category, 3);

        handle_event(
            &mut state,
            AppEvent::CategoryLoaded {
                token,
                category,
                result: Ok(QuestionResults {
                    questions: vec![question(13, 3), question(14, 3)],
                    total_questions: 2,
                    current_category: Some(CurrentCategory::Id(3)),
                }),
            },
        );
        assert_eq!(state.view.questions.len(), 2);
        assert_eq!(state.view.total_questions, 2);
        assert_eq!(state.view.current_category, Some(3));
        assert_eq!(state.view.categories, categories());
        assert_eq!(state.view.page, 1);
        assert_eq!(state.source, ListSource::Category(3));
    }

    #[test]
    fn test_category_header_click_refreshes() {
        let mut state = loaded_state();
        let cats = layout::compute_layout(state.viewport).categories;
        let actions = click(&mut state, cats.x + 3, cats.y);
        assert!(matches!(actions.as_slice(), [Action::FetchPage { page: 1, .. }]));
    }

    #[test]
    fn test_category_panel_scrolls_with_selection() {
        let mut state = loaded_state();
        // Two category rows fit at this height
        handle_event(&mut state, AppEvent::Terminal(CEvent::Resize(120, 8)));
        let cats = layout::compute_layout(state.viewport).categories;
        assert_eq!(cats.height, 4);

        press(&mut state, KeyCode::BackTab);
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Down);
        assert_eq!(state.selected_category, 2);
        assert_eq!(state.category_offset, 1);

        // First visible row is now "Art"
        let actions = click(&mut state, cats.x + 2, cats.y + 1);
        assert!(matches!(
            actions.as_slice(),
            [Action::FetchCategory { category: 2, .. }]
        ));
        assert_eq!(state.selected_category, 1);
        assert_eq!(state.category_offset, 1);
    }

    #[test]
    fn test_category_keyboard_selection() {
        let mut state = loaded_state();
        press(&mut state, KeyCode::BackTab);
        assert_eq!(state.focus, FocusPanel::Categories);
        press(&mut state, KeyCode::Down);
        let actions = press(&mut state, KeyCode::Enter);
        assert!(matches!(
            actions.as_slice(),
            [Action::FetchCategory { category: 2, .. }]
        ));
    }

    #[test]
    fn test_search_submit() {
        let mut state = loaded_state();
        press(&mut state, KeyCode::Char('/'));
        assert_eq!(state.focus, FocusPanel::Search);
        for c in "title".chars() {
            press(&mut state, KeyCode::Char(c));
        }
        let actions = press(&mut state, KeyCode::Enter);
        assert_eq!(actions.len(), 1);
        assert!(matches!(&actions[0], Action::Search { term, .. } if term == "title"));
        assert_eq!(state.focus, FocusPanel::Questions);
        assert!(state.search.text.is_empty());
    }

    #[test]
    fn test_search_typing_q_does_not_quit() {
        let mut state = loaded_state();
        state.focus = FocusPanel::Search;
        assert!(press(&mut state, KeyCode::Char('q')).is_empty());
        assert_eq!(state.search.text, "q");
    }

    #[test]
    fn test_search_results_leave_page_stale() {
        let mut state = loaded_state();
        state.view.page = 3;
        let actions = reducer::dispatch(&mut state, ViewAction::SearchSubmitted("title".into()));
        handle_event(
            &mut state,
            AppEvent::SearchLoaded {
                token: token_of(&actions[0]),
                term: "title".into(),
                result: Ok(QuestionResults {
                    questions: vec![question(5, 4)],
                    total_questions: 1,
                    current_category: None,
                }),
            },
        );
        assert_eq!(state.view.page, 3);
        assert_eq!(state.view.current_category, None);
        assert_eq!(state.view.categories.len(), 3);
        assert_eq!(state.source, ListSource::Search("title".into()));
    }

    #[test]
    fn test_paging_drops_filter() {
        let mut state = loaded_state();
        state.source = ListSource::Category(3);
        let actions = press(&mut state, KeyCode::Right);
        handle_event(
            &mut state,
            AppEvent::PageLoaded {
                token: token_of(&actions[0]),
                page: 2,
                result: Ok(page_response(25)),
            },
        );
        assert_eq!(state.source, ListSource::Page);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = loaded_state();
        let slow = reducer::dispatch(&mut state, ViewAction::CategorySelected(2));
        let fast = reducer::dispatch(&mut state, ViewAction::SearchSubmitted("river".into()));

        handle_event(
            &mut state,
            AppEvent::SearchLoaded {
                token: token_of(&fast[0]),
                term: "river".into(),
                result: Ok(QuestionResults {
                    questions: vec![question(20, 3)],
                    total_questions: 1,
                    current_category: None,
                }),
            },
        );
        let after_fast = state.view.clone();

        // Older category response arrives last and must not win
        handle_event(
            &mut state,
            AppEvent::CategoryLoaded {
                token: token_of(&slow[0]),
                category: 2,
                result: Ok(QuestionResults {
                    questions: vec![question(30, 2), question(31, 2)],
                    total_questions: 2,
                    current_category: Some(CurrentCategory::Id(2)),
                }),
            },
        );
        assert_eq!(state.view, after_fast);
        assert_eq!(state.source, ListSource::Search("river".into()));
        assert!(!state.is_loading());

        // A stale failure raises no alert either
        let stale = reducer::dispatch(&mut state, ViewAction::Refresh);
        reducer::dispatch(&mut state, ViewAction::Refresh);
        handle_event(
            &mut state,
            AppEvent::PageLoaded {
                token: token_of(&stale[0]),
                page: 1,
                result: Err(network_error()),
            },
        );
        assert!(state.alert.is_none());
    }

    #[test]
    fn test_delete_confirmed_then_refetches_current_page() {
        let mut state = loaded_state();
        state.view.page = 2;
        state.selected_question = 6; // question id 7

        assert!(press(&mut state, KeyCode::Char('d')).is_empty());
        assert_eq!(state.confirm_delete, Some(7));

        let actions = press(&mut state, KeyCode::Char('y'));
        let token = state.questions_gen.current();
        assert_eq!(actions, vec![Action::DeleteQuestion { id: 7, token }]);
        assert!(state.confirm_delete.is_none());

        let follow_up = handle_event(
            &mut state,
            AppEvent::QuestionDeleted {
                id: 7,
                token,
                result: Ok(7),
            },
        );
        assert!(matches!(follow_up.as_slice(), [Action::FetchPage { page: 2, .. }]));
    }

    #[test]
    fn test_delete_does_not_override_later_category_filter() {
        let mut state = loaded_state();
        state.config.behavior.confirm_delete = false;
        let delete = press(&mut state, KeyCode::Delete);
        let Action::DeleteQuestion { id, token } = delete[0] else {
            panic!("unexpected {delete:?}");
        };
        let category = reducer::dispatch(&mut state, ViewAction::CategorySelected(3));

        // Delete finishes first; the newer category request must keep the view
        let follow_up = handle_event(
            &mut state,
            AppEvent::QuestionDeleted {
                id,
                token,
                result: Ok(id),
            },
        );
        assert!(follow_up.is_empty());

        handle_event(
            &mut state,
            AppEvent::CategoryLoaded {
                token: token_of(&category[0]),
                category: 3,
                result: Ok(QuestionResults {
                    questions: vec![question(13, 3)],
                    total_questions: 1,
                    current_category: Some(CurrentCategory::Id(3)),
                }),
            },
        );
        assert_eq!(state.source, ListSource::Category(3));
        assert_eq!(state.view.current_category, Some(3));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_delete_cancelled_issues_nothing() {
        let mut state = loaded_state();
        state.selected_question = 6;
        press(&mut state, KeyCode::Char('d'));
        assert!(press(&mut state, KeyCode::Char('n')).is_empty());
        assert!(state.confirm_delete.is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_delete_without_confirmation_when_disabled() {
        let mut state = loaded_state();
        state.config.behavior.confirm_delete = false;
        let actions = press(&mut state, KeyCode::Delete);
        assert_eq!(
            actions,
            vec![Action::DeleteQuestion {
                id: 1,
                token: state.questions_gen.current(),
            }]
        );
    }

    #[test]
    fn test_failed_delete_alerts_without_refetch() {
        let mut state = loaded_state();
        let token = state.questions_gen.current();
        let actions = handle_event(
            &mut state,
            AppEvent::QuestionDeleted {
                id: 7,
                token,
                result: Err(ApiError::Status {
                    status: 404,
                    message: "Question not found.".into(),
                }),
            },
        );
        assert!(actions.is_empty());
        assert!(state.alert.is_some());
    }

    #[test]
    fn test_reveal_answer_toggle() {
        let mut state = loaded_state();
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Enter);
        assert!(state.is_revealed(2));
        press(&mut state, KeyCode::Char(' '));
        assert!(!state.is_revealed(2));
    }

    #[test]
    fn test_quit_keys() {
        let mut state = loaded_state();
        assert_eq!(press(&mut state, KeyCode::Char('q')), vec![Action::Quit]);
        let ctrl_c = handle_event(
            &mut state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert_eq!(ctrl_c, vec![Action::Quit]);
    }

    #[test]
    fn test_resize_updates_viewport() {
        let mut state = AppState::new(AppConfig::default());
        handle_event(&mut state, AppEvent::Terminal(CEvent::Resize(80, 24)));
        assert_eq!(state.viewport, Rect::new(0, 0, 80, 24));
    }
}
