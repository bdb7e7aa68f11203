//! Named view actions and the reducers that merge responses into `ViewState`.
//!
//! `dispatch` turns a user intent into request `Action`s; the `reduce_*`
//! functions are pure merges of a successful response. Token checks and
//! error handling live in the handler.

use crate::api::model::{CategoryId, QuestionId, QuestionPage, QuestionResults};
use crate::app::action::Action;
use crate::app::pagination::QUESTIONS_PER_PAGE;
use crate::app::state::{AppState, ViewState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    /// Jump to page `n` of the unfiltered list. Active filters are dropped.
    PageSelected(u32),
    CategorySelected(CategoryId),
    SearchSubmitted(String),
    /// Deletion confirmed by the user.
    QuestionDeleted(QuestionId),
    /// Re-fetch the current page of the unfiltered list.
    Refresh,
}

pub fn dispatch(state: &mut AppState, action: ViewAction) -> Vec<Action> {
    let actions = match action {
        ViewAction::PageSelected(page) => {
            state.view.page = page;
            vec![Action::FetchPage {
                token: state.questions_gen.issue(),
                page,
            }]
        }
        ViewAction::Refresh => vec![Action::FetchPage {
            token: state.questions_gen.issue(),
            page: state.view.page,
        }],
        ViewAction::CategorySelected(category) => vec![Action::FetchCategory {
            token: state.questions_gen.issue(),
            category,
        }],
        ViewAction::SearchSubmitted(term) => vec![Action::Search {
            token: state.questions_gen.issue(),
            term,
        }],
        ViewAction::QuestionDeleted(id) => vec![Action::DeleteQuestion {
            id,
            token: state.questions_gen.current(),
        }],
    };
    state.pending_requests += actions.iter().filter(|a| a.is_request()).count();
    state.dirty = true;
    actions
}

/// A list page replaces every field of the view.
pub fn reduce_page(view: &mut ViewState, page: QuestionPage) {
    let mut questions = page.questions;
    questions.truncate(QUESTIONS_PER_PAGE);
    view.questions = questions;
    view.total_questions = page.total_questions;
    view.categories = page.categories;
    view.current_category = page.current_category.map(|c| c.id());
    view.is_data_loaded = true;
}

/// Category and search results leave `page` and `categories` alone.
pub fn reduce_filtered(view: &mut ViewState, results: QuestionResults) {
    view.questions = results.questions;
    view.total_questions = results.total_questions;
    view.current_category = results.current_category.map(|c| c.id());
}
