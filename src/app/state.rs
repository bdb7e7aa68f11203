use crate::api::model::{Category, CategoryId, Question, QuestionId};
use crate::app::event::RequestToken;
use crate::app::pagination::{self, PageMarker};
use crate::config::AppConfig;
use chrono::Local;
use ratatui::layout::Rect;
use std::collections::HashSet;

/// The question browser's data: what the last successful responses said.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub questions: Vec<Question>,
    pub page: u32,
    pub total_questions: usize,
    pub categories: Vec<Category>,
    pub current_category: Option<CategoryId>,
    pub is_data_loaded: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            questions: Vec::new(),
            page: 1,
            total_questions: 0,
            categories: Vec::new(),
            current_category: None,
            is_data_loaded: false,
        }
    }
}

impl ViewState {
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn category_for(&self, question: &Question) -> Option<&Category> {
        self.category(question.category)
    }

    /// At most `limit` markers, from page 1 up.
    pub fn page_markers(&self, limit: usize) -> Vec<PageMarker> {
        pagination::page_markers(self.total_questions, self.page, limit)
    }

    pub fn page_count(&self) -> u32 {
        pagination::page_count(self.total_questions)
    }
}

/// Monotonic request counter for one slice of state. Only the completion of
/// the most recently issued request may write the slice.
#[derive(Debug, Default)]
pub struct Generation {
    latest: u64,
}

impl Generation {
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }

    /// The most recently issued token, without issuing a new one.
    pub fn current(&self) -> RequestToken {
        RequestToken(self.latest)
    }
}

/// Where the displayed question list came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListSource {
    Page,
    Category(CategoryId),
    Search(String),
}

#[derive(Debug)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
    pub history: Vec<String>,
    pub history_index: Option<usize>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            history: Vec::new(),
            history_index: None,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Take the submitted text. Whitespace-only input still counts as a
    /// search; only exact repeats are kept out of history.
    pub fn take_text(&mut self) -> String {
        let text = std::mem::take(&mut self.text);
        self.cursor = 0;
        self.history_index = None;
        if !text.is_empty() && self.history.last() != Some(&text) {
            self.history.push(text.clone());
        }
        text
    }

    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let idx = match self.history_index {
            Some(i) if i > 0 => i - 1,
            Some(_) => return,
            None => self.history.len() - 1,
        };
        self.history_index = Some(idx);
        self.text = self.history[idx].clone();
        self.cursor = self.text.len();
    }

    pub fn history_down(&mut self) {
        match self.history_index {
            Some(i) if i + 1 < self.history.len() => {
                let idx = i + 1;
                self.history_index = Some(idx);
                self.text = self.history[idx].clone();
                self.cursor = self.text.len();
            }
            Some(_) => {
                self.history_index = None;
                self.text.clear();
                self.cursor = 0;
            }
            None => {}
        }
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Categories,
    Questions,
    Search,
}

pub struct AppState {
    pub config: AppConfig,
    pub view: ViewState,
    pub source: ListSource,
    pub questions_gen: Generation,
    pub pending_requests: usize,
    pub focus: FocusPanel,
    pub selected_category: usize,
    /// First category row drawn in the panel.
    pub category_offset: usize,
    pub selected_question: usize,
    pub revealed: HashSet<QuestionId>,
    pub search: InputState,
    /// Question awaiting delete confirmation.
    pub confirm_delete: Option<QuestionId>,
    /// Blocking alert; captures input until dismissed.
    pub alert: Option<String>,
    pub should_quit: bool,
    pub dirty: bool,
    pub viewport: Rect,
    pub last_updated: Option<String>,
    pub tick_count: u64,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            view: ViewState::default(),
            source: ListSource::Page,
            questions_gen: Generation::default(),
            pending_requests: 0,
            focus: FocusPanel::Questions,
            selected_category: 0,
            category_offset: 0,
            selected_question: 0,
            revealed: HashSet::new(),
            search: InputState::new(),
            confirm_delete: None,
            alert: None,
            should_quit: false,
            dirty: true,
            viewport: Rect::default(),
            last_updated: None,
            tick_count: 0,
        }
    }

    pub fn show_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
        self.dirty = true;
    }

    pub fn is_loading(&self) -> bool {
        self.pending_requests > 0
    }

    pub fn finish_request(&mut self) {
        self.pending_requests = self.pending_requests.saturating_sub(1);
        self.dirty = true;
    }

    pub fn mark_updated(&mut self) {
        self.last_updated = Some(
            Local::now()
                .format(&self.config.ui.timestamp_format)
                .to_string(),
        );
    }

    pub fn selected_question(&self) -> Option<&Question> {
        self.view.questions.get(self.selected_question)
    }

    pub fn selected_category(&self) -> Option<&Category> {
        self.view.categories.get(self.selected_category)
    }

    pub fn is_revealed(&self, id: QuestionId) -> bool {
        self.config.ui.show_answers || self.revealed.contains(&id)
    }

    pub fn toggle_reveal(&mut self, id: QuestionId) {
        if !self.revealed.remove(&id) {
            self.revealed.insert(id);
        }
        self.dirty = true;
    }

    /// Keep list selections inside the freshly loaded data.
    pub fn clamp_selection(&mut self) {
        self.selected_question = self
            .selected_question
            .min(self.view.questions.len().saturating_sub(1));
        self.selected_category = self
            .selected_category
            .min(self.view.categories.len().saturating_sub(1));
        self.category_offset = self.category_offset.min(self.selected_category);
    }

    /// Scroll the category panel just enough that the selection is one of
    /// its `rows` visible rows.
    pub fn scroll_categories_into_view(&mut self, rows: usize) {
        if rows == 0 {
            return;
        }
        if self.selected_category < self.category_offset {
            self.category_offset = self.selected_category;
        } else if self.selected_category >= self.category_offset + rows {
            self.category_offset = self.selected_category + 1 - rows;
        }
    }

    pub fn select_next_question(&mut self) {
        if self.selected_question + 1 < self.view.questions.len() {
            self.selected_question += 1;
        }
    }

    pub fn select_prev_question(&mut self) {
        self.selected_question = self.selected_question.saturating_sub(1);
    }

    pub fn select_next_category(&mut self) {
        if self.selected_category + 1 < self.view.categories.len() {
            self.selected_category += 1;
        }
    }

    pub fn select_prev_category(&mut self) {
        self.selected_category = self.selected_category.saturating_sub(1);
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Categories => FocusPanel::Questions,
            FocusPanel::Questions => FocusPanel::Search,
            FocusPanel::Search => FocusPanel::Categories,
        };
        self.dirty = true;
    }

    pub fn cycle_focus_back(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Categories => FocusPanel::Search,
            FocusPanel::Questions => FocusPanel::Categories,
            FocusPanel::Search => FocusPanel::Questions,
        };
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        if !self.view.is_data_loaded {
            return "Loading questions...".to_string();
        }
        let mut s = format!(
            "Page {}/{} | {} questions",
            self.view.page,
            self.view.page_count(),
            self.view.total_questions
        );
        match &self.source {
            ListSource::Page => {}
            ListSource::Category(id) => {
                let name = self
                    .view
                    .category(*id)
                    .map(|c| c.kind.clone())
                    .unwrap_or_else(|| format!("#{}", id));
                s.push_str(&format!(" | Category: {}", name));
            }
            ListSource::Search(term) => {
                s.push_str(&format!(" | Search: \"{}\"", term));
            }
        }
        if let Some(ref at) = self.last_updated {
            s.push_str(&format!(" | Updated {}", at));
        }
        s
    }
}
