use crate::api::error::ApiError;
use crate::api::model::{CategoryId, QuestionId, QuestionPage, QuestionResults};
use crossterm::event::Event as CrosstermEvent;

/// Generation stamp carried by a request and echoed by its completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(pub u64);

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// `GET /questions?page=n` finished
    PageLoaded {
        token: RequestToken,
        page: u32,
        result: Result<QuestionPage, ApiError>,
    },

    /// `GET /categories/{id}/questions` finished
    CategoryLoaded {
        token: RequestToken,
        category: CategoryId,
        result: Result<QuestionResults, ApiError>,
    },

    /// `POST /questions` search finished
    SearchLoaded {
        token: RequestToken,
        term: String,
        result: Result<QuestionResults, ApiError>,
    },

    /// `DELETE /questions/{id}` finished
    QuestionDeleted {
        id: QuestionId,
        token: RequestToken,
        result: Result<QuestionId, ApiError>,
    },

    /// Tick for spinner refresh
    Tick,
}
