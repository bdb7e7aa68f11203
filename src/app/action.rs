use crate::api::model::{CategoryId, QuestionId};
use crate::app::event::RequestToken;

/// Side effects requested by the handler, executed by the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    FetchPage { token: RequestToken, page: u32 },
    FetchCategory { token: RequestToken, category: CategoryId },
    Search { token: RequestToken, term: String },
    /// `token` is the list generation at the time of the delete; the
    /// follow-up refresh only runs if it is still current.
    DeleteQuestion { id: QuestionId, token: RequestToken },
    Quit,
}

impl Action {
    /// Whether executing this action puts a request in flight.
    pub fn is_request(&self) -> bool {
        !matches!(self, Action::Quit)
    }
}
