//! Request executor.
//!
//! Each request runs on its own tokio task and reports back to the event loop
//! through the `AppEvent` channel. Tasks never touch application state.

use crate::api::client::TriviaClient;
use crate::api::model::{CategoryId, QuestionId};
use crate::app::event::{AppEvent, RequestToken};
use tokio::sync::mpsc;
use tracing::warn;

pub struct ApiManager {
    client: TriviaClient,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl ApiManager {
    pub fn new(client: TriviaClient, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { client, event_tx }
    }

    pub fn fetch_page(&self, token: RequestToken, page: u32) {
        let client = self.client.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = client.list_questions(page).await;
            if let Err(ref e) = result {
                warn!(page, status = ?e.status(), error = %e, "question page request failed");
            }
            let _ = tx.send(AppEvent::PageLoaded {
                token,
                page,
                result,
            });
        });
    }

    pub fn fetch_category(&self, token: RequestToken, category: CategoryId) {
        let client = self.client.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = client.questions_by_category(category).await;
            if let Err(ref e) = result {
                warn!(category, status = ?e.status(), error = %e, "category request failed");
            }
            let _ = tx.send(AppEvent::CategoryLoaded {
                token,
                category,
                result,
            });
        });
    }

    pub fn search(&self, token: RequestToken, term: String) {
        let client = self.client.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = client.search_questions(&term).await;
            if let Err(ref e) = result {
                warn!(term = %term, status = ?e.status(), error = %e, "search request failed");
            }
            let _ = tx.send(AppEvent::SearchLoaded {
                token,
                term,
                result,
            });
        });
    }

    pub fn delete_question(&self, token: RequestToken, id: QuestionId) {
        let client = self.client.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = client.delete_question(id).await;
            if let Err(ref e) = result {
                warn!(id, status = ?e.status(), error = %e, "delete request failed");
            }
            let _ = tx.send(AppEvent::QuestionDeleted { id, token, result });
        });
    }
}
