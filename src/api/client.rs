//! Async HTTP client for the trivia backend.

use crate::api::error::ApiError;
use crate::api::model::{
    CategoryId, DeleteResponse, Envelope, QuestionId, QuestionPage, QuestionResults,
    SearchRequest,
};
use crate::config::ApiConfig;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct TriviaClient {
    http: reqwest::Client,
    base_url: String,
}

impl TriviaClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /questions?page={page}`
    pub async fn list_questions(&self, page: u32) -> Result<QuestionPage, ApiError> {
        let url = self.endpoint(&format!("/questions?page={}", page));
        debug!(%url, "fetching question page");
        self.send(self.http.get(url)).await
    }

    /// `POST /questions` with `{"searchTerm": term}`
    pub async fn search_questions(&self, term: &str) -> Result<QuestionResults, ApiError> {
        let url = self.endpoint("/questions");
        debug!(%url, term, "searching questions");
        self.send(self.http.post(url).json(&SearchRequest { search_term: term }))
            .await
    }

    /// `GET /categories/{id}/questions`
    pub async fn questions_by_category(
        &self,
        category: CategoryId,
    ) -> Result<QuestionResults, ApiError> {
        let url = self.endpoint(&format!("/categories/{}/questions", category));
        debug!(%url, "fetching questions by category");
        self.send(self.http.get(url)).await
    }

    /// `DELETE /questions/{id}`. Returns the id the server reports as deleted.
    pub async fn delete_question(&self, id: QuestionId) -> Result<QuestionId, ApiError> {
        let url = self.endpoint(&format!("/questions/{}", id));
        debug!(%url, "deleting question");
        let response: DeleteResponse = self.send(self.http.delete(url)).await?;
        Ok(response.deleted_question.unwrap_or(id))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        decode_response(status, &body)
    }
}

/// Classify a raw response: non-2xx, undecodable JSON and `"success": false`
/// are all failures.
fn decode_response<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_slice::<Envelope>(body)
            .ok()
            .and_then(|e| e.message)
            .unwrap_or_else(|| {
                let text = String::from_utf8_lossy(body).trim().to_string();
                if text.is_empty() {
                    "no message".to_string()
                } else {
                    text
                }
            });
        return Err(ApiError::Status { status, message });
    }

    let envelope: Envelope = serde_json::from_slice(body)?;
    if envelope.success == Some(false) {
        return Err(ApiError::Rejected(
            envelope
                .message
                .unwrap_or_else(|| "success: false".to_string()),
        ));
    }
    Ok(serde_json::from_slice(body)?)
}
