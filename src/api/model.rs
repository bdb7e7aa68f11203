//! Wire types for the trivia backend.

use serde::{Deserialize, Deserializer, Serialize};

pub type QuestionId = i64;
pub type CategoryId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    #[serde(deserialize_with = "category_id")]
    pub category: CategoryId,
    pub difficulty: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "type")]
    pub kind: String,
}

/// `current_category` as sent by the backend: an object on the list
/// endpoint, a bare id on the category endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CurrentCategory {
    Category(Category),
    Id(#[serde(deserialize_with = "category_id")] CategoryId),
}

impl CurrentCategory {
    pub fn id(&self) -> CategoryId {
        match self {
            CurrentCategory::Category(c) => c.id,
            CurrentCategory::Id(id) => *id,
        }
    }
}

/// Response of `GET /questions?page=n`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub current_category: Option<CurrentCategory>,
}

/// Response of the search and by-category endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionResults {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    #[serde(default)]
    pub current_category: Option<CurrentCategory>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest<'a> {
    #[serde(rename = "searchTerm")]
    pub search_term: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub deleted_question: Option<QuestionId>,
}

/// Envelope every backend response carries. Error responses add a
/// `message`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Category ids arrive as integers or, from text-typed columns, as numeric
/// strings.
fn category_id<'de, D>(deserializer: D) -> Result<CategoryId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(CategoryId),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(id) => Ok(id),
        Raw::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid category id {:?}", s))),
    }
}
