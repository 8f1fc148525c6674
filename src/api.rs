//! Transport-free request/response contract for the title check endpoints.
//!
//! A host HTTP layer deserializes a [`CheckTitleRequest`], calls one of the
//! handlers below and serializes either the response or the [`ApiError`].
//! Field names match what the editor scripts already consume:
//!
//! ```json
//! { "is_duplicate": true, "message": "Duplicate title detected in: Post. You can still publish the post." }
//! ```

use matcher::{Corpus, TitleMatcher};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const FOUND_MESSAGE: &str = "Duplicate titles found:";
const NOT_FOUND_MESSAGE: &str = "No duplicate titles found.";

/// Body of the duplicate-check and matching-title requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckTitleRequest {
    #[serde(default)]
    pub title: Option<String>,
    /// Id of the item being edited, excluded from its own duplicate check.
    #[serde(default)]
    pub post_id: Option<u64>,
}

impl CheckTitleRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            post_id: None,
        }
    }

    pub fn with_post_id(mut self, post_id: u64) -> Self {
        self.post_id = Some(post_id);
        self
    }

    /// Trimmed title, or [`ApiError::EmptyTitle`] when missing or blank.
    fn required_title(&self) -> Result<&str, ApiError> {
        match self.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => Ok(title),
            _ => Err(ApiError::EmptyTitle),
        }
    }
}

/// Response shared by both POST endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DuplicateResponse {
    pub is_duplicate: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub titles: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_duplicate_message: Option<String>,
}

/// Validation failures surfaced to API callers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Title is empty.")]
    EmptyTitle,
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::EmptyTitle => "empty_title",
        }
    }

    /// HTTP status the host should answer with.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::EmptyTitle => 400,
        }
    }

    pub fn body(&self) -> ApiErrorBody {
        ApiErrorBody {
            code: self.code().to_string(),
            message: self.to_string(),
            status: self.status(),
        }
    }
}

/// Structured error payload: `{ "code", "message", "status" }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
    pub status: u16,
}

impl Serialize for ApiError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.body().serialize(serializer)
    }
}

/// Exact duplicate check for the block editor.
///
/// A hit carries the advisory message; a miss is just `is_duplicate: false`.
pub fn check_duplicate(
    matcher: &TitleMatcher,
    corpus: &Corpus,
    req: &CheckTitleRequest,
) -> Result<DuplicateResponse, ApiError> {
    let title = req.required_title()?;
    Ok(match matcher.check_duplicates(corpus, title, req.post_id) {
        Some(sources) => DuplicateResponse {
            is_duplicate: true,
            message: Some(sources.advisory_message()),
            ..DuplicateResponse::default()
        },
        None => DuplicateResponse::default(),
    })
}

/// Title suggestions for the editor side panel.
pub fn get_matching_titles(
    matcher: &TitleMatcher,
    corpus: &Corpus,
    req: &CheckTitleRequest,
) -> Result<DuplicateResponse, ApiError> {
    let title = req.required_title()?;
    let titles = matcher.matching_titles(corpus, title);

    Ok(DuplicateResponse {
        is_duplicate: !titles.is_empty(),
        message: Some(FOUND_MESSAGE.to_string()),
        titles: Some(titles),
        no_duplicate_message: Some(NOT_FOUND_MESSAGE.to_string()),
    })
}

/// Plain list of content titles containing the requested text.
pub fn check_titles(
    matcher: &TitleMatcher,
    corpus: &Corpus,
    req: &CheckTitleRequest,
) -> Result<Vec<String>, ApiError> {
    let title = req.required_title()?;
    Ok(matcher.titles_containing(corpus, title))
}
