use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Server-assigned post identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(i64);

impl PostId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PostId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(PostId)
            .map_err(|_| DomainError::InvalidId(s.to_string()))
    }
}

/// Post entity - a titled, authored block of text.
///
/// Timestamps are the backend's wall-clock values; the client never sets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl Post {
    /// Date as shown in the list table, e.g. `2024.01.05`.
    pub fn short_date(&self) -> String {
        self.created_at.format("%Y.%m.%d").to_string()
    }

    /// Date and time as shown on the detail page, e.g. `January 5, 2024, 03:04 PM`.
    pub fn full_date(&self) -> String {
        format_full(self.created_at)
    }

    /// Date and time as shown on the combined board page.
    pub fn timestamp(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    /// Last edit time, when the backend reports one later than creation.
    pub fn edited_date(&self) -> Option<String> {
        self.updated_at
            .filter(|updated| *updated > self.created_at)
            .map(format_full)
    }
}

fn format_full(at: NaiveDateTime) -> String {
    at.format("%B %-d, %Y, %I:%M %p").to_string()
}

/// Validated create/update payload.
///
/// Every field is non-blank after trimming. Values are kept as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    title: String,
    content: String,
    author: String,
}

impl PostDraft {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let draft = Self {
            title: title.into(),
            content: content.into(),
            author: author.into(),
        };

        let blank: Vec<&str> = [
            ("title", &draft.title),
            ("content", &draft.content),
            ("author", &draft.author),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if !blank.is_empty() {
            return Err(DomainError::Validation(format!(
                "{} must not be blank",
                blank.join(", ")
            )));
        }

        Ok(draft)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author(&self) -> &str {
        &self.author
    }
}
