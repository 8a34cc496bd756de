use chrono::{DateTime, Utc};

use crate::dates;

/// A user review attached to a movie or TV series.
///
/// `created_at` is kept exactly as sent by the API; use
/// [`Review::created_at_date`] for the parsed timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Review {
    pub id: String,
    pub author: String,
    pub content: String,
    pub created_at: String,
}

impl Review {
    pub fn new(
        id: impl Into<String>,
        author: impl Into<String>,
        content: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            author: author.into(),
            content: content.into(),
            created_at: created_at.into(),
        }
    }

    /// Creation time, or `None` if `created_at` does not match the TMDB
    /// timestamp format.
    pub fn created_at_date(&self) -> Option<DateTime<Utc>> {
        self.try_created_at().ok()
    }

    pub fn try_created_at(&self) -> crate::Result<DateTime<Utc>> {
        dates::parse_timestamp(&self.created_at)
    }
}
