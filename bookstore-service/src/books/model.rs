//! Book record and its validated field set

use serde::{Deserialize, Serialize};

use crate::ids::BookId;

/// A stored book.
///
/// `id` is assigned by the store on creation and never changes. `title` and
/// `author` are always non-empty on a stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_year: Option<i64>,
}

impl Book {
    /// Build a record from an id and a validated field set
    pub fn from_fields(id: BookId, fields: BookFields) -> Self {
        Self {
            id,
            title: fields.title,
            author: fields.author,
            description: fields.description,
            published_year: fields.published_year,
        }
    }

    /// Replace every mutable field wholesale; fields absent from `fields` are cleared
    pub fn replace_fields(&mut self, fields: BookFields) {
        self.title = fields.title;
        self.author = fields.author;
        self.description = fields.description;
        self.published_year = fields.published_year;
    }

    /// The mutable part of this record
    pub fn fields(&self) -> BookFields {
        BookFields {
            title: self.title.clone(),
            author: self.author.clone(),
            description: self.description.clone(),
            published_year: self.published_year,
        }
    }
}

/// The mutable fields of a book, already validated.
///
/// Only [`validate`](super::validation::validate) produces these from
/// request input, so a store may accept them as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFields {
    pub title: String,
    pub author: String,
    pub description: Option<String>,
    pub published_year: Option<i64>,
}

impl BookFields {
    /// Required fields only
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            description: None,
            published_year: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_published_year(mut self, year: i64) -> Self {
        self.published_year = Some(year);
        self
    }
}
