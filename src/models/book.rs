//! Book model and the form/query types around it

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationErrors};

/// Book record as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
    pub year: Option<i32>,
}

/// Validated field values, ready to be written
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewBook {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    pub genre: Option<String>,
    #[validate(range(min = 0, max = 9999, message = "Year must be between 0 and 9999"))]
    pub year: Option<i32>,
}

/// Order in which validation messages are reported
const FIELD_ORDER: [&str; 4] = ["title", "author", "genre", "year"];

/// Raw values submitted by the new/edit forms.
///
/// Everything arrives as text; missing fields are empty strings so that a
/// form can always be redisplayed with whatever the user typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub year: String,
}

impl BookForm {
    /// Pre-populate a form from a stored record
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone().unwrap_or_default(),
            year: book.year.map(|y| y.to_string()).unwrap_or_default(),
        }
    }

    /// Convert the submitted text into a [`NewBook`], or the list of
    /// messages explaining why it can't be stored.
    pub fn to_new_book(&self) -> Result<NewBook, Vec<String>> {
        let mut year_error = None;
        let year = match self.year.trim() {
            "" => None,
            raw => match raw.parse::<i32>() {
                Ok(year) => Some(year),
                Err(_) => {
                    year_error = Some("Year must be a whole number".to_string());
                    None
                }
            },
        };

        let book = NewBook {
            title: self.title.clone(),
            author: self.author.clone(),
            genre: non_empty(&self.genre),
            year,
        };

        // Whitespace alone doesn't count as a title or author, but the stored
        // text stays exactly as typed.
        let checked = NewBook {
            title: book.title.trim().to_string(),
            author: book.author.trim().to_string(),
            ..book.clone()
        };

        let mut messages = match checked.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => ordered_messages(&errors),
        };
        messages.extend(year_error);

        if messages.is_empty() {
            Ok(book)
        } else {
            Err(messages)
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn ordered_messages(errors: &ValidationErrors) -> Vec<String> {
    let fields = errors.field_errors();
    let mut messages = Vec::new();

    for name in FIELD_ORDER {
        let Some(field_errors) = fields.get(name) else {
            continue;
        };
        for error in field_errors.iter() {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} is invalid", name));
            messages.push(message);
        }
    }

    messages
}

/// List/search query parameters.
///
/// `page` is kept as text: anything that isn't a number falls back to the
/// first page instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookQuery {
    pub page: Option<String>,
    pub search: Option<String>,
}

impl BookQuery {
    pub fn page_number(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(1)
    }
}

/// Record filter for counting and paging
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    /// Case-insensitive substring matched against title, author, genre and year
    pub contains: Option<String>,
}

impl BookFilter {
    pub fn all() -> Self {
        Self { contains: None }
    }

    pub fn matching(query: &str) -> Self {
        Self {
            contains: Some(query.to_string()),
        }
    }

    pub fn matches(&self, book: &Book) -> bool {
        let Some(query) = &self.contains else {
            return true;
        };
        let needle = query.to_lowercase();
        let contains = |value: &str| value.to_lowercase().contains(&needle);

        contains(&book.title)
            || contains(&book.author)
            || book.genre.as_deref().is_some_and(contains)
            || book.year.is_some_and(|y| contains(&y.to_string()))
    }

    /// `ILIKE` pattern for the filter text, with LIKE wildcards escaped
    pub fn like_pattern(&self) -> Option<String> {
        self.contains.as_ref().map(|query| {
            let mut pattern = String::with_capacity(query.len() + 2);
            pattern.push('%');
            for c in query.chars() {
                if matches!(c, '%' | '_' | '\\') {
                    pattern.push('\\');
                }
                pattern.push(c);
            }
            pattern.push('%');
            pattern
        })
    }
}
