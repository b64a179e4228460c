use serde::{Deserialize, Serialize};

use crate::domain::BookId;

/// Editable part of a book, sent on insert and update.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BookFields {
    pub title: String,
    pub author: String,
}

impl BookFields {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }
}

pub fn list_books_route() -> &'static str {
    "/"
}

pub fn insert_book_route() -> &'static str {
    "/insertItem"
}

pub fn update_book_route(id: &BookId) -> String {
    format!("/updateItem/{id}")
}

pub fn delete_book_route(id: &BookId) -> String {
    format!("/deleteItem/{id}")
}
