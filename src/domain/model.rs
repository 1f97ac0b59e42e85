use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// 書架上的一本書，以 (author, title) 作為唯一識別
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    pub author: String,
    pub title: String,
}

impl Book {
    pub fn new(author: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
        }
    }
}

// Ordinal comparison: author first, then title.
impl Ord for Book {
    fn cmp(&self, other: &Self) -> Ordering {
        self.author
            .cmp(&other.author)
            .then_with(|| self.title.cmp(&other.title))
    }
}

impl PartialOrd for Book {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 一位書蟲與其書架
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookworm {
    pub name: String,
    pub books: Vec<Book>,
}

impl Bookworm {
    pub fn new(name: impl Into<String>, books: Vec<Book>) -> Self {
        Self {
            name: name.into(),
            books,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    pub books: Vec<Book>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub reader_count: usize,
    pub book_occurrences: usize,
    pub common_books: Vec<Book>,
    pub recommendations: Vec<Recommendation>,
}

/// load 階段的結果：寫入檔案或交回呼叫端輸出
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Written(String),
    Rendered(String),
}
