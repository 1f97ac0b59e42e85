//! Shelf analysis over an in-memory collection of bookworms.
//!
//! Every function here is pure: the input collection is only borrowed and
//! all intermediate tables are local to the call.

use crate::domain::model::{Book, Bookworm, Recommendation};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecommendOptions {
    /// 依 (author, title) 排序每位讀者的推薦清單
    pub sort: bool,
}

/// Registers every book on every shelf with its number of occurrences.
///
/// A bookworm owning the same book twice counts it twice.
pub fn count_books(bookworms: &[Bookworm]) -> HashMap<Book, usize> {
    let mut count = HashMap::new();

    for bookworm in bookworms {
        for book in &bookworm.books {
            *count.entry(book.clone()).or_insert(0) += 1;
        }
    }

    count
}

/// Returns the books appearing more than once across all shelves, sorted by
/// author then title.
pub fn find_common_books(bookworms: &[Bookworm]) -> Vec<Book> {
    let common_books = count_books(bookworms)
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(book, _)| book)
        .collect();

    sort_books(common_books)
}

/// For each bookworm, lists the books found on other shelves that are not on
/// their own, in the order they are encountered.
///
/// Other bookworms are skipped by name, so two entries sharing a name never
/// feed each other's list.
pub fn recommend_other_books(bookworms: &[Bookworm]) -> Vec<Recommendation> {
    recommend_other_books_with(bookworms, RecommendOptions::default())
}

pub fn recommend_other_books_with(
    bookworms: &[Bookworm],
    options: RecommendOptions,
) -> Vec<Recommendation> {
    bookworms
        .iter()
        .map(|target| {
            let books = recommend_for(target, bookworms);
            Recommendation {
                name: target.name.clone(),
                books: if options.sort { sort_books(books) } else { books },
            }
        })
        .collect()
}

fn recommend_for(target: &Bookworm, bookworms: &[Bookworm]) -> Vec<Book> {
    let mut seen: HashSet<&Book> = target.books.iter().collect();
    let mut recommended = Vec::new();

    for peer in bookworms.iter().filter(|peer| peer.name != target.name) {
        for book in &peer.books {
            if seen.insert(book) {
                recommended.push(book.clone());
            }
        }
    }

    recommended
}

/// Sorts books by author, then title, using ordinal string comparison.
pub fn sort_books(mut books: Vec<Book>) -> Vec<Book> {
    books.sort();
    books
}
