//! Search box filtering for the admin tables.

use crate::entities::{Book, User};

/// Something the admin search box can match against.
pub trait Searchable {
    /// Whether the record matches `query`, already trimmed and lowercased.
    fn matches_normalized(&self, query: &str) -> bool;

    /// Case-insensitive substring match. An empty query matches everything.
    fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty() || self.matches_normalized(&query)
    }
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

impl Searchable for Book {
    fn matches_normalized(&self, query: &str) -> bool {
        contains(self.title(), query) || contains(&self.author, query)
    }
}

impl Searchable for User {
    fn matches_normalized(&self, query: &str) -> bool {
        contains(&self.name, query) || contains(&self.email, query) || self.role.as_str() == query
    }
}

/// Records matching `query`, in their original order.
pub fn filter<'a, T: Searchable>(records: &'a [T], query: &str) -> Vec<&'a T> {
    records.iter().filter(|r| r.matches(query)).collect()
}
