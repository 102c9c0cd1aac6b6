// src/domain/search.rs
//! Free-text search shared by the change-log and content-type filters.
//!
//! Queries are trimmed first. One that trims to nothing places no constraint
//! on the result set. Any other query matches a record when at least one of
//! the record's search fields contains it, ignoring case. Absent fields never
//! match.

/// Records that expose a fixed, ordered set of text fields to `q` searches.
pub trait Searchable {
    fn search_fields(&self) -> Vec<Option<&str>>;
}

/// The trimmed query, or `None` when nothing is left to search for.
pub fn needle(query: &str) -> Option<&str> {
    Some(query.trim()).filter(|q| !q.is_empty())
}

/// Case-insensitive substring match of `query` against any of `fields`.
pub fn matches_any<'a, I>(query: &str, fields: I) -> bool
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let Some(needle) = needle(query) else {
        return true;
    };

    let needle = needle.to_lowercase();
    fields
        .into_iter()
        .flatten()
        .any(|value| value.to_lowercase().contains(&needle))
}

pub fn matches_record<R: Searchable>(query: Option<&str>, record: &R) -> bool {
    match query {
        Some(query) => matches_any(query, record.search_fields()),
        None => true,
    }
}
