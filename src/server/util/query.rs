use sea_orm::QuerySelect;

use crate::server::model::pagination::Pagination;

/// Applies an optional offset page to a query; `None` leaves it unpaged.
pub fn paginate<Q: QuerySelect>(query: Q, pagination: Option<Pagination>) -> Q {
    match pagination {
        Some(page) => query.offset(page.from).limit(page.size),
        None => query,
    }
}

/// Escape character used by `contains_pattern`; queries must declare it with `ESCAPE '!'`.
pub const LIKE_ESCAPE: char = '!';

/// Folds text to the form stored in the `search_*` columns.
///
/// Folding happens in Rust on both the stored text and the query, since SQLite's
/// `LOWER()`/`UPPER()` only handle ASCII.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Builds a `LIKE` pattern matching the case-folded `text` anywhere.
///
/// `%`, `_` and `!` in the input are escaped so they match literally with `ESCAPE '!'`.
pub fn contains_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in fold_case(text).chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
