//! Case-insensitive substring filtering over in-memory collections.
//!
//! This is the shared lookup primitive behind meeting search, the member
//! directory, and the portal-wide search tool. It is a stable linear filter:
//! no indexing, no ranking, no shared state. Callers supply an extractor that
//! selects which text fields of a record participate in matching.

/// Normalize a string for case-insensitive comparison.
///
/// Lowercases and strips leading/trailing whitespace. Idempotent: applying
/// it twice yields the same result as applying it once.
pub fn normalize_text(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Check whether a search query matches any of the provided text fields.
///
/// An empty or whitespace-only query matches everything ("no filter"
/// semantics). Otherwise the normalized query must appear as a contiguous
/// substring of at least one normalized field. Whitespace inside the query
/// stays significant; only its edges are trimmed.
pub fn matches_search<S: AsRef<str>>(query: &str, fields: &[S]) -> bool {
    if query.trim().is_empty() {
        return true; // Empty query matches everything
    }

    let normalized_query = normalize_text(query);

    fields
        .iter()
        .any(|field| normalize_text(field.as_ref()).contains(&normalized_query))
}

/// Filter a collection of items based on a search query.
///
/// Preserves the original relative order of matching items and never mutates
/// a record. When the query is empty or whitespace-only the input comes back
/// unchanged and the extractor is never invoked; otherwise the extractor runs
/// exactly once per item and items whose extracted fields contain no match
/// (including items that extract to no fields at all) are dropped.
///
/// # Example
///
/// ```
/// use portal_mcp_server::search::filter_by_search;
///
/// let usernames = vec!["Alice".to_string(), "bob".to_string(), "ALICIA".to_string()];
/// let found = filter_by_search(usernames, "ali", |name| vec![name.clone()]);
/// assert_eq!(found, vec!["Alice".to_string(), "ALICIA".to_string()]);
/// ```
pub fn filter_by_search<T, F>(mut items: Vec<T>, query: &str, mut extract: F) -> Vec<T>
where
    F: FnMut(&T) -> Vec<String>,
{
    if query.trim().is_empty() {
        return items;
    }

    items.retain(|item| matches_search(query, &extract(item)));
    items
}

/// Fallible variant of [`filter_by_search`] for extractors that can fail.
///
/// The first extractor error aborts the filter and propagates to the caller;
/// no partial result is returned. An empty or whitespace-only query returns
/// the input unchanged without invoking the extractor.
pub fn try_filter_by_search<T, F, E>(items: Vec<T>, query: &str, mut extract: F) -> Result<Vec<T>, E>
where
    F: FnMut(&T) -> Result<Vec<String>, E>,
{
    if query.trim().is_empty() {
        return Ok(items);
    }

    let mut filtered = Vec::with_capacity(items.len());
    for item in items {
        if matches_search(query, &extract(&item)?) {
            filtered.push(item);
        }
    }

    Ok(filtered)
}
