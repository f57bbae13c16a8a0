//! Assertion macros for vitrine harnesses.

/// Assert the ids of a slice of records (or anything with an `id` field), in
/// order.
///
/// ```rust
/// assert_ids!(hits, ["CE-001", "CE-003"]);
/// ```
#[macro_export]
macro_rules! assert_ids {
    ($hits:expr, [$($id:expr),* $(,)?]) => {{
        let hits = $hits;
        let actual: Vec<&str> = hits.iter().map(|r| r.id.as_str()).collect();
        let expected: Vec<&str> = vec![$($id),*];
        pretty_assertions::assert_eq!(actual, expected, "result ids differ");
    }};
}
