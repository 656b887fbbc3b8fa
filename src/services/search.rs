//! Search Predicates
//!
//! Ready-made matchers a host can pick as the column set's search predicate.
//! Arguments are `(display_value, search_text)`.

use std::sync::Arc;

use crate::components::composite::data_table::column::SearchPredicate;

/// Case-insensitive substring match
pub fn contains_ignore_case() -> SearchPredicate {
    Arc::new(|value: &str, search_text: &str| {
        value.to_lowercase().contains(&search_text.to_lowercase())
    })
}

/// Case-sensitive substring match
pub fn contains() -> SearchPredicate {
    Arc::new(|value: &str, search_text: &str| value.contains(search_text))
}

/// Case-insensitive prefix match
pub fn starts_with_ignore_case() -> SearchPredicate {
    Arc::new(|value: &str, search_text: &str| {
        value.to_lowercase().starts_with(&search_text.to_lowercase())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        assert!(contains_ignore_case()("Hello World", "WORLD"));
        assert!(!contains()("Hello World", "WORLD"));
        assert!(contains()("Hello World", "World"));
        assert!(starts_with_ignore_case()("Hello", "he"));
        assert!(!starts_with_ignore_case()("Hello", "lo"));
    }
}
