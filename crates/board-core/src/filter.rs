//! Task Filter
//!
//! Case-insensitive substring search over task text.

/// Whether `text` should stay visible for `query`. The empty query matches everything.
pub fn matches(text: &str, query: &str) -> bool {
    text.to_lowercase().contains(&query.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_case_insensitive() {
        assert!(matches("Buy Milk", "milk"));
        assert!(matches("buy milk", "MILK"));
        assert!(!matches("buy milk", "bread"));
        assert!(matches("anything", ""));
    }
}
