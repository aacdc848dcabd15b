//! Category labels used to organize the catalog.

/// Every category the storefront offers, in display order.
pub const CATEGORIES: [&str; 8] = [
    "Fiction",
    "Non-Fiction",
    "Academic",
    "Children",
    "Comics",
    "Exam Prep",
    "Science",
    "Business",
];

/// Check if a label is one of the storefront categories.
///
/// Matching is exact; labels are compared as stored on items.
pub fn is_known_category(label: &str) -> bool {
    CATEGORIES.contains(&label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories() {
        assert!(is_known_category("Fiction"));
        assert!(is_known_category("Exam Prep"));
        assert!(!is_known_category("fiction"));
        assert!(!is_known_category("Poetry"));
    }
}
