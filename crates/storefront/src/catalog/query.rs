//! Pure catalog filtering: category selection and multi-word text search.

use freshcart_core::Product;

/// Sentinel category selector that matches every product.
///
/// The short form `"All"` is accepted as well; both are matched
/// case-insensitively. Named categories compare case-sensitively.
pub const ALL_ITEMS: &str = "All Items";

/// A catalog filter request.
///
/// A non-empty search phrase takes precedence over the category selector;
/// an absent category behaves like [`ALL_ITEMS`].
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    /// Category selector, compared exactly unless it is the sentinel.
    pub category: Option<String>,
    /// Free-text search phrase; whitespace-separated tokens must all match.
    pub search: Option<String>,
}

impl CatalogQuery {
    /// Query matching the whole catalog.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Query selecting a single category.
    #[must_use]
    pub fn category(name: impl Into<String>) -> Self {
        Self {
            category: Some(name.into()),
            search: None,
        }
    }

    /// Query searching product names for a phrase.
    #[must_use]
    pub fn search(phrase: impl Into<String>) -> Self {
        Self {
            category: None,
            search: Some(phrase.into()),
        }
    }
}

/// Filter `products` with `query`, preserving catalog order.
///
/// Search: the phrase is trimmed, lower-cased, and split on runs of
/// whitespace; a product matches only if **every** token is a substring of
/// its lower-cased name. A blank phrase falls back to category filtering.
#[must_use]
pub fn filter<'a>(products: &'a [Product], query: &CatalogQuery) -> Vec<&'a Product> {
    let phrase = query.search.as_deref().map(str::trim).unwrap_or_default();
    if !phrase.is_empty() {
        let needle = phrase.to_lowercase();
        let tokens: Vec<&str> = needle.split_whitespace().collect();
        return products
            .iter()
            .filter(|p| matches_all_tokens(&p.name, &tokens))
            .collect();
    }

    match query.category.as_deref() {
        None => products.iter().collect(),
        Some(selector) if is_all_items(selector) => products.iter().collect(),
        Some(selector) => products
            .iter()
            .filter(|p| p.category == selector)
            .collect(),
    }
}

fn is_all_items(selector: &str) -> bool {
    selector.eq_ignore_ascii_case(ALL_ITEMS) || selector.eq_ignore_ascii_case("All")
}

fn matches_all_tokens(name: &str, tokens: &[&str]) -> bool {
    let haystack = name.to_lowercase();
    tokens.iter().all(|token| haystack.contains(token))
}

#[cfg(test)]
mod tests {
    use freshcart_core::ProductId;

    use super::*;

    fn product(id: i32, name: &str, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price: freshcart_core::Price::ZERO,
            category: category.to_string(),
            image: String::new(),
        }
    }

    fn sample_catalog() -> Vec<Product> {
        vec![
            product(1, "Red Apples", "Fruits"),
            product(2, "Green Grapes", "Fruits"),
            product(3, "Milk", "Dairy"),
        ]
    }

    fn names<'a>(results: &'a [&'a Product]) -> Vec<&'a str> {
        results.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn all_items_returns_everything_in_order() {
        let catalog = sample_catalog();
        let results = filter(&catalog, &CatalogQuery::category("All Items"));
        assert_eq!(names(&results), vec!["Red Apples", "Green Grapes", "Milk"]);
    }

    #[test]
    fn sentinel_is_case_insensitive_and_accepts_short_form() {
        let catalog = sample_catalog();
        assert_eq!(filter(&catalog, &CatalogQuery::category("all items")).len(), 3);
        assert_eq!(filter(&catalog, &CatalogQuery::category("All")).len(), 3);
    }

    #[test]
    fn absent_category_matches_everything() {
        let catalog = sample_catalog();
        assert_eq!(filter(&catalog, &CatalogQuery::all()).len(), 3);
    }

    #[test]
    fn named_category_matches_exactly() {
        let catalog = sample_catalog();
        let results = filter(&catalog, &CatalogQuery::category("Dairy"));
        assert_eq!(names(&results), vec!["Milk"]);

        // Case-sensitive for named categories
        assert!(filter(&catalog, &CatalogQuery::category("dairy")).is_empty());
    }

    #[test]
    fn search_requires_every_token_to_match() {
        let catalog = sample_catalog();

        let results = filter(&catalog, &CatalogQuery::search("red apples"));
        assert_eq!(names(&results), vec!["Red Apples"]);

        // "green" matches Green Grapes, "milk" matches Milk, but no single
        // product matches both tokens
        assert!(filter(&catalog, &CatalogQuery::search("green milk")).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_substring_match() {
        let catalog = sample_catalog();
        let results = filter(&catalog, &CatalogQuery::search("GRAPE"));
        assert_eq!(names(&results), vec!["Green Grapes"]);
    }

    #[test]
    fn blank_search_falls_back_to_category() {
        let catalog = sample_catalog();
        let query = CatalogQuery {
            category: Some("Dairy".to_string()),
            search: Some("  ".to_string()),
        };
        assert_eq!(names(&filter(&catalog, &query)), vec!["Milk"]);
    }

    #[test]
    fn search_takes_precedence_over_category() {
        let catalog = sample_catalog();
        let query = CatalogQuery {
            category: Some("Dairy".to_string()),
            search: Some("apples".to_string()),
        };
        assert_eq!(names(&filter(&catalog, &query)), vec!["Red Apples"]);
    }

    #[test]
    fn empty_result_is_valid() {
        let catalog = sample_catalog();
        assert!(filter(&catalog, &CatalogQuery::category("Seafood")).is_empty());
        assert!(filter(&catalog, &CatalogQuery::search("zzz")).is_empty());
    }
}
