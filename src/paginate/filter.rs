//! Single-predicate filtering for `filtered.<name>.<key>.<value>` references.

use crate::content::Item;
use crate::provider::DataProvider;
use serde_json::Value;

/// Keep the provider's items whose `key` metadata matches `raw_value`.
///
/// `"true"`/`"false"` compare as the provider's truthy/falsy strings. A
/// string entry must equal the value exactly; an array entry must contain
/// it. Numbers, objects and absent entries never match. Order is preserved.
pub fn filter(provider: &dyn DataProvider, key: &str, raw_value: &str) -> Vec<Item> {
    let expected = match raw_value {
        "true" => provider.truthy(),
        "false" => provider.falsy(),
        other => other,
    };

    provider
        .provide_data()
        .into_iter()
        .filter(|item| match item.meta(key) {
            Some(Value::Array(values)) => values
                .iter()
                .any(|v| scalar_str(provider, v) == Some(expected)),
            Some(value) => scalar_str(provider, value) == Some(expected),
            None => false,
        })
        .collect()
}

/// String form of a comparable scalar; numerics are not coerced.
fn scalar_str<'a>(provider: &'a dyn DataProvider, value: &'a Value) -> Option<&'a str> {
    match value {
        Value::String(s) => Some(s),
        Value::Bool(true) => Some(provider.truthy()),
        Value::Bool(false) => Some(provider.falsy()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::StaticProvider;
    use serde_json::json;

    fn titles(items: &[Item]) -> Vec<&str> {
        items
            .iter()
            .filter_map(|item| item.meta("title").and_then(Value::as_str))
            .collect()
    }

    fn posts() -> StaticProvider {
        StaticProvider::new(
            [
                json!({ "title": "A", "category": true, "tags": ["rust", "web"] }),
                json!({ "title": "B", "category": "news", "tags": ["Rust"] }),
                json!({ "title": "C", "tags": "rust" }),
                json!({ "title": "D", "category": false, "tags": { "rust": true } }),
                json!({ "title": "ignored", "meta": { "title": "E", "category": 1, "tags": ["rust"] } }),
                json!("not an object"),
            ]
            .map(Item::new),
        )
    }

    #[test]
    fn test_filter_true_sentinel() {
        let items = filter(&posts(), "category", "true");
        assert_eq!(titles(&items), vec!["A"]);
    }

    #[test]
    fn test_filter_false_sentinel() {
        let items = filter(&posts(), "category", "false");
        assert_eq!(titles(&items), vec!["D"]);
    }

    #[test]
    fn test_filter_exact_string() {
        assert_eq!(titles(&filter(&posts(), "category", "news")), vec!["B"]);
        assert!(filter(&posts(), "category", "News").is_empty());
    }

    #[test]
    fn test_filter_no_numeric_coercion() {
        // "1" is the truthy string, so only the boolean matches, not the number
        assert_eq!(titles(&filter(&posts(), "category", "1")), vec!["A"]);
    }

    #[test]
    fn test_filter_array_membership_and_order() {
        let items = filter(&posts(), "tags", "rust");
        assert_eq!(titles(&items), vec!["A", "C", "E"]);
    }

    #[test]
    fn test_filter_reads_top_level_beside_nested_meta() {
        let provider = StaticProvider::new(
            [
                json!({ "title": "A", "tags": ["rust"], "meta": { "description": "x" } }),
                json!({ "title": "B", "tags": ["rust"] }),
                json!({ "title": "C", "tags": ["rust"], "meta": { "tags": ["go"] } }),
            ]
            .map(Item::new),
        );
        assert_eq!(titles(&filter(&provider, "tags", "rust")), vec!["A", "B"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let provider = posts();
        assert_eq!(filter(&provider, "tags", "rust"), filter(&provider, "tags", "rust"));
    }

    #[test]
    fn test_filter_empty_provider() {
        assert!(filter(&StaticProvider::default(), "tags", "rust").is_empty());
    }
}
