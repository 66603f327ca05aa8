use parallel_web_tool::{
    InputSchema, MAX_OBJECTIVE_CHARS, MAX_SEARCH_QUERIES, OBJECTIVE_BOUND_MESSAGE,
    SEARCH_QUERIES_BOUND_MESSAGE,
};
use proptest::prelude::*;
use serde_json::json;

#[test]
fn test_search_queries_boundary() {
    let schema = InputSchema::new().unwrap();

    let five = json!({"objective": "o", "search_queries": ["a", "b", "c", "d", "e"]});
    assert!(schema.validate(&five).is_ok());

    let six = json!({"objective": "o", "search_queries": ["a", "b", "c", "d", "e", "f"]});
    assert_eq!(schema.validate(&six).unwrap_err().to_string(), SEARCH_QUERIES_BOUND_MESSAGE);

    let one = json!({"objective": "research", "search_queries": ["one"]});
    assert!(schema.validate(&one).is_ok());
}

#[test]
fn test_objective_boundary() {
    let schema = InputSchema::new().unwrap();

    let exact = json!({"objective": "a".repeat(5000), "search_queries": ["q"]});
    assert!(schema.validate(&exact).is_ok());

    let over = json!({"objective": "a".repeat(5001), "search_queries": ["q"]});
    assert_eq!(schema.validate(&over).unwrap_err().to_string(), OBJECTIVE_BOUND_MESSAGE);
}

#[test]
fn test_objective_counts_characters_not_bytes() {
    let schema = InputSchema::new().unwrap();
    // 5000 two-byte characters is 10000 bytes but still within bounds.
    let wide = json!({"objective": "é".repeat(5000), "search_queries": ["q"]});
    assert!(schema.validate(&wide).is_ok());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_query_count_bounds(count in 0usize..10) {
        let schema = InputSchema::new().unwrap();
        let queries: Vec<String> = (0..count).map(|i| format!("query {i}")).collect();
        let args = json!({"objective": "o", "search_queries": queries});
        let result = schema.validate(&args);
        if (1..=MAX_SEARCH_QUERIES).contains(&count) {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result.unwrap_err().to_string(), SEARCH_QUERIES_BOUND_MESSAGE);
        }
    }

    #[test]
    fn prop_objective_length_bounds(len in 4990usize..5010, ch in prop::char::range('a', 'ж')) {
        let schema = InputSchema::new().unwrap();
        let objective: String = std::iter::repeat(ch).take(len).collect();
        let args = json!({"objective": objective, "search_queries": ["q"]});
        let result = schema.validate(&args);
        if len <= MAX_OBJECTIVE_CHARS {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result.unwrap_err().to_string(), OBJECTIVE_BOUND_MESSAGE);
        }
    }
}
