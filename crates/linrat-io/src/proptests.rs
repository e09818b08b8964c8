//! Property-based tests for the output helpers.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::Value;

    use crate::{to_json_string, to_string_with_truncation, DisplayAppender};

    proptest! {
        #[test]
        fn escaped_strings_parse_back(s in any::<String>()) {
            let encoded = to_json_string(&Value::String(s.clone()));
            let decoded: String = serde_json::from_str(&encoded).unwrap();
            prop_assert_eq!(decoded, s);
        }

        #[test]
        fn encoded_arrays_parse_back(items in proptest::collection::vec(any::<i64>(), 0..10)) {
            let value = Value::from(items);
            let decoded: Value = serde_json::from_str(&to_json_string(&value)).unwrap();
            prop_assert_eq!(decoded, value);
        }

        #[test]
        fn truncation_is_prefix(s in "[a-zé0-9 ]{0,40}", limit in 0usize..50) {
            let out = to_string_with_truncation(&DisplayAppender(&s), limit);
            prop_assert!(s.starts_with(&out));
            prop_assert_eq!(out.chars().count(), s.chars().count().min(limit));
        }
    }
}
