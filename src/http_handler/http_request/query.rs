use super::request_common::RequestError;
use serde::Serialize;
use serde_json::Value;

/// Serializes a struct or map into query pairs.
///
/// `null` fields are omitted, arrays become repeated `key[]` pairs and nested
/// objects are sent as their JSON text.
pub fn to_query_pairs<S: Serialize + ?Sized>(value: &S) -> Result<Vec<(String, String)>, RequestError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => {
            let mut pairs = Vec::with_capacity(map.len());
            for (key, field) in map {
                push_field(&mut pairs, key, field);
            }
            Ok(pairs)
        }
        Value::Null => Ok(Vec::new()),
        other => Err(RequestError::InvalidQuery(format!(
            "expected an object of query parameters, got {other}"
        ))),
    }
}

fn push_field(pairs: &mut Vec<(String, String)>, key: String, field: Value) {
    match field {
        Value::Null => {}
        Value::Array(items) => {
            let array_key = format!("{key}[]");
            for item in items.into_iter().filter(|i| !i.is_null()) {
                pairs.push((array_key.clone(), scalar_to_string(item)));
            }
        }
        other => pairs.push((key, scalar_to_string(other))),
    }
}

fn scalar_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Filter {
        search_text: Option<String>,
        show_unread: bool,
        num_posts_loaded: u32,
        folder_id: Option<u64>,
    }

    #[test]
    fn test_absent_values_are_omitted() {
        let filter = Filter { search_text: None, show_unread: true, num_posts_loaded: 20, folder_id: Some(4) };
        let mut pairs = to_query_pairs(&filter).unwrap();
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("folderId".to_string(), "4".to_string()),
                ("numPostsLoaded".to_string(), "20".to_string()),
                ("showUnread".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_arrays_and_nested_objects() {
        let pairs = to_query_pairs(&json!({"ids": [1, null, 2], "range": {"from": 1}})).unwrap();
        assert!(pairs.contains(&("ids[]".to_string(), "1".to_string())));
        assert!(pairs.contains(&("ids[]".to_string(), "2".to_string())));
        assert!(pairs.contains(&("range".to_string(), r#"{"from":1}"#.to_string())));
        assert_eq!(pairs.len(), 3);
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(matches!(to_query_pairs(&json!([1, 2])), Err(RequestError::InvalidQuery(_))));
        assert!(to_query_pairs(&Value::Null).unwrap().is_empty());
    }
}
