//! Cache key generation.

use serde_json::{Map, Value};

/// Separator between the base identifier and the parameter list.
pub const PARAMS_SEPARATOR: char = '?';

// == Generate Key ==
/// Builds a deterministic cache key from a base identifier and parameters.
///
/// Parameters render as `name=<json>` pairs sorted by name and joined by `&`,
/// so the same parameter set yields the same key whatever order it was built
/// in. Absent or empty parameters leave the base identifier untouched.
///
/// ```
/// use serde_json::json;
/// use user_cache::cache::generate_key;
///
/// let params = json!({"page": 2, "q": "ann"});
/// let key = generate_key("users", params.as_object());
/// assert_eq!(key, r#"users?page=2&q="ann""#);
/// ```
pub fn generate_key(base: &str, params: Option<&Map<String, Value>>) -> String {
    let params = match params {
        Some(params) if !params.is_empty() => params,
        _ => return base.to_string(),
    };

    let mut pairs: Vec<(&String, &Value)> = params.iter().collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));

    let query = pairs
        .into_iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}{}{}", base, PARAMS_SEPARATOR, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_key_without_params() {
        assert_eq!(generate_key("users", None), "users");
        assert_eq!(generate_key("users", Some(&Map::new())), "users");
    }

    #[test]
    fn test_key_is_order_independent() {
        let mut forward = Map::new();
        forward.insert("b".to_string(), json!(1));
        forward.insert("a".to_string(), json!(2));

        let mut reverse = Map::new();
        reverse.insert("a".to_string(), json!(2));
        reverse.insert("b".to_string(), json!(1));

        let key = generate_key("u", Some(&forward));
        assert_eq!(key, generate_key("u", Some(&reverse)));
        assert_eq!(key, "u?a=2&b=1");
    }

    #[test]
    fn test_key_json_encodes_values() {
        let p = params(json!({
            "name": "bob",
            "active": true,
            "tags": ["x", "y"],
            "filter": null
        }));

        assert_eq!(
            generate_key("search", Some(&p)),
            r#"search?active=true&filter=null&name="bob"&tags=["x","y"]"#
        );
    }

    #[test]
    fn test_different_values_give_different_keys() {
        let one = params(json!({"id": 1}));
        let two = params(json!({"id": "1"}));
        assert_ne!(generate_key("user", Some(&one)), generate_key("user", Some(&two)));
    }
}
