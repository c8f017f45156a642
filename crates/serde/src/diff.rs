//! Structural comparison of two JSON documents, used to check that a decode
//! and re-encode reproduced its input.

use std::collections::BTreeSet;
use std::fmt;

use serde_json::Value;

/// One place where two documents disagree. A side that lacks the path
/// holds `Value::Null`.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonDifference {
    pub path: String,
    pub original: Value,
    pub reserialized: Value,
}

impl fmt::Display for JsonDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} != {}",
            if self.path.is_empty() { "(root)" } else { &self.path },
            self.original,
            self.reserialized
        )
    }
}

/// Every differing path between `original` and `reserialized`. Key order
/// is ignored; array order is not.
pub fn json_differences(original: &Value, reserialized: &Value) -> Vec<JsonDifference> {
    let mut differences = Vec::new();
    compare_json_values(original, reserialized, String::new(), &mut differences);
    differences
}

fn child_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn compare_json_values(
    original: &Value,
    reserialized: &Value,
    path: String,
    differences: &mut Vec<JsonDifference>,
) {
    match (original, reserialized) {
        (Value::Object(orig_obj), Value::Object(reser_obj)) => {
            let keys: BTreeSet<&String> = orig_obj.keys().chain(reser_obj.keys()).collect();
            for key in keys {
                let new_path = child_path(&path, key);
                match (orig_obj.get(key), reser_obj.get(key)) {
                    (Some(orig_val), Some(reser_val)) => {
                        compare_json_values(orig_val, reser_val, new_path, differences)
                    }
                    (orig_val, reser_val) => differences.push(JsonDifference {
                        path: new_path,
                        original: orig_val.cloned().unwrap_or(Value::Null),
                        reserialized: reser_val.cloned().unwrap_or(Value::Null),
                    }),
                }
            }
        }
        (Value::Array(orig_arr), Value::Array(reser_arr)) if orig_arr.len() == reser_arr.len() => {
            for (i, (orig_val, reser_val)) in orig_arr.iter().zip(reser_arr).enumerate() {
                let new_path = format!("{}[{}]", path, i);
                compare_json_values(orig_val, reser_val, new_path, differences);
            }
        }
        // Numbers compare by value so `1.0` and `1` only differ when the
        // lexical forms were both kept and disagree.
        (Value::Number(a), Value::Number(b)) => {
            if a.to_string() != b.to_string() && a.as_f64() != b.as_f64() {
                differences.push(JsonDifference {
                    path,
                    original: original.clone(),
                    reserialized: reserialized.clone(),
                });
            }
        }
        _ => {
            if original != reserialized {
                differences.push(JsonDifference {
                    path,
                    original: original.clone(),
                    reserialized: reserialized.clone(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn identical_documents_have_no_differences() {
        let doc = json!({"a": [1, {"b": "c"}], "d": null});
        assert!(json_differences(&doc, &doc).is_empty());
    }

    #[test]
    fn reports_missing_extra_and_changed_paths() {
        let original = json!({"name": [{"given": ["A", "B"]}], "gone": true});
        let reserialized = json!({"name": [{"given": ["A", "C"]}], "added": 1});
        let paths: Vec<String> = json_differences(&original, &reserialized)
            .into_iter()
            .map(|d| d.path)
            .collect();
        assert_eq!(paths, vec!["added", "gone", "name[0].given[1]"]);
    }

    #[test]
    fn arrays_of_different_length_differ_as_a_whole() {
        let differences = json_differences(&json!({"a": [1, 2]}), &json!({"a": [1]}));
        assert_eq!(differences.len(), 1);
        assert_eq!(differences[0].path, "a");
        assert_eq!(differences[0].to_string(), "a: [1,2] != [1]");
    }
}
