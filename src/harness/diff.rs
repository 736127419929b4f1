//! Structural diff of two serializable values, used to explain round-trip mismatches.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// One differing location. `None` on a side means the path is absent there.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Difference {
    pub path: String,
    pub original: Option<Value>,
    pub recovered: Option<Value>,
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn side(value: &Option<Value>) -> String {
            value.as_ref().map_or_else(|| "<missing>".to_string(), Value::to_string)
        }
        write!(f, "{}: {} != {}", self.path, side(&self.original), side(&self.recovered))
    }
}

/// Paths (`$.Variant.field[0]`) at which `original` and `recovered` differ.
///
/// Returns an empty list if either value cannot be rendered as JSON.
pub fn structural_diff<T: Serialize>(original: &T, recovered: &T) -> Vec<Difference> {
    let (left, right) = match (serde_json::to_value(original), serde_json::to_value(recovered)) {
        (Ok(left), Ok(right)) => (left, right),
        (Err(e), _) | (_, Err(e)) => {
            tracing::debug!(error = %e, "value is not renderable, no structural diff");
            return Vec::new();
        }
    };
    let mut out = Vec::new();
    walk("$".to_string(), Some(&left), Some(&right), &mut out);
    out
}

fn walk(path: String, left: Option<&Value>, right: Option<&Value>, out: &mut Vec<Difference>) {
    match (left, right) {
        (Some(Value::Object(l)), Some(Value::Object(r))) => {
            let keys: BTreeSet<&String> = l.keys().chain(r.keys()).collect();
            for key in keys {
                walk(format!("{path}.{key}"), l.get(key), r.get(key), out);
            }
        }
        (Some(Value::Array(l)), Some(Value::Array(r))) => {
            for i in 0..l.len().max(r.len()) {
                walk(format!("{path}[{i}]"), l.get(i), r.get(i), out);
            }
        }
        (l, r) if l != r => out.push(Difference {
            path,
            original: l.cloned(),
            recovered: r.cloned(),
        }),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn equal_values_have_no_diff() {
        let v = json!({"VarChar": {"nullable": true, "value": "x", "length": 3}});
        assert!(structural_diff(&v, &v.clone()).is_empty());
    }

    #[test]
    fn nested_field_changes_are_named() {
        let a = json!({"VarChar": {"nullable": true, "value": "x", "length": 3}});
        let b = json!({"VarChar": {"nullable": true, "value": "x", "length": 0}});
        let diff = structural_diff(&a, &b);
        assert_eq!(diff.len(), 1);
        assert_eq!(diff[0].path, "$.VarChar.length");
        assert_eq!(diff[0].to_string(), "$.VarChar.length: 3 != 0");
    }

    #[test]
    fn missing_keys_and_elements() {
        let a = json!({"List": {"values": [1, 2], "nullable": false}});
        let b = json!({"List": {"values": [1]}});
        let paths: Vec<String> = structural_diff(&a, &b).into_iter().map(|d| d.to_string()).collect();
        assert_eq!(
            paths,
            vec!["$.List.nullable: false != <missing>", "$.List.values[1]: 2 != <missing>"]
        );
    }
}
