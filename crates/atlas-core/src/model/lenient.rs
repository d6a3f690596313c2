// crates/atlas-core/src/model/lenient.rs

//! Tolerant deserializers for the loosely structured source documents.
//!
//! Every helper maps a malformed or absent value to "unknown" (`None`, `false`
//! or an empty list) instead of failing the whole document.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A scalar that is shown verbatim but can also be compared numerically.
///
/// Source documents mix `1882` and `"1882"` (and `"70 n.e."`) for the same
/// field, so the display text and the numeric reading are kept side by side.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Scalar {
    pub text: String,
    pub number: Option<f64>,
}

impl Scalar {
    pub fn from_number(n: f64) -> Self {
        Scalar {
            text: n.to_string(),
            number: Some(n),
        }
    }

    fn from_value(v: &Value) -> Option<Self> {
        match v {
            Value::Number(n) => n.as_f64().map(Scalar::from_number),
            Value::String(s) if !s.trim().is_empty() => Some(Scalar {
                text: s.clone(),
                number: parse_f64(s),
            }),
            Value::Bool(b) => Some(Scalar {
                text: b.to_string(),
                number: None,
            }),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let v = Value::deserialize(d)?;
        Ok(Scalar::from_value(&v).unwrap_or_default())
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

fn parse_f64(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Reads a number or a numeric string; anything else becomes `None`.
pub fn number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    let v = Option::<Value>::deserialize(d)?;
    Ok(match v {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => parse_f64(&s),
        _ => None,
    })
}

/// Reads any scalar as display text. Objects and arrays become `None`.
pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let v = Option::<Value>::deserialize(d)?;
    Ok(v.as_ref()
        .and_then(Scalar::from_value)
        .map(|s| s.text)
        .filter(|s| !s.is_empty()))
}

/// Reads an optional scalar (see [`Scalar`]).
pub fn scalar<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Scalar>, D::Error> {
    let v = Option::<Value>::deserialize(d)?;
    Ok(v.as_ref().and_then(Scalar::from_value))
}

/// JavaScript-style truthiness: `true`, non-zero numbers, non-empty strings
/// and any object/array count as set.
pub fn truthy<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    let v = Option::<Value>::deserialize(d)?;
    Ok(match v {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|x| x != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    })
}

/// Reads a list of scalars as strings (ids, tags, names). `null`, a missing
/// key or a non-array value yield an empty list; non-scalar items are dropped.
pub fn strings<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    let v = Option::<Value>::deserialize(d)?;
    Ok(match v {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Scalar::from_value)
            .map(|s| s.text)
            .collect(),
        _ => Vec::new(),
    })
}

/// Reads a list of structured items, dropping the ones that do not fit `T`.
pub fn list<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let v = Option::<Value>::deserialize(d)?;
    Ok(match v {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// Reads a nested group. Anything that is not an object, or an object that
/// does not fit `T`, becomes `None`.
pub fn group<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let v = Option::<Value>::deserialize(d)?;
    Ok(match v {
        Some(v @ Value::Object(_)) => serde_json::from_value(v).ok(),
        _ => None,
    })
}

/// Reads an object of `key -> scalar` pairs in document order (opening hours,
/// ticket prices). Non-scalar values are dropped.
pub fn key_values<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<(String, String)>, D::Error> {
    let v = Option::<Value>::deserialize(d)?;
    Ok(match v {
        Some(Value::Object(map)) => map
            .iter()
            .filter_map(|(k, v)| Scalar::from_value(v).map(|s| (k.clone(), s.text)))
            .collect(),
        _ => Vec::new(),
    })
}

/// Reads a person (or list of persons) given either as a plain string or as
/// an object carrying `imię_i_nazwisko`.
pub fn persons<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    fn person(v: &Value) -> Option<String> {
        match v {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Object(map) => map
                .get("imię_i_nazwisko")
                .and_then(Value::as_str)
                .map(str::to_owned),
            _ => None,
        }
    }

    let v = Option::<Value>::deserialize(d)?;
    Ok(match v {
        Some(Value::Array(items)) => items.iter().filter_map(person).collect(),
        Some(other) => person(&other).into_iter().collect(),
        None => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "number")]
        n: Option<f64>,
        #[serde(default, deserialize_with = "truthy")]
        flag: bool,
        #[serde(default, deserialize_with = "strings")]
        ids: Vec<String>,
        #[serde(default, deserialize_with = "persons")]
        who: Vec<String>,
        #[serde(default, deserialize_with = "scalar")]
        year: Option<Scalar>,
    }

    #[derive(Deserialize)]
    struct Inner {
        #[serde(default, deserialize_with = "number")]
        height: Option<f64>,
    }

    #[derive(Deserialize)]
    struct Outer {
        #[serde(default, deserialize_with = "group")]
        dims: Option<Inner>,
    }

    #[test]
    fn tolerates_mixed_shapes() {
        let p: Probe = serde_json::from_str(
            r#"{"n": " 57.5 ", "flag": {"rok": 1980}, "ids": ["A", 2, null, {}],
                "who": [{"imię_i_nazwisko": "Antoni Gaudí"}, "Francisco de Paula del Villar"],
                "year": "70 n.e."}"#,
        )
        .unwrap();
        assert_eq!(p.n, Some(57.5));
        assert!(p.flag);
        assert_eq!(p.ids, vec!["A", "2"]);
        assert_eq!(p.who, vec!["Antoni Gaudí", "Francisco de Paula del Villar"]);
        let year = p.year.unwrap();
        assert_eq!(year.text, "70 n.e.");
        assert_eq!(year.number, None);
    }

    #[test]
    fn nulls_and_garbage_become_unknown() {
        let p: Probe =
            serde_json::from_str(r#"{"n": "N/A", "flag": 0, "ids": null, "who": 3}"#).unwrap();
        assert_eq!(p.n, None);
        assert!(!p.flag);
        assert!(p.ids.is_empty());
        assert!(p.who.is_empty());
        assert!(p.year.is_none());
    }

    #[test]
    fn groups_of_the_wrong_shape_are_unknown() {
        for raw in [r#"{"dims": "brak danych"}"#, r#"{"dims": [1, 2]}"#, r#"{"dims": 7}"#, "{}"] {
            let o: Outer = serde_json::from_str(raw).unwrap();
            assert!(o.dims.is_none(), "{raw}");
        }
        let o: Outer = serde_json::from_str(r#"{"dims": {"height": "57"}}"#).unwrap();
        assert_eq!(o.dims.and_then(|d| d.height), Some(57.0));
    }
}
