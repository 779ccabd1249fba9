//! Serde helpers for integer fields that browsers send either as JSON numbers
//! or as numeric strings (form values).

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

fn to_int<E: serde::de::Error>(value: IntOrString) -> Result<i64, E> {
    match value {
        IntOrString::Int(n) => Ok(n),
        IntOrString::Str(s) => s
            .trim()
            .parse()
            .map_err(|_| E::custom(format!("expected an integer, got \"{s}\""))),
    }
}

/// Deserialize a `Vec<i64>` whose elements are numbers or numeric strings.
pub fn int_list<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<IntOrString>::deserialize(deserializer)?
        .into_iter()
        .map(to_int)
        .collect()
}

/// Deserialize an `Option<i64>` from null, a number, or a numeric string.
///
/// Use together with `#[serde(default)]` so that absent fields become `None`.
pub fn opt_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<IntOrString>::deserialize(deserializer)?
        .map(to_int)
        .transpose()
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(default, deserialize_with = "super::opt_int")]
        category: Option<i64>,
        #[serde(default, deserialize_with = "super::int_list")]
        ids: Vec<i64>,
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        let body: Body = serde_json::from_str(r#"{"category": "4", "ids": [2]}"#).unwrap();
        assert_eq!(body.category, Some(4));
        assert_eq!(body.ids, vec![2]);

        let body: Body = serde_json::from_str(r#"{"category": 4, "ids": ["7", 8]}"#).unwrap();
        assert_eq!(body.category, Some(4));
        assert_eq!(body.ids, vec![7, 8]);
    }

    #[test]
    fn absent_and_null_become_none() {
        let body: Body = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(body.category, None);
        assert!(body.ids.is_empty());

        let body: Body = serde_json::from_str(r#"{"category": null}"#).unwrap();
        assert_eq!(body.category, None);
    }

    #[test]
    fn non_numeric_strings_are_rejected() {
        assert!(serde_json::from_str::<Body>(r#"{"category": "art"}"#).is_err());
        assert!(serde_json::from_str::<Body>(r#"{"ids": ["one"]}"#).is_err());
    }
}
