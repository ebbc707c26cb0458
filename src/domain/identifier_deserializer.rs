use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer};

/// Deserializes a catalog key, rejecting empty or whitespace-only values.
pub fn non_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    if value.trim().is_empty() {
        return Err(Error::invalid_value(Unexpected::Str(&value), &"a non-empty identifier"));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Keyed {
        #[serde(deserialize_with = "non_empty")]
        key: String,
    }

    #[rstest]
    #[case("iPhone15,2")]
    #[case("20A362")]
    #[case(" padded ")]
    fn accepts_non_empty_values(#[case] key: &str) {
        let result = serde_json::from_value::<Keyed>(json!({ "key": key })).unwrap();
        assert_eq!(result.key, key);
    }

    #[rstest]
    #[case::empty(json!({ "key": "" }))]
    #[case::whitespace(json!({ "key": "  " }))]
    #[case::number(json!({ "key": 15 }))]
    #[case::null(json!({ "key": null }))]
    #[case::missing(json!({}))]
    fn rejects_missing_or_blank_values(#[case] value: serde_json::Value) {
        assert!(serde_json::from_value::<Keyed>(value).is_err());
    }
}
