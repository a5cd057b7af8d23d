//! Lenient (de)serialization helpers.
//!
//! Web forms send flags as `true`/`false` or `1`/`0` and lists
//! either as arrays or as comma separated text.

/// Flags are exchanged as `0` or `1`.
pub mod bool_as_int {
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        super::flexible_bool::deserialize(deserializer).map(|flag| flag.unwrap_or_default())
    }
}

pub mod flexible_bool {
    use serde::{de::Error as _, Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<bool>, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            Value::Bool(flag) => Ok(Some(flag)),
            Value::Number(n) => Ok(Some(n.as_f64().unwrap_or_default() != 0.0)),
            Value::String(s) => match s.trim() {
                "" => Ok(None),
                "1" | "true" => Ok(Some(true)),
                "0" | "false" => Ok(Some(false)),
                _ => Err(D::Error::custom(format!("invalid flag: {s}"))),
            },
            value => Err(D::Error::custom(format!("invalid flag: {value}"))),
        }
    }
}

pub mod flexible_list {
    use serde::{de::Error as _, Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
        let items = match Value::deserialize(deserializer)? {
            Value::Null => vec![],
            Value::String(s) => s.split(',').map(ToOwned::to_owned).collect(),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s),
                    item => Err(D::Error::custom(format!("invalid list item: {item}"))),
                })
                .collect::<Result<_, _>>()?,
            value => return Err(D::Error::custom(format!("invalid list: {value}"))),
        };
        Ok(items
            .into_iter()
            .map(|item| item.trim().to_owned())
            .filter(|item| !item.is_empty())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Form {
        #[serde(default, deserialize_with = "super::flexible_bool::deserialize")]
        flag: Option<bool>,
        #[serde(default, deserialize_with = "super::flexible_list::deserialize")]
        items: Vec<String>,
    }

    fn parse(json: &str) -> Form {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn flags_from_numbers_and_booleans() {
        assert_eq!(parse(r#"{"flag":1}"#).flag, Some(true));
        assert_eq!(parse(r#"{"flag":0}"#).flag, Some(false));
        assert_eq!(parse(r#"{"flag":true}"#).flag, Some(true));
        assert_eq!(parse(r#"{"flag":null}"#).flag, None);
        assert_eq!(parse(r#"{}"#).flag, None);
        assert!(serde_json::from_str::<Form>(r#"{"flag":"maybe"}"#).is_err());
    }

    #[test]
    fn lists_from_arrays_and_text() {
        assert_eq!(parse(r#"{"items":["a"," b ",""]}"#).items, vec!["a", "b"]);
        assert_eq!(parse(r#"{"items":"a, b"}"#).items, vec!["a", "b"]);
        assert!(parse(r#"{}"#).items.is_empty());
    }
}
