use serde::de::{self, Deserialize, Deserializer, Unexpected};
use serde::Serializer;

use crate::errors::ValidationError;

/// A closed set of string literals accepted by the API for a single field.
pub trait WireLiteral: Sized + Copy + 'static {
    /// Wire key of the field this literal belongs to.
    const FIELD: &'static str;

    /// Every accepted value, in documentation order.
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn from_literal(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == value)
    }

    fn expected() -> String {
        let literals: Vec<&str> = Self::ALL.iter().map(|v| v.as_str()).collect();
        format!("one of {}", literals.join(", "))
    }

    fn parse_literal(value: &str) -> Result<Self, ValidationError> {
        Self::from_literal(value).ok_or_else(|| ValidationError::InvalidValue {
            field: Self::FIELD.to_string(),
            value: value.to_string(),
            expected: Self::expected(),
        })
    }
}

pub fn serialize_literal<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: WireLiteral,
    S: Serializer,
{
    serializer.serialize_str(value.as_str())
}

pub fn deserialize_literal<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: WireLiteral,
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match T::from_literal(&raw) {
        Some(value) => Ok(value),
        None => {
            let expected = T::expected();
            Err(de::Error::invalid_value(
                Unexpected::Str(&raw),
                &expected.as_str(),
            ))
        }
    }
}

/// Writes an unset restricted-value field as its default literal.
pub mod literal_or_default {
    use super::WireLiteral;
    use serde::Serializer;

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: WireLiteral + Default,
        S: Serializer,
    {
        serializer.serialize_str(value.unwrap_or_default().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    enum Shade {
        #[default]
        Light,
        Dark,
    }

    impl WireLiteral for Shade {
        const FIELD: &'static str = "shade";
        const ALL: &'static [Self] = &[Shade::Light, Shade::Dark];

        fn as_str(&self) -> &'static str {
            match self {
                Shade::Light => "light",
                Shade::Dark => "dark",
            }
        }
    }

    #[derive(Serialize, Deserialize)]
    struct Test {
        #[serde(
            serialize_with = "serialize_literal",
            deserialize_with = "deserialize_literal"
        )]
        shade: Shade,
        #[serde(serialize_with = "literal_or_default::serialize", skip_deserializing)]
        fallback: Option<Shade>,
    }

    #[test]
    fn test_literal_serde() {
        let test = Test {
            shade: Shade::Dark,
            fallback: None,
        };
        let json = serde_json::to_string(&test).unwrap();
        assert_eq!(json, r#"{"shade":"dark","fallback":"light"}"#);

        let test: Test = serde_json::from_str(r#"{"shade":"light"}"#).unwrap();
        assert_eq!(test.shade, Shade::Light);
    }

    #[test]
    fn test_unknown_literal_is_invalid_value() {
        let err = serde_json::from_str::<Test>(r#"{"shade":"grey"}"#)
            .err()
            .unwrap();
        let message = err.to_string();
        assert!(message.contains("invalid value"), "{message}");
        assert!(message.contains("one of light, dark"), "{message}");
    }

    #[test]
    fn test_parse_literal() {
        assert_eq!(Shade::parse_literal("dark"), Ok(Shade::Dark));
        assert!(matches!(
            Shade::parse_literal("grey"),
            Err(ValidationError::InvalidValue { ref field, .. }) if field == "shade"
        ));
    }
}
