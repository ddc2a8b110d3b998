//! Serde helpers for backend fields that arrive either as JSON numbers or
//! as numeric strings (form submissions are stored verbatim).

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
    Flag(bool),
}

/// `12`, `"12"`, `"12.5"` → `Some(..)`; `""`, `null`, garbage → `None`
pub fn opt_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(match raw {
        Some(NumberOrText::Number(n)) => Some(n),
        Some(NumberOrText::Text(s)) => s.trim().replace(',', ".").parse().ok(),
        Some(NumberOrText::Flag(_)) | None => None,
    })
}

/// Any scalar as display text; `null` → `""`
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(match raw {
        Some(NumberOrText::Number(n)) => format_number(n),
        Some(NumberOrText::Text(s)) => s,
        Some(NumberOrText::Flag(b)) => b.to_string(),
        None => String::new(),
    })
}

/// `true`, `"true"`, `1` → `Some(true)`; missing or `null` → `None`
pub fn opt_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(match raw {
        Some(NumberOrText::Flag(b)) => Some(b),
        Some(NumberOrText::Number(n)) => Some(n != 0.0),
        Some(NumberOrText::Text(s)) => match s.trim() {
            "true" | "1" | "active" => Some(true),
            "false" | "0" | "inactive" => Some(false),
            _ => None,
        },
        None => None,
    })
}

/// Backends may send `_id`, `id` or both; `_id` wins when non-empty
#[derive(Default, Deserialize, Serialize)]
struct IdKeys {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
}

impl IdKeys {
    fn resolve(self) -> Option<String> {
        self.primary
            .filter(|id| !id.is_empty())
            .or(self.id.filter(|id| !id.is_empty()))
    }
}

/// Entity key, used as `#[serde(flatten, with = "lenient::entity_id")]`
pub mod entity_id {
    use super::*;

    pub fn serialize<S: Serializer>(id: &str, serializer: S) -> Result<S::Ok, S::Error> {
        IdKeys {
            primary: Some(id.to_string()),
            id: None,
        }
        .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        IdKeys::deserialize(deserializer)?
            .resolve()
            .ok_or_else(|| <D::Error as serde::de::Error>::missing_field("_id"))
    }
}

/// Like [`entity_id`], but a missing key yields `""`
pub mod entity_id_or_empty {
    use super::*;

    pub use super::entity_id::serialize;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(IdKeys::deserialize(deserializer)?
            .resolve()
            .unwrap_or_default())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Reference {
    Id(String),
    Populated(IdKeys),
}

/// Reference that may come back populated: `"abc"` or `{"_id": "abc", ...}`
pub fn id_ref<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Reference>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Reference::Id(id)) => id,
        Some(Reference::Populated(keys)) => keys.resolve().unwrap_or_default(),
        None => String::new(),
    })
}

/// Integral values without a trailing `.0`
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

pub fn format_opt(value: Option<f64>) -> String {
    value.map(format_number).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "opt_number")]
        amount: Option<f64>,
        #[serde(default, deserialize_with = "text")]
        label: String,
        #[serde(default, deserialize_with = "opt_flag")]
        status: Option<bool>,
        #[serde(default, deserialize_with = "id_ref")]
        owner: String,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[derive(Debug, Deserialize, Serialize)]
    struct Keyed {
        #[serde(flatten, with = "entity_id")]
        id: String,
        #[serde(default)]
        name: String,
    }

    #[derive(Deserialize)]
    struct LooselyKeyed {
        #[serde(flatten, with = "entity_id_or_empty")]
        id: String,
    }

    #[test]
    fn test_numbers_and_numeric_strings() {
        assert_eq!(probe(r#"{"amount": 12}"#).amount, Some(12.0));
        assert_eq!(probe(r#"{"amount": "12.5"}"#).amount, Some(12.5));
        assert_eq!(probe(r#"{"amount": "3,5"}"#).amount, Some(3.5));
        assert_eq!(probe(r#"{"amount": ""}"#).amount, None);
        assert_eq!(probe(r#"{"amount": null}"#).amount, None);
        assert_eq!(probe(r#"{}"#).amount, None);
    }

    #[test]
    fn test_text_accepts_numbers() {
        assert_eq!(probe(r#"{"label": 4}"#).label, "4");
        assert_eq!(probe(r#"{"label": "4 doses"}"#).label, "4 doses");
        assert_eq!(probe(r#"{"label": null}"#).label, "");
    }

    #[test]
    fn test_flags() {
        assert_eq!(probe(r#"{"status": true}"#).status, Some(true));
        assert_eq!(probe(r#"{"status": "false"}"#).status, Some(false));
        assert_eq!(probe(r#"{}"#).status, None);
    }

    #[test]
    fn test_reference_plain_or_populated() {
        assert_eq!(probe(r#"{"owner": "abc"}"#).owner, "abc");
        assert_eq!(probe(r#"{"owner": {"_id": "abc", "name": "Arroz"}}"#).owner, "abc");
        assert_eq!(probe(r#"{"owner": {"_id": "abc", "id": "abc"}}"#).owner, "abc");
        assert_eq!(probe(r#"{}"#).owner, "");
    }

    #[test]
    fn test_entity_id_accepts_either_key_or_both() {
        let keyed: Keyed = serde_json::from_str(r#"{"_id": "a1", "name": "Ana"}"#).unwrap();
        assert_eq!(keyed.id, "a1");
        let keyed: Keyed = serde_json::from_str(r#"{"id": "a2"}"#).unwrap();
        assert_eq!(keyed.id, "a2");
        let keyed: Keyed = serde_json::from_str(r#"{"_id": "a3", "id": "other", "name": "Rui"}"#).unwrap();
        assert_eq!(keyed.id, "a3");
        assert_eq!(keyed.name, "Rui");
        let keyed: Keyed = serde_json::from_str(r#"{"_id": "", "id": "a4"}"#).unwrap();
        assert_eq!(keyed.id, "a4");
    }

    #[test]
    fn test_entity_id_missing() {
        assert!(serde_json::from_str::<Keyed>(r#"{"name": "Ana"}"#).is_err());
        let loose: LooselyKeyed = serde_json::from_str(r#"{"name": "Ana"}"#).unwrap();
        assert_eq!(loose.id, "");
    }

    #[test]
    fn test_entity_id_serializes_as_underscore_id() {
        let keyed = Keyed {
            id: "a1".to_string(),
            name: "Ana".to_string(),
        };
        let json = serde_json::to_value(&keyed).unwrap();
        assert_eq!(json, serde_json::json!({"_id": "a1", "name": "Ana"}));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(250.0), "250");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_opt(None), "");
    }
}
