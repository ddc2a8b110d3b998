use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tri-state status predicate shared by every list screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn matches(self, is_active: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => is_active,
            StatusFilter::Inactive => !is_active,
        }
    }

    /// Value used in `<select>` options
    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Inactive => "inactive",
        }
    }

    /// Anything that is not a known value falls back to `All`
    pub fn parse(value: &str) -> Self {
        match value {
            "active" => StatusFilter::Active,
            "inactive" => StatusFilter::Inactive,
            _ => StatusFilter::All,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn parse(value: &str) -> Self {
        if value == "desc" {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: key.into(),
            direction,
        }
    }

    /// Encodes as `"<key>-<direction>"`, the value format of the sort `<select>`
    pub fn to_option_value(&self) -> String {
        format!("{}-{}", self.key, self.direction.as_str())
    }

    pub fn from_option_value(value: &str) -> Option<Self> {
        let (key, direction) = value.rsplit_once('-')?;
        if key.is_empty() {
            return None;
        }
        Some(Self::new(key, SortDirection::parse(direction)))
    }
}

/// Filter and sort state of one list screen.
///
/// Serializable so a host screen can persist it between visits.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListCriteria {
    /// Case-insensitive substring predicate
    #[serde(default)]
    pub text: String,
    /// Exact-match predicates; an empty value means "unset"
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
    #[serde(default)]
    pub status: StatusFilter,
    #[serde(default)]
    pub sort: Option<SortSpec>,
}

impl ListCriteria {
    /// Current value of an exact-match predicate (`""` when unset)
    pub fn field(&self, key: &str) -> &str {
        self.fields.get(key).map(String::as_str).unwrap_or("")
    }

    /// True when no filter narrows the result set
    pub fn is_neutral(&self) -> bool {
        self.text.is_empty()
            && self.status == StatusFilter::All
            && self.fields.values().all(String::is_empty)
    }

    /// Resets every filter to its neutral value, sort is kept
    pub fn clear_filters(&mut self) {
        self.text.clear();
        self.fields.clear();
        self.status = StatusFilter::All;
    }

    pub fn apply(&mut self, criterion: FilterCriterion) {
        match criterion {
            FilterCriterion::Text(text) => self.text = text,
            FilterCriterion::Field { key, value } => {
                if value.is_empty() {
                    self.fields.remove(&key);
                } else {
                    self.fields.insert(key, value);
                }
            }
            FilterCriterion::Status(status) => self.status = status,
        }
    }
}

/// A single filter change coming from the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterCriterion {
    Text(String),
    Field { key: String, value: String },
    Status(StatusFilter),
}

impl FilterCriterion {
    pub fn field(key: impl Into<String>, value: impl Into<String>) -> Self {
        FilterCriterion::Field {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_filter_matches() {
        assert!(StatusFilter::All.matches(true));
        assert!(StatusFilter::All.matches(false));
        assert!(StatusFilter::Active.matches(true));
        assert!(!StatusFilter::Active.matches(false));
        assert!(StatusFilter::Inactive.matches(false));
        assert!(!StatusFilter::Inactive.matches(true));
    }

    #[test]
    fn test_sort_option_value() {
        let spec = SortSpec::new("email", SortDirection::Desc);
        assert_eq!(spec.to_option_value(), "email-desc");
        assert_eq!(SortSpec::from_option_value("email-desc"), Some(spec));
        assert_eq!(
            SortSpec::from_option_value("name-asc"),
            Some(SortSpec::new("name", SortDirection::Asc))
        );
        assert_eq!(SortSpec::from_option_value("name"), None);
    }

    #[test]
    fn test_field_criterion_with_empty_value_unsets() {
        let mut criteria = ListCriteria::default();
        criteria.apply(FilterCriterion::field("type", "Frutas"));
        assert_eq!(criteria.field("type"), "Frutas");
        assert!(!criteria.is_neutral());

        criteria.apply(FilterCriterion::field("type", ""));
        assert_eq!(criteria.field("type"), "");
        assert!(criteria.is_neutral());
    }

    #[test]
    fn test_persisted_criteria_tolerates_missing_fields() {
        let criteria: ListCriteria = serde_json::from_str(r#"{"text":"bolo"}"#).unwrap();
        assert_eq!(criteria.text, "bolo");
        assert_eq!(criteria.status, StatusFilter::All);
        assert!(criteria.sort.is_none());
    }
}
