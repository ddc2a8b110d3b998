use super::criteria::{ListCriteria, SortDirection, SortSpec};

/// Entity that can be displayed by a list screen
pub trait ListEntity {
    /// Backend-assigned identifier
    fn list_id(&self) -> &str;

    fn is_active(&self) -> bool;

    /// Display value of a named field; `None` if the entity has no such field
    fn field_value(&self, field: &str) -> Option<String>;
}

/// Declarative per-entity configuration of a list screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListDescriptor {
    pub page_size: usize,
    /// Fields matched by the free-text predicate (any of them)
    pub text_fields: &'static [&'static str],
    /// Fields that accept an exact-match predicate
    pub exact_fields: &'static [&'static str],
    /// Allowed sort keys; empty means the list keeps backend order
    pub sort_keys: &'static [&'static str],
    pub default_sort: Option<(&'static str, SortDirection)>,
}

impl ListDescriptor {
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }

    pub fn is_sortable(&self, key: &str) -> bool {
        self.sort_keys.contains(&key)
    }

    /// Neutral criteria with the default sort applied
    pub fn initial_criteria(&self) -> ListCriteria {
        ListCriteria {
            sort: self
                .default_sort
                .map(|(key, direction)| SortSpec::new(key, direction)),
            ..ListCriteria::default()
        }
    }
}
