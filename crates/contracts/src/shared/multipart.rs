use serde::Serialize;

/// Ordered text parts of a multipart form submission.
///
/// File parts are appended separately by the browser layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartFields {
    parts: Vec<(String, String)>,
}

impl MultipartFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.parts.push((key.into(), value.into()));
        self
    }

    /// Skips values that are empty after trimming
    pub fn push_non_empty(&mut self, key: impl Into<String>, value: &str) -> &mut Self {
        if !value.trim().is_empty() {
            self.parts.push((key.into(), value.to_string()));
        }
        self
    }

    pub fn push_json<T: Serialize>(
        &mut self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<&mut Self, String> {
        let json = serde_json::to_string(value)
            .map_err(|e| format!("Failed to encode multipart field: {}", e))?;
        self.parts.push((key.into(), json));
        Ok(self)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.parts
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> Vec<&str> {
        self.parts.iter().map(|(k, _)| k.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parts.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts_keep_insertion_order() {
        let mut fields = MultipartFields::new();
        fields.push("title", "Bolo").push_non_empty("servings", " ");
        fields.push_json("instructions", &vec!["Misturar"]).unwrap();

        assert_eq!(fields.keys(), vec!["title", "instructions"]);
        assert_eq!(fields.get("instructions"), Some(r#"["Misturar"]"#));
        assert_eq!(fields.get("servings"), None);
    }
}
