use serde::{Deserialize, Serialize};

/// Body shape the backend uses for errors and simple acknowledgements
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiMessage {
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}

/// Human-readable message from a response body, `fallback` when the body
/// carries none.
pub fn error_message(body: &str, fallback: &str) -> String {
    ApiMessage::parse(body)
        .and_then(|m| m.message)
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_body() {
        let body = r#"{"message":"Receita não encontrada"}"#;
        assert_eq!(error_message(body, "Erro"), "Receita não encontrada");
    }

    #[test]
    fn test_fallback_when_body_has_no_message() {
        assert_eq!(error_message("", "Erro ao apagar"), "Erro ao apagar");
        assert_eq!(error_message("<html>502</html>", "Erro ao apagar"), "Erro ao apagar");
        assert_eq!(error_message(r#"{"error":"x"}"#, "Erro ao apagar"), "Erro ao apagar");
        assert_eq!(error_message(r#"{"message":"  "}"#, "Erro ao apagar"), "Erro ao apagar");
    }
}
