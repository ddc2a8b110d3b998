mod validation;

pub use validation::{
    is_not_activated_message, validate_email, validate_password_reset, validate_registration,
    validate_user_creation, RegistrationForm, PASSWORD_RULE_MESSAGE,
};

use crate::system::users::UserStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public self-registration; accounts start inactive until activated by email
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub status: UserStatus,
    pub perfil: String,
}

/// Body of `/auth/resend-activation` and `/auth/forgot-password`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivateRequest {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub password: String,
}

/// User returned by `/auth/me`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(flatten, with = "crate::domain::common::lenient::entity_id_or_empty")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub perfil: Option<String>,
}

impl SessionUser {
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    pub fn is_admin(&self) -> bool {
        self.perfil.as_deref() == Some("admin")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_user_accepts_either_id_key() {
        let a: SessionUser = serde_json::from_str(r#"{"_id": "1", "name": "Ana"}"#).unwrap();
        let b: SessionUser =
            serde_json::from_str(r#"{"id": "1", "email": "ana@x.pt", "perfil": "admin"}"#).unwrap();
        assert_eq!(a.display_name(), "Ana");
        assert_eq!(b.display_name(), "ana@x.pt");
        assert!(b.is_admin());
        assert!(!a.is_admin());

        let both: SessionUser =
            serde_json::from_str(r#"{"_id": "1", "id": "1", "name": "Ana"}"#).unwrap();
        assert_eq!(both.id, "1");
        let anonymous: SessionUser = serde_json::from_str(r#"{"name": "Ana"}"#).unwrap();
        assert_eq!(anonymous.id, "");
    }

    #[test]
    fn test_register_request_wire_format() {
        let request = RegisterRequest {
            name: "Ana".into(),
            email: "ana@x.pt".into(),
            password: "Segura#123".into(),
            status: UserStatus::Inactive,
            perfil: "user".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["status"], "inactive");
        assert_eq!(json["perfil"], "user");
    }
}
