use crate::shared::list_view::{ListDescriptor, ListEntity, SortDirection};
use crate::shared::multipart::MultipartFields;
use serde::{Deserialize, Serialize};

pub const USER_LIST: ListDescriptor = ListDescriptor {
    page_size: 5,
    text_fields: &["name", "email"],
    exact_fields: &["perfil"],
    sort_keys: &["name", "email"],
    default_sort: Some(("name", SortDirection::Asc)),
};

/// `(value, label)` of the access profiles
pub const PERFIS: &[(&str, &str)] = &[("user", "Utilizador"), ("admin", "Administrador")];

pub fn perfil_label(perfil: &str) -> &str {
    PERFIS
        .iter()
        .find(|(value, _)| *value == perfil)
        .map(|(_, label)| *label)
        .unwrap_or(perfil)
}

/// Account status; any value other than `"active"` counts as inactive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserStatus {
    Active,
    #[default]
    Inactive,
}

impl UserStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UserStatus::Active => "Ativo",
            UserStatus::Inactive => "Inativo",
        }
    }
}

impl From<String> for UserStatus {
    fn from(value: String) -> Self {
        if value == "active" {
            UserStatus::Active
        } else {
            UserStatus::Inactive
        }
    }
}

impl From<UserStatus> for String {
    fn from(value: UserStatus) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(flatten, with = "crate::domain::common::lenient::entity_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "default_perfil")]
    pub perfil: String,
    #[serde(default)]
    pub status: UserStatus,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_perfil() -> String {
    "user".to_string()
}

impl ListEntity for User {
    fn list_id(&self) -> &str {
        &self.id
    }

    fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.clone()),
            "email" => Some(self.email.clone()),
            "perfil" => Some(self.perfil.clone()),
            _ => None,
        }
    }
}

/// Edit state of the user form (photo file handled by the browser layer)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub perfil: String,
    pub status: UserStatus,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            perfil: default_perfil(),
            status: UserStatus::Inactive,
        }
    }
}

impl UserForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            perfil: if user.perfil.is_empty() {
                default_perfil()
            } else {
                user.perfil.clone()
            },
            status: user.status,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            return Err("Todos os campos são obrigatórios.".into());
        }
        crate::system::auth::validate_email(&self.email)
    }

    /// Every non-empty field as a text part
    pub fn to_multipart(&self) -> MultipartFields {
        let mut fields = MultipartFields::new();
        fields
            .push_non_empty("name", self.name.trim())
            .push_non_empty("email", self.email.trim())
            .push_non_empty("perfil", &self.perfil)
            .push("status", self.status.as_str());
        fields
    }
}

/// Admin-side account creation, posted to `/auth/register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub status: UserStatus,
    pub perfil: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::{FilterCriterion, ListViewModel, StatusFilter};

    fn user(id: &str, name: &str, email: &str, status: &str, perfil: &str) -> User {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "name": name,
            "email": email,
            "status": status,
            "perfil": perfil,
        }))
        .unwrap()
    }

    #[test]
    fn test_unknown_status_is_inactive() {
        assert_eq!(user("1", "A", "a@x.pt", "active", "user").status, UserStatus::Active);
        assert_eq!(user("1", "A", "a@x.pt", "pending", "user").status, UserStatus::Inactive);
        let json = serde_json::to_value(UserStatus::Active).unwrap();
        assert_eq!(json, serde_json::json!("active"));
    }

    #[test]
    fn test_list_with_both_id_keys() {
        let users: Vec<User> = serde_json::from_str(
            r#"[
                {"_id": "u1", "id": "u1", "name": "Ana", "status": "active"},
                {"id": "u2", "name": "Rui"}
            ]"#,
        )
        .unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, "u1");
        assert_eq!(users[0].status, UserStatus::Active);
        assert_eq!(users[1].id, "u2");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let user: User = serde_json::from_str(r#"{"id": "u1", "name": "Rui"}"#).unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.perfil, "user");
        assert_eq!(user.status, UserStatus::Inactive);
    }

    #[test]
    fn test_user_list_filters_and_sorts() {
        let mut vm = ListViewModel::new(USER_LIST);
        vm.set_items(vec![
            user("1", "carla", "carla@x.pt", "active", "admin"),
            user("2", "Bruno", "b@menument.pt", "inactive", "user"),
            user("3", "Ana", "ana@x.pt", "active", "user"),
        ]);
        let names = |vm: &ListViewModel<User>| -> Vec<String> {
            vm.page_rows().iter().map(|u| u.name.clone()).collect()
        };
        assert_eq!(names(&vm), vec!["Ana", "Bruno", "carla"]);

        vm.set_filter(FilterCriterion::Text("MENUMENT".into()));
        assert_eq!(names(&vm), vec!["Bruno"]);

        vm.clear_filters();
        vm.set_filter(FilterCriterion::field("perfil", "user"));
        vm.set_filter(FilterCriterion::Status(StatusFilter::Active));
        assert_eq!(names(&vm), vec!["Ana"]);
    }

    #[test]
    fn test_form_multipart_sends_non_empty_fields() {
        let form = UserForm {
            name: "Rui".into(),
            email: String::new(),
            perfil: "admin".into(),
            status: UserStatus::Active,
        };
        let fields = form.to_multipart();
        assert_eq!(fields.keys(), vec!["name", "perfil", "status"]);
        assert_eq!(fields.get("status"), Some("active"));
    }

    #[test]
    fn test_perfil_label() {
        assert_eq!(perfil_label("admin"), "Administrador");
        assert_eq!(perfil_label("editor"), "editor");
    }
}
