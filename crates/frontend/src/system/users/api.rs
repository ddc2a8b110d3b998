use contracts::system::users::{CreateUserRequest, User, UserForm};
use serde::Deserialize;
use web_sys::File;

use crate::shared::api_utils::{get_json, parse_optional, send_empty, send_form, send_json, Method};
use crate::shared::data_store::DataStore;
use crate::shared::upload::build_form_data;

/// Form state plus the account password (creation only) and a picked photo
pub struct UserDraft {
    pub form: UserForm,
    pub password: String,
    pub photo: Option<File>,
}

/// Some endpoints echo the user, some wrap it in `{ user }`
#[derive(Deserialize)]
#[serde(untagged)]
enum UserEnvelope {
    Wrapped { user: User },
    Plain(User),
}

fn parse_user(body: &str) -> Option<User> {
    parse_optional::<UserEnvelope>(body).map(|envelope| match envelope {
        UserEnvelope::Wrapped { user } => user,
        UserEnvelope::Plain(user) => user,
    })
}

fn user_path(id: &str) -> String {
    format!("/users/{}", urlencoding::encode(id))
}

async fn put_multipart(id: &str, form: &UserForm, photo: Option<&File>) -> Result<Option<User>, String> {
    let fields = form.to_multipart();
    let files: Vec<(&str, &File)> = photo.map(|file| ("photo", file)).into_iter().collect();
    let body = build_form_data(&fields, &files)?;
    let response = send_form(Method::Put, &user_path(id), body, "Erro ao atualizar utilizador").await?;
    Ok(parse_user(&response))
}

#[derive(Default)]
pub struct UsersStore;

impl DataStore for UsersStore {
    type Item = User;
    type Draft = UserDraft;

    const KIND: &'static str = "users";
    const SUPPORTS_DELETE_ALL: bool = false;

    async fn list(&self) -> Result<Vec<User>, String> {
        get_json("/users", "Erro ao carregar utilizadores").await
    }

    async fn get(&self, id: &str) -> Result<User, String> {
        get_json(&user_path(id), "Utilizador não encontrado.").await
    }

    /// Accounts are created through `/auth/register`; a picked photo is
    /// uploaded afterwards when the backend returns the new id.
    async fn create(&self, draft: UserDraft) -> Result<Option<User>, String> {
        let request = CreateUserRequest {
            name: draft.form.name.trim().to_string(),
            email: draft.form.email.trim().to_string(),
            password: draft.password,
            status: draft.form.status,
            perfil: draft.form.perfil.clone(),
        };
        let body = send_json(Method::Post, "/auth/register", &request, "Erro ao registar.").await?;
        let created = parse_user(&body);

        match (&created, draft.photo.as_ref()) {
            (Some(user), Some(photo)) => {
                log::info!("Uploading photo for new user {}", user.id);
                put_multipart(&user.id, &draft.form, Some(photo)).await
            }
            (None, Some(_)) => {
                log::warn!("Created user without id in response, photo not uploaded");
                Ok(None)
            }
            _ => Ok(created),
        }
    }

    async fn update(&self, id: &str, draft: UserDraft) -> Result<Option<User>, String> {
        put_multipart(id, &draft.form, draft.photo.as_ref()).await
    }

    async fn delete(&self, id: &str) -> Result<(), String> {
        send_empty(Method::Delete, &user_path(id), "Erro ao eliminar utilizador").await?;
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), String> {
        Err("Operação não suportada para utilizadores.".to_string())
    }

    /// The backend flips the flag itself
    async fn toggle_status(&self, id: &str, _current: bool) -> Result<(), String> {
        let path = format!("{}/toggle-status", user_path(id));
        send_empty(Method::Patch, &path, "Erro ao alterar o estado do utilizador").await?;
        Ok(())
    }
}
