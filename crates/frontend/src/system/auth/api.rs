use contracts::system::auth::{
    ActivateRequest, EmailRequest, LoginRequest, RegisterRequest, ResetPasswordRequest,
    SessionUser,
};
use contracts::shared::api_message::ApiMessage;
use serde::Deserialize;

use crate::shared::api_utils::{get_json, send_json, Method};

/// `/auth/me` answers either with the user itself or wrapped in `{ user }`
#[derive(Deserialize)]
#[serde(untagged)]
enum MeResponse {
    Wrapped { user: SessionUser },
    Plain(SessionUser),
}

/// Current session user; fails when there is no valid session cookie
pub async fn get_current_user() -> Result<SessionUser, String> {
    let response: MeResponse = get_json("/auth/me", "Sessão inválida").await?;
    Ok(match response {
        MeResponse::Wrapped { user } => user,
        MeResponse::Plain(user) => user,
    })
}

/// Sets the session cookie on success
pub async fn login(email: String, password: String) -> Result<(), String> {
    let request = LoginRequest { email, password };
    send_json(Method::Post, "/auth/login", &request, "Erro ao autenticar").await?;
    Ok(())
}

pub async fn logout() -> Result<(), String> {
    send_json(
        Method::Post,
        "/auth/logout",
        &serde_json::json!({}),
        "Erro ao terminar sessão",
    )
    .await?;
    Ok(())
}

/// Returns the backend confirmation message, if any
pub async fn register(request: &RegisterRequest) -> Result<Option<String>, String> {
    let body = send_json(Method::Post, "/auth/register", request, "Erro ao registar.").await?;
    Ok(ApiMessage::parse(&body).and_then(|m| m.message))
}

pub async fn activate(token: String) -> Result<Option<String>, String> {
    let body = send_json(
        Method::Post,
        "/auth/activate",
        &ActivateRequest { token },
        "Erro na ativação.",
    )
    .await?;
    Ok(ApiMessage::parse(&body).and_then(|m| m.message))
}

pub async fn resend_activation(email: String) -> Result<Option<String>, String> {
    let body = send_json(
        Method::Post,
        "/auth/resend-activation",
        &EmailRequest { email },
        "Erro ao reenviar link.",
    )
    .await?;
    Ok(ApiMessage::parse(&body).and_then(|m| m.message))
}

pub async fn forgot_password(email: String) -> Result<Option<String>, String> {
    let body = send_json(
        Method::Post,
        "/auth/forgot-password",
        &EmailRequest { email },
        "Erro ao enviar instruções.",
    )
    .await?;
    Ok(ApiMessage::parse(&body).and_then(|m| m.message))
}

pub async fn reset_password(token: &str, password: String) -> Result<Option<String>, String> {
    let path = format!("/auth/reset-password/{}", urlencoding::encode(token));
    let body = send_json(
        Method::Post,
        &path,
        &ResetPasswordRequest { password },
        "Erro ao redefinir a senha.",
    )
    .await?;
    Ok(ApiMessage::parse(&body).and_then(|m| m.message))
}
