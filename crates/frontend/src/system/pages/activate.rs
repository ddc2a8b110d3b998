use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;

use super::auth_card::AuthCard;
use crate::shared::navigation::use_navigator;
use crate::system::auth::api;

/// Landing page of the activation email link (`/activate?token=...`)
#[component]
pub fn ActivatePage() -> impl IntoView {
    let query = use_query_map();
    let navigator = use_navigator();
    let (message, set_message) = signal(Option::<String>::None);
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let token = query.with_untracked(|q| q.get("token")).filter(|t| !t.is_empty());
    match token {
        Some(token) => spawn_local(async move {
            match api::activate(token).await {
                Ok(msg) => {
                    set_message.set(Some(msg.unwrap_or_else(|| "Conta ativada com sucesso.".to_string())));
                    navigator.go_later("/login");
                }
                Err(e) => set_error_message.set(Some(e)),
            }
        }),
        None => set_error_message.set(Some("Token de ativação inválido.".to_string())),
    }

    view! {
        <AuthCard title="Ativação de Conta" error=error_message success=message>
            <Show when=move || message.get().is_none() && error_message.get().is_none()>
                <p>"A ativar a conta..."</p>
            </Show>
        </AuthCard>
    }
}
