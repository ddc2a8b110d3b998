use contracts::system::auth::validate_password_reset;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use super::auth_card::AuthCard;
use crate::shared::navigation::use_navigator;
use crate::system::auth::api;

/// `/reset-password/:token`
#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let params = use_params_map();
    let navigator = use_navigator();
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (message, set_message) = signal(Option::<String>::None);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_message.set(None);
        set_error_message.set(None);

        let password_val = password.get_untracked();
        if let Err(e) = validate_password_reset(&password_val, &confirm.get_untracked()) {
            set_error_message.set(Some(e));
            return;
        }
        let token = params.with_untracked(|p| p.get("token")).unwrap_or_default();

        set_is_loading.set(true);
        spawn_local(async move {
            match api::reset_password(&token, password_val).await {
                Ok(msg) => {
                    set_message.set(Some(
                        msg.unwrap_or_else(|| "Senha redefinida com sucesso.".to_string()),
                    ));
                    navigator.go_later("/login");
                }
                Err(e) => set_error_message.set(Some(e)),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <AuthCard title="Redefinir Senha" error=error_message success=message>
            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="password">"Nova senha:"</label>
                    <input
                        type="password"
                        id="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        required
                    />
                </div>
                <div class="form-group">
                    <label for="confirm_password">"Confirmar senha:"</label>
                    <input
                        type="password"
                        id="confirm_password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| set_confirm.set(event_target_value(&ev))
                        required
                    />
                </div>
                <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                    {move || if is_loading.get() { "A redefinir..." } else { "Redefinir senha" }}
                </button>
            </form>
            <div class="login-links">
                <A href="/login">"Voltar ao login"</A>
            </div>
        </AuthCard>
    }
}
