use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::auth_card::AuthCard;
use crate::system::auth::api;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(Option::<String>::None);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_message.set(None);
        set_error_message.set(None);
        set_is_loading.set(true);

        let email_val = email.get_untracked();
        spawn_local(async move {
            match api::forgot_password(email_val).await {
                Ok(msg) => set_message.set(Some(
                    msg.unwrap_or_else(|| "Instruções enviadas para o seu email.".to_string()),
                )),
                Err(e) => set_error_message.set(Some(e)),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <AuthCard title="Recuperar Senha" error=error_message success=message>
            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="email">"Email:"</label>
                    <input
                        type="email"
                        id="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        required
                    />
                </div>
                <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                    {move || if is_loading.get() { "A enviar..." } else { "Enviar instruções" }}
                </button>
            </form>
            <div class="login-links">
                <A href="/login">"Voltar ao login"</A>
            </div>
        </AuthCard>
    }
}
