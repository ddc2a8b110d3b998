use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::auth_card::AuthCard;
use crate::system::auth::api;

#[component]
pub fn ResendActivationPage() -> impl IntoView {
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
            match api::resend_activation(email_val).await {
                Ok(msg) => set_message.set(Some(
                    msg.unwrap_or_else(|| "Link de ativação reenviado.".to_string()),
                )),
                Err(e) => set_error_message.set(Some(e)),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <AuthCard title="Reenviar Ativação" error=error_message success=message>
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
                    "Reenviar Link"
                </button>
            </form>
            <div class="login-links">
                <span>"Lembrou-se da senha? "</span>
                <A href="/login">"Entrar"</A>
            </div>
        </AuthCard>
    }
}
