use contracts::system::auth::is_not_activated_message;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::auth_card::AuthCard;
use crate::shared::navigation::use_navigator;
use crate::system::auth::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (not_activated, set_not_activated) = signal(false);
    let (is_loading, set_is_loading) = signal(false);

    let auth = use_auth();
    let navigator = use_navigator();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get_untracked();
        let password_val = password.get_untracked();

        set_is_loading.set(true);
        set_error_message.set(None);
        set_not_activated.set(false);

        spawn_local(async move {
            match do_login(auth, email_val, password_val).await {
                Ok(()) => navigator.go("/dashboard"),
                Err(e) if is_not_activated_message(&e) => set_not_activated.set(true),
                Err(e) => set_error_message.set(Some(e)),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <AuthCard title="Entrar" error=error_message>
            <Show when=move || not_activated.get()>
                <div class="error-message">
                    "A conta ainda não foi ativada."
                    <br />
                    <A href="/resend-activation">"Reenviar link de ativação"</A>
                </div>
            </Show>

            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="email">"Email:"</label>
                    <input
                        type="email"
                        id="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        required
                        disabled=move || is_loading.get()
                    />
                </div>

                <div class="form-group">
                    <label for="password">"Senha:"</label>
                    <input
                        type="password"
                        id="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        required
                        disabled=move || is_loading.get()
                    />
                    <div class="login-links login-links--right">
                        <A href="/forgot-password">"Esqueceu a senha?"</A>
                    </div>
                </div>

                <button
                    type="submit"
                    class="btn-primary"
                    disabled=move || is_loading.get()
                >
                    {move || if is_loading.get() { "A entrar..." } else { "Entrar" }}
                </button>
            </form>

            <div class="login-links">
                <span>"Ainda não tem conta? "</span>
                <A href="/register">"Criar Conta"</A>
            </div>
            <div class="login-links">
                <A href="/resend-activation">"Reenviar link de ativação"</A>
            </div>
        </AuthCard>
    }
}
