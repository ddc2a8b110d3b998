use contracts::system::auth::{validate_registration, RegisterRequest, RegistrationForm};
use contracts::system::users::UserStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::auth_card::AuthCard;
use crate::shared::navigation::use_navigator;
use crate::system::auth::api;

const SUCCESS_MESSAGE: &str = "Conta criada com sucesso! Verifique o seu email para ativar a conta.";

/// Self-registration; the account stays inactive until the email link is used
#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = RwSignal::new(RegistrationForm::default());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (success_message, set_success_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);
    let navigator = use_navigator();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(None);
        set_success_message.set(None);

        let current = form.get_untracked();
        if let Err(e) = validate_registration(&current) {
            set_error_message.set(Some(e));
            return;
        }

        let request = RegisterRequest {
            name: current.name,
            email: current.email,
            password: current.password,
            status: UserStatus::Inactive,
            perfil: "user".to_string(),
        };

        set_is_loading.set(true);
        spawn_local(async move {
            match api::register(&request).await {
                Ok(_) => {
                    log::info!("Account registered for {}", request.email);
                    set_success_message.set(Some(SUCCESS_MESSAGE.to_string()));
                    navigator.go_later("/login");
                }
                Err(e) => set_error_message.set(Some(e)),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <AuthCard title="Criar Conta" error=error_message success=success_message>
            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="name">"Nome:"</label>
                    <input
                        type="text"
                        id="name"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        required
                    />
                </div>
                <div class="form-group">
                    <label for="email">"Email:"</label>
                    <input
                        type="email"
                        id="email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        required
                    />
                </div>
                <div class="form-group">
                    <label for="password">"Senha:"</label>
                    <input
                        type="password"
                        id="password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        required
                    />
                </div>
                <div class="form-group">
                    <label for="confirm_password">"Confirmar Senha:"</label>
                    <input
                        type="password"
                        id="confirm_password"
                        prop:value=move || form.with(|f| f.confirm_password.clone())
                        on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                        required
                    />
                </div>
                <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                    {move || if is_loading.get() { "A criar conta..." } else { "Criar Conta" }}
                </button>
            </form>
            <div class="login-links">
                <span>"Já tem conta? "</span>
                <A href="/login">"Entrar"</A>
            </div>
        </AuthCard>
    }
}
