use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn AccountActivatedPage() -> impl IntoView {
    view! {
        <div class="account-activated">
            <h1>"✅ Conta ativada com sucesso!"</h1>
            <p>"Já pode fazer login na aplicação Menument."</p>
            <A href="/login">"Entrar"</A>
        </div>
    }
}
