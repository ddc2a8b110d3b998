use leptos::prelude::*;

/// Centered card used by every public auth screen
#[component]
pub fn AuthCard(
    #[prop(into)]
    title: String,
    /// Error banner content
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Success banner content
    #[prop(optional, into)]
    success: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Backoffice"</h1>
                <h2>{title}</h2>

                {move || error.get().map(|message| view! {
                    <div class="error-message">{message}</div>
                })}
                {move || success.get().map(|message| view! {
                    <div class="success-message">{message}</div>
                })}

                {children()}
            </div>
        </div>
    }
}
