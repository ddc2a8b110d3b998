use crate::shared::components::ui::Badge;
use leptos::prelude::*;

/// Inline active/inactive toggle with its badge, as shown in list rows
#[component]
pub fn StatusSwitch(
    #[prop(into)]
    active: Signal<bool>,
    /// Called with the current value; the caller flips it remotely
    on_toggle: Callback<bool>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    view! {
        <div class="status-switch" on:click=|e| e.stop_propagation()>
            <label class="status-switch__track">
                <input
                    type="checkbox"
                    class="status-switch__input"
                    prop:checked=move || active.get()
                    prop:disabled=move || disabled.get().unwrap_or(false)
                    on:change=move |_| on_toggle.run(active.get_untracked())
                />
                <span class="status-switch__slider"></span>
            </label>
            {move || {
                if active.get() {
                    view! { <Badge variant="success">"Ativo"</Badge> }.into_any()
                } else {
                    view! { <Badge variant="error">"Inativo"</Badge> }.into_any()
                }
            }}
        </div>
    }
}
