use contracts::system::users::{UserStatus, PERFIS};
use leptos::prelude::*;

use super::view_model::UserDetailsViewModel;
use crate::shared::upload::picked_file;

#[component]
pub fn UserDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
    /// Runs when an edited user cannot be loaded
    on_missing: Callback<()>,
) -> impl IntoView {
    let vm = UserDetailsViewModel::new();
    vm.load_if_needed(id, on_missing);

    let photo_input = NodeRef::<leptos::html::Input>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command(on_saved);
    };

    view! {
        <Show
            when=move || !vm.loading.get()
            fallback=|| view! { <p class="loading">"A carregar utilizador..."</p> }
        >
            <div class="details-container user-details">
                <div class="details-header">
                    <h3>{move || if vm.is_edit_mode() { "Editar Utilizador" } else { "Novo Utilizador" }}</h3>
                </div>

                {move || vm.error.get().map(|e| view! { <div class="error-message">{e}</div> })}

                <form class="details-form details-form--split" on:submit=on_submit>
                    <div class="details-form__main">
                        <div class="form-group">
                            <label for="name">"Nome"</label>
                            <input
                                type="text"
                                id="name"
                                prop:value=move || vm.form.with(|f| f.name.clone())
                                on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                                required
                            />
                        </div>

                        <div class="form-group">
                            <label for="email">"Email"</label>
                            <input
                                type="email"
                                id="email"
                                prop:value=move || vm.form.with(|f| f.email.clone())
                                on:input=move |ev| vm.form.update(|f| f.email = event_target_value(&ev))
                                required
                            />
                        </div>

                        <Show when=move || !vm.is_edit_mode()>
                            <div class="form-group">
                                <label for="password">"Senha"</label>
                                <input
                                    type="password"
                                    id="password"
                                    prop:value=move || vm.password.get()
                                    on:input=move |ev| vm.password.set(event_target_value(&ev))
                                    required
                                />
                            </div>
                            <div class="form-group">
                                <label for="confirm_password">"Confirmar Senha"</label>
                                <input
                                    type="password"
                                    id="confirm_password"
                                    prop:value=move || vm.confirm_password.get()
                                    on:input=move |ev| vm.confirm_password.set(event_target_value(&ev))
                                    required
                                />
                            </div>
                        </Show>

                        <div class="form-group">
                            <label for="perfil">"Perfil"</label>
                            <select
                                id="perfil"
                                prop:value=move || vm.form.with(|f| f.perfil.clone())
                                on:change=move |ev| vm.form.update(|f| f.perfil = event_target_value(&ev))
                            >
                                {PERFIS
                                    .iter()
                                    .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                    .collect_view()}
                            </select>
                        </div>

                        <div class="form-group">
                            <label for="status">"Status"</label>
                            <select
                                id="status"
                                prop:value=move || vm.form.with(|f| f.status.as_str())
                                on:change=move |ev| {
                                    vm.form.update(|f| f.status = UserStatus::from(event_target_value(&ev)))
                                }
                            >
                                <option value="active">"Ativo"</option>
                                <option value="inactive">"Inativo"</option>
                            </select>
                        </div>

                        <div class="form-actions">
                            <button type="button" class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                                "Cancelar"
                            </button>
                            <button type="submit" class="btn btn-primary" disabled=move || vm.saving.get()>
                                {move || if vm.saving.get() { "A guardar..." } else { "Salvar" }}
                            </button>
                        </div>
                    </div>

                    <div class="details-form__aside">
                        <label>"Foto de Perfil"</label>
                        <div class="form-actions form-actions--start">
                            <button
                                type="button"
                                class="btn btn-outline-primary"
                                on:click=move |_| {
                                    if let Some(input) = photo_input.get() {
                                        input.click();
                                    }
                                }
                            >
                                "Selecionar Foto"
                            </button>
                            <Show when=move || vm.preview.with(Option::is_some)>
                                <button
                                    type="button"
                                    class="btn btn-outline-danger"
                                    on:click=move |_| vm.remove_photo()
                                >
                                    "Remover"
                                </button>
                            </Show>
                        </div>
                        <input
                            node_ref=photo_input
                            type="file"
                            accept="image/*"
                            style="display: none;"
                            on:change=move |ev| {
                                if let Some(file) = picked_file(&ev) {
                                    vm.pick_photo(file);
                                }
                            }
                        />
                        <div class="image-preview">
                            {move || match vm.preview.get() {
                                Some(src) => view! { <img src=src alt="Preview" /> }.into_any(),
                                None => view! { <span class="text-muted">"Pré-visualização da imagem"</span> }.into_any(),
                            }}
                        </div>
                    </div>
                </form>
            </div>
        </Show>
    }
}
