use contracts::domain::a001_recipe::{
    RecipeNutritionsForm, MAX_RECIPE_IMAGES, RECIPE_CATEGORIES, RECIPE_LINE_UNITS,
};
use contracts::domain::a002_ingredient::Ingredient;
use leptos::prelude::*;

use super::view_model::RecipeDetailsViewModel;
use crate::shared::upload::picked_file;

#[component]
fn IngredientLines(vm: RecipeDetailsViewModel) -> impl IntoView {
    let line_count = move || vm.form.with(|f| f.ingredients.len());

    view! {
        <section class="form-section">
            <h5>"Ingredientes"</h5>
            {move || {
                (0..line_count())
                    .map(|index| {
                        view! {
                            <div class="form-row form-row--line">
                                <select
                                    class="form-select"
                                    prop:value=move || vm.form.with(|f| {
                                        f.ingredients.get(index).map(|l| l.ingredient_id.clone()).unwrap_or_default()
                                    })
                                    on:change=move |ev| vm.form.update(|f| {
                                        if let Some(line) = f.ingredients.get_mut(index) {
                                            line.ingredient_id = event_target_value(&ev);
                                        }
                                    })
                                    required
                                >
                                    <option value="">"Selecionar ingrediente"</option>
                                    <For
                                        each=move || vm.catalog.get()
                                        key=|ing: &Ingredient| ing.id.clone()
                                        children=|ing: Ingredient| view! { <option value=ing.id.clone()>{ing.picker_label()}</option> }
                                    />
                                </select>
                                <input
                                    type="number"
                                    class="form-control"
                                    placeholder="Quantidade"
                                    prop:value=move || vm.form.with(|f| {
                                        f.ingredients.get(index).map(|l| l.quantity.clone()).unwrap_or_default()
                                    })
                                    on:input=move |ev| vm.form.update(|f| {
                                        if let Some(line) = f.ingredients.get_mut(index) {
                                            line.quantity = event_target_value(&ev);
                                        }
                                    })
                                    required
                                />
                                <select
                                    class="form-select"
                                    prop:value=move || vm.form.with(|f| {
                                        f.ingredients.get(index).map(|l| l.unit.clone()).unwrap_or_default()
                                    })
                                    on:change=move |ev| vm.form.update(|f| {
                                        if let Some(line) = f.ingredients.get_mut(index) {
                                            line.unit = event_target_value(&ev);
                                        }
                                    })
                                    required
                                >
                                    <option value="">"Unidade"</option>
                                    {RECIPE_LINE_UNITS
                                        .iter()
                                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                        .collect_view()}
                                </select>
                                <button
                                    type="button"
                                    class="btn btn-outline-danger"
                                    on:click=move |_| vm.form.update(|f| f.remove_ingredient(index))
                                >
                                    "Remover"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
            <button
                type="button"
                class="btn btn-outline-primary btn-sm"
                on:click=move |_| vm.form.update(|f| f.add_ingredient())
            >
                "+ Adicionar Ingrediente"
            </button>
        </section>
    }
}

#[component]
fn InstructionSteps(vm: RecipeDetailsViewModel) -> impl IntoView {
    let step_count = move || vm.form.with(|f| f.instructions.len());

    view! {
        <section class="form-section">
            <h5>"Instruções"</h5>
            {move || {
                (0..step_count())
                    .map(|index| {
                        view! {
                            <div class="form-row form-row--line">
                                <textarea
                                    class="form-control"
                                    rows="2"
                                    placeholder=format!("Passo {}", index + 1)
                                    prop:value=move || vm.form.with(|f| f.instructions.get(index).cloned().unwrap_or_default())
                                    on:input=move |ev| vm.form.update(|f| {
                                        if let Some(step) = f.instructions.get_mut(index) {
                                            *step = event_target_value(&ev);
                                        }
                                    })
                                    required
                                ></textarea>
                                <button
                                    type="button"
                                    class="btn btn-outline-danger"
                                    on:click=move |_| vm.form.update(|f| f.remove_instruction(index))
                                >
                                    "Remover"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
            <button
                type="button"
                class="btn btn-outline-primary btn-sm"
                on:click=move |_| vm.form.update(|f| f.add_instruction())
            >
                "+ Adicionar Passo"
            </button>
        </section>
    }
}

/// Fixed grid of image slots; slot 0 is the main image
#[component]
fn ImageSlotsEditor(vm: RecipeDetailsViewModel) -> impl IntoView {
    view! {
        <section class="form-section">
            <h5>{format!("Imagens (máx. {})", MAX_RECIPE_IMAGES)}</h5>
            <div class="image-slots">
                {(0..MAX_RECIPE_IMAGES)
                    .map(|index| {
                        let input_id = format!("image-input-{}", index);
                        let label_for = input_id.clone();
                        let preview = move || vm.previews.with(|p| p.get(index).cloned());
                        // Slots fill in order
                        let reachable = move || vm.previews.with(|p| index <= p.len());
                        view! {
                            <div class="image-slot-wrapper">
                                <div
                                    class="image-slot"
                                    style=move || preview()
                                        .map(|src| format!("background-image: url({});", src))
                                        .unwrap_or_default()
                                >
                                    <Show when=move || preview().is_none()>
                                        <span class="text-muted">{format!("Imagem {}", index + 1)}</span>
                                    </Show>
                                </div>
                                <input
                                    id=input_id
                                    type="file"
                                    accept="image/*"
                                    style="display: none;"
                                    on:change=move |ev| {
                                        if let Some(file) = picked_file(&ev) {
                                            vm.pick_image(index, file);
                                        }
                                    }
                                />
                                <Show when=reachable>
                                    <label for=label_for.clone() class="btn btn-outline-primary btn-sm">
                                        "Carregar"
                                    </label>
                                </Show>
                                <Show when=move || preview().is_some()>
                                    <button
                                        type="button"
                                        class="btn btn-outline-danger btn-sm"
                                        on:click=move |_| vm.remove_image(index)
                                    >
                                        "Remover"
                                    </button>
                                    <Show when=move || vm.is_new_image(index)>
                                        <small class="text-muted">"Nova"</small>
                                    </Show>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn RecipeDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
    /// Runs when an edited recipe cannot be loaded
    on_missing: Callback<()>,
) -> impl IntoView {
    let vm = RecipeDetailsViewModel::new();
    vm.load_catalog();
    vm.load_if_needed(id, on_missing);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command(on_saved);
    };

    view! {
        <Show
            when=move || !vm.loading.get()
            fallback=|| view! { <p class="loading">"Carregando receita..."</p> }
        >
            <div class="details-container recipe-details">
                <div class="details-header">
                    <h3>{move || if vm.is_edit_mode() { "Editar Receita" } else { "Nova Receita" }}</h3>
                </div>

                {move || vm.error.get().map(|e| view! { <div class="error-message">{e}</div> })}

                <form class="details-form" on:submit=on_submit>
                    <section class="form-section">
                        <h5>"Informações Gerais"</h5>
                        <div class="form-group">
                            <label for="title">"Título"</label>
                            <input
                                type="text"
                                id="title"
                                prop:value=move || vm.form.with(|f| f.title.clone())
                                on:input=move |ev| vm.form.update(|f| f.title = event_target_value(&ev))
                                required
                            />
                        </div>
                        <div class="form-row">
                            <div class="form-group">
                                <label for="category">"Categoria"</label>
                                <select
                                    id="category"
                                    prop:value=move || vm.form.with(|f| f.category_id.clone())
                                    on:change=move |ev| vm.form.update(|f| f.category_id = event_target_value(&ev))
                                >
                                    <option value="">"Selecione uma categoria"</option>
                                    {RECIPE_CATEGORIES
                                        .iter()
                                        .map(|(_, name)| view! { <option value=*name>{*name}</option> })
                                        .collect_view()}
                                </select>
                            </div>
                            <div class="form-group">
                                <label for="preparation_time">"Tempo de Preparação (min)"</label>
                                <input
                                    type="number"
                                    id="preparation_time"
                                    prop:value=move || vm.form.with(|f| f.preparation_time.clone())
                                    on:input=move |ev| vm.form.update(|f| f.preparation_time = event_target_value(&ev))
                                />
                            </div>
                            <div class="form-group">
                                <label for="servings">"Porções"</label>
                                <input
                                    type="number"
                                    id="servings"
                                    prop:value=move || vm.form.with(|f| f.servings.clone())
                                    on:input=move |ev| vm.form.update(|f| f.servings = event_target_value(&ev))
                                />
                            </div>
                        </div>
                    </section>

                    <section class="form-section">
                        <h5>"Informações Nutricionais"</h5>
                        <div class="form-grid">
                            {RecipeNutritionsForm::FIELDS
                                .iter()
                                .map(|(key, label)| {
                                    let key = *key;
                                    view! {
                                        <div class="form-group">
                                            <label>{*label}</label>
                                            <input
                                                type="number"
                                                step="any"
                                                prop:value=move || vm.form.with(|f| f.nutritions.get(key))
                                                on:input=move |ev| vm.form.update(|f| f.nutritions.set(key, event_target_value(&ev)))
                                            />
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </section>

                    <IngredientLines vm=vm />
                    <InstructionSteps vm=vm />
                    <ImageSlotsEditor vm=vm />

                    <div class="form-actions">
                        <button type="button" class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                            "Cancelar"
                        </button>
                        <button type="submit" class="btn btn-primary" disabled=move || vm.saving.get()>
                            {move || match (vm.saving.get(), vm.is_edit_mode()) {
                                (true, _) => "A guardar...",
                                (false, true) => "Atualizar",
                                (false, false) => "Guardar",
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
