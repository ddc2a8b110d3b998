//! Inline create/edit form shown in place of the ingredient table

use contracts::domain::a002_ingredient::{
    Ingredient, IngredientForm, IngredientNutritionsForm, INGREDIENT_TYPES, INGREDIENT_UNITS,
};
use leptos::prelude::*;
use web_sys::File;

use crate::domain::a002_ingredient::api::{IngredientDraft, IngredientsStore};
use crate::shared::api_utils::upload_url;
use crate::shared::data_store::DataStore;
use crate::shared::upload::{picked_file, preview_url, revoke_preview};

/// Outcome reported to the list page: the success message, or the error
pub type SaveOutcome = Result<String, String>;

#[derive(Clone, Copy)]
pub struct IngredientFormViewModel {
    /// `Some` when editing an existing ingredient
    pub id: RwSignal<Option<String>>,
    pub form: RwSignal<IngredientForm>,
    pub image_file: RwSignal<Option<File>, LocalStorage>,
    pub preview: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl IngredientFormViewModel {
    pub fn new(editing: Option<&Ingredient>) -> Self {
        let (id, form, preview) = match editing {
            Some(ingredient) => (
                Some(ingredient.id.clone()),
                IngredientForm::from_ingredient(ingredient),
                ingredient
                    .image
                    .as_deref()
                    .filter(|name| !name.is_empty())
                    .map(upload_url),
            ),
            None => (None, IngredientForm::default(), None),
        };
        Self {
            id: RwSignal::new(id),
            form: RwSignal::new(form),
            image_file: RwSignal::new_local(None),
            preview: RwSignal::new(preview),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with(Option::is_some)
    }

    pub fn pick_image(&self, file: File) {
        if let Some(url) = self.preview.get_untracked() {
            revoke_preview(&url);
        }
        self.preview.set(preview_url(&file));
        self.image_file.set(Some(file));
    }

    pub fn save_command(&self, on_done: Callback<SaveOutcome>) {
        let form = self.form.get_untracked();
        if let Err(msg) = form.validate() {
            self.error.set(Some(msg));
            return;
        }

        let vm = *self;
        let id = vm.id.get_untracked();
        let name = form.name.trim().to_string();
        let draft = IngredientDraft {
            form,
            image: vm.image_file.get_untracked(),
        };

        vm.error.set(None);
        vm.saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let (result, verb) = match id {
                Some(id) => (IngredientsStore.update(&id, draft).await, "atualizado"),
                None => (IngredientsStore.create(draft).await, "criado"),
            };
            vm.saving.set(false);
            let outcome = result.map(|saved| {
                let name = saved.map(|i| i.name).unwrap_or(name);
                format!("Ingrediente \"{}\" {} com sucesso.", name, verb)
            });
            on_done.run(outcome);
        });
    }
}

#[component]
pub fn IngredientFormPanel(
    editing: Option<Ingredient>,
    on_done: Callback<SaveOutcome>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = IngredientFormViewModel::new(editing.as_ref());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command(on_done);
    };

    view! {
        <div class="details-container ingredient-form" class:saving=move || vm.saving.get()>
            <h4>{move || if vm.is_edit_mode() { "Editar Ingrediente" } else { "Novo Ingrediente" }}</h4>

            {move || vm.error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <form class="details-form details-form--split" on:submit=on_submit>
                <div class="details-form__main form-grid">
                    <div class="form-group">
                        <label for="ingredient_name">"Nome"</label>
                        <input
                            id="ingredient_name"
                            prop:value=move || vm.form.with(|f| f.name.clone())
                            on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label for="ingredient_unit">"Unidade"</label>
                        <select
                            id="ingredient_unit"
                            prop:value=move || vm.form.with(|f| f.unit.clone())
                            on:change=move |ev| vm.form.update(|f| f.unit = event_target_value(&ev))
                            required
                        >
                            <option value="">"Selecionar unidade"</option>
                            {INGREDIENT_UNITS
                                .iter()
                                .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="ingredient_quantity">"Quantidade"</label>
                        <input
                            type="number"
                            id="ingredient_quantity"
                            prop:value=move || vm.form.with(|f| f.quantity.clone())
                            on:input=move |ev| vm.form.update(|f| f.quantity = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="ingredient_color">"Cor"</label>
                        <input
                            type="color"
                            id="ingredient_color"
                            title="Escolher cor"
                            prop:value=move || vm.form.with(|f| f.color.clone())
                            on:input=move |ev| vm.form.update(|f| f.color = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="ingredient_text_color">"Cor de Letra"</label>
                        <input
                            type="color"
                            id="ingredient_text_color"
                            title="Escolher cor da letra"
                            prop:value=move || vm.form.with(|f| f.text_color.clone())
                            on:input=move |ev| vm.form.update(|f| f.text_color = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="ingredient_type">"Tipo"</label>
                        <select
                            id="ingredient_type"
                            prop:value=move || vm.form.with(|f| f.kind.clone())
                            on:change=move |ev| vm.form.update(|f| f.kind = event_target_value(&ev))
                            required
                        >
                            <option value="">"Selecionar tipo"</option>
                            {INGREDIENT_TYPES
                                .iter()
                                .map(|kind| view! { <option value=*kind>{*kind}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    {IngredientNutritionsForm::FIELDS
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

                <div class="details-form__aside">
                    <label for="ingredient_image">"Imagem"</label>
                    <input
                        type="file"
                        id="ingredient_image"
                        accept="image/*"
                        on:change=move |ev| {
                            if let Some(file) = picked_file(&ev) {
                                vm.pick_image(file);
                            }
                        }
                    />
                    <div class="image-preview">
                        {move || match vm.preview.get() {
                            Some(src) => view! { <img src=src alt="Pré-visualização" /> }.into_any(),
                            None => view! { <span class="text-muted">"Pré-visualização da imagem"</span> }.into_any(),
                        }}
                    </div>
                </div>

                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" disabled=move || vm.saving.get()>
                        {move || match (vm.saving.get(), vm.is_edit_mode()) {
                            (true, _) => "A guardar...",
                            (false, true) => "Atualizar",
                            (false, false) => "Adicionar",
                        }}
                    </button>
                    <button
                        type="button"
                        class="btn btn-secondary"
                        disabled=move || vm.saving.get()
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancelar"
                    </button>
                </div>
            </form>
        </div>
    }
}
