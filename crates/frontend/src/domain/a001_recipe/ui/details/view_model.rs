use contracts::domain::a001_recipe::{ImageSlot, ImageSlots, RecipeForm};
use contracts::domain::a002_ingredient::Ingredient;
use leptos::prelude::*;
use web_sys::File;

use crate::domain::a001_recipe::api::{RecipeDraft, RecipesStore};
use crate::domain::a002_ingredient::api::IngredientsStore;
use crate::shared::api_utils::upload_url;
use crate::shared::data_store::DataStore;
use crate::shared::upload::{preview_url, revoke_preview};

/// ViewModel for the recipe create/edit form
#[derive(Clone, Copy)]
pub struct RecipeDetailsViewModel {
    pub id: RwSignal<Option<String>>,
    pub form: RwSignal<RecipeForm>,
    pub images: RwSignal<ImageSlots<File>, LocalStorage>,
    /// Display URL of each image slot, same order as `images`
    pub previews: RwSignal<Vec<String>>,
    /// Catalogue offered by the ingredient line selects
    pub catalog: RwSignal<Vec<Ingredient>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl RecipeDetailsViewModel {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            form: RwSignal::new(RecipeForm::for_create()),
            images: RwSignal::new_local(ImageSlots::default()),
            previews: RwSignal::new(Vec::new()),
            catalog: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with(Option::is_some)
    }

    pub fn load_catalog(&self) {
        let catalog = self.catalog;
        wasm_bindgen_futures::spawn_local(async move {
            match IngredientsStore.list().await {
                Ok(items) => catalog.set(items),
                Err(e) => log::error!("Failed to load ingredient catalogue: {}", e),
            }
        });
    }

    /// Loads the recipe; `on_missing` runs when it cannot be fetched
    pub fn load_if_needed(&self, id: Option<String>, on_missing: Callback<()>) {
        let Some(existing_id) = id else {
            return;
        };
        let vm = *self;
        vm.id.set(Some(existing_id.clone()));
        vm.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match RecipesStore.get(&existing_id).await {
                Ok(recipe) => {
                    let stored = recipe.stored_images();
                    vm.previews
                        .set(stored.iter().map(|name| upload_url(name)).collect());
                    vm.images.set(ImageSlots::from_stored(stored));
                    vm.form.set(RecipeForm::from_recipe(&recipe));
                    vm.loading.set(false);
                }
                Err(e) => {
                    log::error!("Failed to load recipe {}: {}", existing_id, e);
                    on_missing.run(());
                }
            }
        });
    }

    /// Puts `file` into slot `index`; ignored when the slot is not reachable
    pub fn pick_image(&self, index: usize, file: File) {
        let preview = preview_url(&file).unwrap_or_default();
        let mut accepted = false;
        self.images.update(|slots| accepted = slots.set(index, file));
        if !accepted {
            log::warn!("Image slot {} is not available", index);
            return;
        }
        self.previews.update(|previews| {
            if index < previews.len() {
                revoke_preview(&previews[index]);
                previews[index] = preview;
            } else {
                previews.push(preview);
            }
        });
    }

    pub fn remove_image(&self, index: usize) {
        self.images.update(|slots| slots.remove(index));
        self.previews.update(|previews| {
            if index < previews.len() {
                revoke_preview(&previews.remove(index));
            }
        });
    }

    /// Whether slot `index` holds an image not uploaded yet
    pub fn is_new_image(&self, index: usize) -> bool {
        self.images
            .with(|slots| matches!(slots.get(index), Some(ImageSlot::Local(_))))
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let form = self.form.get_untracked();
        if let Err(msg) = form.validate() {
            self.error.set(Some(msg));
            return;
        }

        let vm = *self;
        let draft = RecipeDraft {
            form,
            images: vm.images.get_untracked(),
        };
        let id = vm.id.get_untracked();

        vm.error.set(None);
        vm.saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = match id {
                Some(id) => RecipesStore.update(&id, draft).await,
                None => RecipesStore.create(draft).await,
            };
            vm.saving.set(false);
            match result {
                Ok(_) => on_saved.run(()),
                Err(e) => vm.error.set(Some(e)),
            }
        });
    }
}
