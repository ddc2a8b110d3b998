use contracts::system::auth::{validate_user_creation, RegistrationForm};
use contracts::system::users::UserForm;
use leptos::prelude::*;
use web_sys::File;

use crate::shared::api_utils::upload_url;
use crate::shared::data_store::DataStore;
use crate::shared::upload::{preview_url, revoke_preview};
use crate::system::users::api::{UserDraft, UsersStore};

/// ViewModel for the user create/edit form
#[derive(Clone, Copy)]
pub struct UserDetailsViewModel {
    pub id: RwSignal<Option<String>>,
    pub form: RwSignal<UserForm>,
    pub password: RwSignal<String>,
    pub confirm_password: RwSignal<String>,
    pub photo_file: RwSignal<Option<File>, LocalStorage>,
    pub preview: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl UserDetailsViewModel {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            form: RwSignal::new(UserForm::default()),
            password: RwSignal::new(String::new()),
            confirm_password: RwSignal::new(String::new()),
            photo_file: RwSignal::new_local(None),
            preview: RwSignal::new(None),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with(Option::is_some)
    }

    /// Loads the user; `on_missing` runs when it cannot be fetched
    pub fn load_if_needed(&self, id: Option<String>, on_missing: Callback<()>) {
        let Some(existing_id) = id else {
            return;
        };
        let vm = *self;
        vm.id.set(Some(existing_id.clone()));
        vm.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match UsersStore.get(&existing_id).await {
                Ok(user) => {
                    vm.form.set(UserForm::from_user(&user));
                    vm.preview
                        .set(user.photo.as_deref().filter(|p| !p.is_empty()).map(upload_url));
                    vm.loading.set(false);
                }
                Err(e) => {
                    log::error!("Failed to load user {}: {}", existing_id, e);
                    on_missing.run(());
                }
            }
        });
    }

    pub fn pick_photo(&self, file: File) {
        self.release_preview();
        self.preview.set(preview_url(&file));
        self.photo_file.set(Some(file));
    }

    /// Clears the pending photo and the preview
    pub fn remove_photo(&self) {
        self.release_preview();
        self.preview.set(None);
        self.photo_file.set(None);
    }

    fn release_preview(&self) {
        if let Some(url) = self.preview.get_untracked() {
            revoke_preview(&url);
        }
    }

    fn validate(&self) -> Result<(), String> {
        let form = self.form.get_untracked();
        if self.is_edit_mode() {
            return form.validate();
        }
        validate_user_creation(&RegistrationForm {
            name: form.name,
            email: form.email,
            password: self.password.get_untracked(),
            confirm_password: self.confirm_password.get_untracked(),
        })
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        if let Err(msg) = self.validate() {
            self.error.set(Some(msg));
            return;
        }

        let vm = *self;
        let draft = UserDraft {
            form: vm.form.get_untracked(),
            password: vm.password.get_untracked(),
            photo: vm.photo_file.get_untracked(),
        };
        let id = vm.id.get_untracked();

        vm.error.set(None);
        vm.saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = match id {
                Some(id) => UsersStore.update(&id, draft).await,
                None => UsersStore.create(draft).await,
            };
            vm.saving.set(false);
            match result {
                Ok(_) => on_saved.run(()),
                Err(e) => vm.error.set(Some(e)),
            }
        });
    }
}
