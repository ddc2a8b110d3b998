use contracts::domain::a001_recipe::{ImageSlots, Recipe, RecipeForm};
use contracts::domain::common::StatusUpdate;
use web_sys::File;

use crate::shared::api_utils::{get_json, parse_optional, send_empty, send_form, send_json, Method};
use crate::shared::data_store::DataStore;
use crate::shared::upload::build_form_data;

/// Form state plus the image slots; only locally picked files are uploaded
pub struct RecipeDraft {
    pub form: RecipeForm,
    pub images: ImageSlots<File>,
}

impl RecipeDraft {
    fn to_form_data(&self) -> Result<web_sys::FormData, String> {
        let fields = self.form.to_multipart()?;
        let mut files: Vec<(&str, &File)> = Vec::new();
        if let Some(main) = self.images.new_main() {
            files.push(("image", main));
        }
        for extra in self.images.new_extras() {
            files.push(("extraImages", extra));
        }
        build_form_data(&fields, &files)
    }
}

fn recipe_path(id: &str) -> String {
    format!("/recipes/{}", urlencoding::encode(id))
}

#[derive(Default)]
pub struct RecipesStore;

impl DataStore for RecipesStore {
    type Item = Recipe;
    type Draft = RecipeDraft;

    const KIND: &'static str = "recipes";
    const SUPPORTS_DELETE_ALL: bool = true;

    async fn list(&self) -> Result<Vec<Recipe>, String> {
        get_json("/recipes", "Erro ao carregar receitas").await
    }

    async fn get(&self, id: &str) -> Result<Recipe, String> {
        get_json(&recipe_path(id), "Receita não encontrada.").await
    }

    async fn create(&self, draft: RecipeDraft) -> Result<Option<Recipe>, String> {
        let body = draft.to_form_data()?;
        let response = send_form(Method::Post, "/recipes", body, "Erro ao criar receita").await?;
        Ok(parse_optional(&response))
    }

    async fn update(&self, id: &str, draft: RecipeDraft) -> Result<Option<Recipe>, String> {
        let body = draft.to_form_data()?;
        let response =
            send_form(Method::Put, &recipe_path(id), body, "Erro ao atualizar receita").await?;
        Ok(parse_optional(&response))
    }

    async fn delete(&self, id: &str) -> Result<(), String> {
        send_empty(Method::Delete, &recipe_path(id), "Erro ao eliminar receita").await?;
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), String> {
        send_empty(Method::Delete, "/recipes/all", "Erro ao eliminar todas as receitas").await?;
        Ok(())
    }

    async fn toggle_status(&self, id: &str, current: bool) -> Result<(), String> {
        send_json(
            Method::Put,
            &recipe_path(id),
            &StatusUpdate::toggled(current),
            "Erro ao atualizar status",
        )
        .await?;
        Ok(())
    }
}
