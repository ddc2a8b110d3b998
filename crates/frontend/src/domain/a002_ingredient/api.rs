use contracts::domain::a002_ingredient::{Ingredient, IngredientForm};
use contracts::domain::common::StatusUpdate;
use web_sys::File;

use crate::shared::api_utils::{get_json, parse_optional, send_empty, send_form, send_json, Method};
use crate::shared::data_store::DataStore;
use crate::shared::upload::build_form_data;

pub struct IngredientDraft {
    pub form: IngredientForm,
    pub image: Option<File>,
}

impl IngredientDraft {
    fn to_form_data(&self) -> Result<web_sys::FormData, String> {
        let fields = self.form.to_multipart();
        let files: Vec<(&str, &File)> = self.image.iter().map(|file| ("image", file)).collect();
        build_form_data(&fields, &files)
    }
}

fn ingredient_path(id: &str) -> String {
    format!("/ingredients/{}", urlencoding::encode(id))
}

#[derive(Default)]
pub struct IngredientsStore;

impl DataStore for IngredientsStore {
    type Item = Ingredient;
    type Draft = IngredientDraft;

    const KIND: &'static str = "ingredients";
    const SUPPORTS_DELETE_ALL: bool = true;

    async fn list(&self) -> Result<Vec<Ingredient>, String> {
        get_json("/ingredients", "Erro ao carregar ingredientes").await
    }

    async fn get(&self, id: &str) -> Result<Ingredient, String> {
        get_json(&ingredient_path(id), "Ingrediente não encontrado.").await
    }

    async fn create(&self, draft: IngredientDraft) -> Result<Option<Ingredient>, String> {
        let body = draft.to_form_data()?;
        let response = send_form(Method::Post, "/ingredients", body, "Erro ao criar ingrediente").await?;
        Ok(parse_optional(&response))
    }

    async fn update(&self, id: &str, draft: IngredientDraft) -> Result<Option<Ingredient>, String> {
        let body = draft.to_form_data()?;
        let response = send_form(
            Method::Put,
            &ingredient_path(id),
            body,
            "Erro ao atualizar ingrediente",
        )
        .await?;
        Ok(parse_optional(&response))
    }

    async fn delete(&self, id: &str) -> Result<(), String> {
        send_empty(Method::Delete, &ingredient_path(id), "Erro ao eliminar ingrediente").await?;
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), String> {
        send_empty(
            Method::Delete,
            "/ingredients/all",
            "Erro ao eliminar todos os ingredientes",
        )
        .await?;
        Ok(())
    }

    async fn toggle_status(&self, id: &str, current: bool) -> Result<(), String> {
        send_json(
            Method::Put,
            &ingredient_path(id),
            &StatusUpdate::toggled(current),
            "Erro ao atualizar status",
        )
        .await?;
        Ok(())
    }
}
