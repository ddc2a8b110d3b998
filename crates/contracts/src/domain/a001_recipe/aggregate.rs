use crate::domain::common::lenient;
use crate::shared::list_view::{ListDescriptor, ListEntity};
use crate::shared::multipart::MultipartFields;
use serde::{Deserialize, Serialize};

// ============================================================================
// Catalog constants
// ============================================================================

/// Main image plus up to three extra images
pub const MAX_RECIPE_IMAGES: usize = 4;

/// Fixed recipe categories as `(id, name)`; forms store the name
pub const RECIPE_CATEGORIES: &[(&str, &str)] = &[
    ("1", "Pequeno-almoço"),
    ("2", "Almoço"),
    ("3", "Jantar"),
    ("4", "Snacks"),
    ("5", "Sopas"),
    ("6", "Sobremesa"),
];

/// Units accepted on a recipe ingredient line
pub const RECIPE_LINE_UNITS: &[(&str, &str)] = &[
    ("gr", "gr (grama)"),
    ("ml", "ml (mililitro)"),
    ("un", "un (unidade)"),
    ("cl", "cl (colher)"),
];

/// Category name for a stored value (older records keep the numeric id)
pub fn category_name(category: &str) -> Option<&'static str> {
    RECIPE_CATEGORIES
        .iter()
        .find(|(id, name)| *id == category || *name == category)
        .map(|(_, name)| *name)
}

pub fn category_label(category: &str) -> &'static str {
    category_name(category).unwrap_or("Sem categoria")
}

pub const RECIPE_LIST: ListDescriptor = ListDescriptor {
    page_size: 5,
    text_fields: &["title"],
    exact_fields: &[],
    sort_keys: &[],
    default_sort: None,
};

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeNutritions {
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub proteins: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub carbohydrates: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub fats: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub calories: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub vitamin_c: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub calcium: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredientLine {
    #[serde(default, deserialize_with = "lenient::id_ref")]
    pub ingredient_id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub quantity: String,
    #[serde(default)]
    pub unit: String,
}

impl RecipeIngredientLine {
    pub fn is_complete(&self) -> bool {
        !self.ingredient_id.is_empty() && !self.quantity.trim().is_empty() && !self.unit.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(flatten, with = "lenient::entity_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub category_id: String,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub preparation_time: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub servings: Option<f64>,
    #[serde(default)]
    pub nutritions: RecipeNutritions,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredientLine>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub extra_images: Vec<String>,
    /// Missing status means active
    #[serde(default, deserialize_with = "lenient::opt_flag")]
    pub status: Option<bool>,
}

impl Recipe {
    pub fn is_active(&self) -> bool {
        self.status.unwrap_or(true)
    }

    pub fn category_label(&self) -> &'static str {
        category_label(&self.category_id)
    }

    /// `"4 dose(s) / 350 Kcal"` line shown under the title
    pub fn summary_line(&self) -> String {
        format!(
            "{} dose(s) / {} Kcal",
            lenient::format_opt(self.servings),
            lenient::format_number(self.nutritions.calories.unwrap_or(0.0))
        )
    }

    /// Stored image names, main image first
    pub fn stored_images(&self) -> Vec<String> {
        self.image
            .iter()
            .chain(self.extra_images.iter())
            .filter(|name| !name.is_empty())
            .take(MAX_RECIPE_IMAGES)
            .cloned()
            .collect()
    }
}

impl ListEntity for Recipe {
    fn list_id(&self) -> &str {
        &self.id
    }

    fn is_active(&self) -> bool {
        Recipe::is_active(self)
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "title" => Some(self.title.clone()),
            "categoryId" => Some(self.category_id.clone()),
            _ => None,
        }
    }
}

// ============================================================================
// Form (edit state)
// ============================================================================

/// Nutrition inputs kept as typed text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeNutritionsForm {
    pub proteins: String,
    pub carbohydrates: String,
    pub fats: String,
    pub calories: String,
    pub vitamin_c: String,
    pub calcium: String,
}

impl RecipeNutritionsForm {
    /// `(key, label)` in form order
    pub const FIELDS: &'static [(&'static str, &'static str)] = &[
        ("proteins", "Proteínas (g)"),
        ("carbohydrates", "Hidratos de carbono (g)"),
        ("fats", "Gorduras (g)"),
        ("calories", "Calorias (kcal)"),
        ("vitaminC", "Vitamina C (mg)"),
        ("calcium", "Cálcio (mg)"),
    ];

    pub fn get(&self, key: &str) -> String {
        match key {
            "proteins" => self.proteins.clone(),
            "carbohydrates" => self.carbohydrates.clone(),
            "fats" => self.fats.clone(),
            "calories" => self.calories.clone(),
            "vitaminC" => self.vitamin_c.clone(),
            "calcium" => self.calcium.clone(),
            _ => String::new(),
        }
    }

    pub fn set(&mut self, key: &str, value: String) {
        match key {
            "proteins" => self.proteins = value,
            "carbohydrates" => self.carbohydrates = value,
            "fats" => self.fats = value,
            "calories" => self.calories = value,
            "vitaminC" => self.vitamin_c = value,
            "calcium" => self.calcium = value,
            _ => {}
        }
    }

    fn from_nutritions(n: &RecipeNutritions) -> Self {
        Self {
            proteins: lenient::format_opt(n.proteins),
            carbohydrates: lenient::format_opt(n.carbohydrates),
            fats: lenient::format_opt(n.fats),
            calories: lenient::format_opt(n.calories),
            vitamin_c: lenient::format_opt(n.vitamin_c),
            calcium: lenient::format_opt(n.calcium),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeForm {
    pub title: String,
    pub category_id: String,
    pub preparation_time: String,
    pub servings: String,
    pub nutritions: RecipeNutritionsForm,
    pub ingredients: Vec<RecipeIngredientLine>,
    pub instructions: Vec<String>,
    pub status: Option<bool>,
}

impl Default for RecipeForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            category_id: String::new(),
            preparation_time: String::new(),
            servings: String::new(),
            nutritions: RecipeNutritionsForm::default(),
            ingredients: vec![RecipeIngredientLine::default()],
            instructions: vec![String::new()],
            status: None,
        }
    }
}

impl RecipeForm {
    /// New recipes are created active
    pub fn for_create() -> Self {
        Self {
            status: Some(true),
            ..Self::default()
        }
    }

    pub fn from_recipe(recipe: &Recipe) -> Self {
        let mut form = Self {
            title: recipe.title.clone(),
            category_id: category_name(&recipe.category_id)
                .map(str::to_string)
                .unwrap_or_default(),
            preparation_time: lenient::format_opt(recipe.preparation_time),
            servings: lenient::format_opt(recipe.servings),
            nutritions: RecipeNutritionsForm::from_nutritions(&recipe.nutritions),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
            status: None,
        };
        if form.ingredients.is_empty() {
            form.ingredients.push(RecipeIngredientLine::default());
        }
        if form.instructions.is_empty() {
            form.instructions.push(String::new());
        }
        form
    }

    pub fn add_ingredient(&mut self) {
        self.ingredients.push(RecipeIngredientLine::default());
    }

    pub fn remove_ingredient(&mut self, index: usize) {
        if index < self.ingredients.len() {
            self.ingredients.remove(index);
        }
    }

    pub fn add_instruction(&mut self) {
        self.instructions.push(String::new());
    }

    pub fn remove_instruction(&mut self, index: usize) {
        if index < self.instructions.len() {
            self.instructions.remove(index);
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("O título é obrigatório.".into());
        }
        if self.category_id.is_empty() {
            return Err("Selecione uma categoria".into());
        }
        if self.ingredients.iter().any(|line| !line.is_complete()) {
            return Err("Preencha todos os campos dos ingredientes.".into());
        }
        if self.instructions.iter().any(|step| step.trim().is_empty()) {
            return Err("Preencha todos os passos das instruções.".into());
        }
        Ok(())
    }

    /// Text parts of the create/update submission; structured fields are
    /// JSON-encoded, optional scalars are left out when empty.
    pub fn to_multipart(&self) -> Result<MultipartFields, String> {
        let mut fields = MultipartFields::new();
        fields
            .push_non_empty("title", &self.title)
            .push_non_empty("categoryId", &self.category_id)
            .push_non_empty("preparationTime", &self.preparation_time)
            .push_non_empty("servings", &self.servings);
        fields.push_json("nutritions", &self.nutritions)?;
        fields.push_json("ingredients", &self.ingredients)?;
        fields.push_json("instructions", &self.instructions)?;
        if let Some(status) = self.status {
            fields.push("status", status.to_string());
        }
        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "_id": "r1",
            "title": "Sopa de legumes",
            "categoryId": "Sopas",
            "preparationTime": "30",
            "servings": 4,
            "nutritions": {"calories": "120", "vitaminC": 12.5},
            "ingredients": [{"ingredientId": {"_id": "i1", "name": "Cenoura"}, "quantity": 200, "unit": "gr"}],
            "instructions": ["Cortar", "Cozer"],
            "image": "main.jpg",
            "extraImages": ["a.jpg", "b.jpg"]
        }"#
    }

    #[test]
    fn test_recipe_deserializes_loose_backend_payload() {
        let recipe: Recipe = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(recipe.id, "r1");
        assert_eq!(recipe.preparation_time, Some(30.0));
        assert_eq!(recipe.servings, Some(4.0));
        assert_eq!(recipe.nutritions.vitamin_c, Some(12.5));
        assert_eq!(recipe.ingredients[0].ingredient_id, "i1");
        assert_eq!(recipe.ingredients[0].quantity, "200");
        assert!(recipe.is_active());
        assert_eq!(recipe.summary_line(), "4 dose(s) / 120 Kcal");
        assert_eq!(recipe.stored_images(), vec!["main.jpg", "a.jpg", "b.jpg"]);
    }

    #[test]
    fn test_recipe_with_both_id_keys() {
        let recipes: Vec<Recipe> = serde_json::from_str(
            r#"[{"_id": "r1", "id": "r1", "title": "Bolo"}, {"id": "r2", "title": "Sopa"}]"#,
        )
        .unwrap();
        assert_eq!(recipes[0].id, "r1");
        assert_eq!(recipes[1].id, "r2");
    }

    #[test]
    fn test_explicit_inactive_status() {
        let recipe: Recipe =
            serde_json::from_str(r#"{"_id": "r2", "title": "Bolo", "status": false}"#).unwrap();
        assert!(!recipe.is_active());
        assert_eq!(recipe.category_label(), "Sem categoria");
    }

    #[test]
    fn test_category_label_accepts_id_or_name() {
        assert_eq!(category_label("3"), "Jantar");
        assert_eq!(category_label("Jantar"), "Jantar");
        assert_eq!(category_label("99"), "Sem categoria");
    }

    #[test]
    fn test_form_from_recipe_roundtrips_display_values() {
        let recipe: Recipe = serde_json::from_str(sample_json()).unwrap();
        let form = RecipeForm::from_recipe(&recipe);
        assert_eq!(form.category_id, "Sopas");
        assert_eq!(form.preparation_time, "30");
        assert_eq!(form.nutritions.calories, "120");
        assert_eq!(form.instructions.len(), 2);
        assert_eq!(form.status, None);
    }

    #[test]
    fn test_validate_requires_category() {
        let mut form = RecipeForm::for_create();
        form.title = "Bolo".into();
        form.ingredients[0] = RecipeIngredientLine {
            ingredient_id: "i1".into(),
            quantity: "2".into(),
            unit: "un".into(),
        };
        form.instructions[0] = "Misturar".into();
        assert_eq!(form.validate(), Err("Selecione uma categoria".to_string()));

        form.category_id = "Sobremesa".into();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_multipart_encodes_structured_fields_as_json() {
        let mut form = RecipeForm::for_create();
        form.title = "Bolo".into();
        form.category_id = "Sobremesa".into();
        form.instructions = vec!["Misturar".into()];
        form.ingredients.clear();
        form.nutritions.vitamin_c = "3".into();

        let fields = form.to_multipart().unwrap();
        assert_eq!(
            fields.keys(),
            vec!["title", "categoryId", "nutritions", "ingredients", "instructions", "status"]
        );
        assert_eq!(fields.get("instructions"), Some(r#"["Misturar"]"#));
        assert_eq!(fields.get("ingredients"), Some("[]"));
        assert!(fields.get("nutritions").unwrap().contains(r#""vitaminC":"3""#));
        assert_eq!(fields.get("status"), Some("true"));
    }

    #[test]
    fn test_remove_out_of_range_is_ignored() {
        let mut form = RecipeForm::default();
        form.remove_ingredient(5);
        form.remove_instruction(5);
        assert_eq!(form.ingredients.len(), 1);
        form.remove_instruction(0);
        assert!(form.instructions.is_empty());
    }
}
