use crate::domain::common::lenient;
use crate::shared::list_view::{ListDescriptor, ListEntity};
use crate::shared::multipart::MultipartFields;
use serde::{Deserialize, Serialize};

pub const INGREDIENT_TYPES: &[&str] = &[
    "Cereais e derivados",
    "Tubérculos",
    "Hortícolas",
    "Frutas",
    "Lacticínios",
    "Carnes, peixe e ovos",
    "Leguminosas",
    "Gorduras e óleos",
];

/// `(value, label)` of the catalogue units
pub const INGREDIENT_UNITS: &[(&str, &str)] = &[
    ("g", "Grama (g)"),
    ("ml", "Mililitro (ml)"),
    ("un", "Unidade (un)"),
];

pub const DEFAULT_COLOR: &str = "#000000";

pub const INGREDIENT_LIST: ListDescriptor = ListDescriptor {
    page_size: 10,
    text_fields: &["name"],
    exact_fields: &["type"],
    sort_keys: &[],
    default_sort: None,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngredientNutritions {
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub proteins: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub calories: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub fats: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub carbohydrates: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub fiber: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    #[serde(flatten, with = "lenient::entity_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub text_color: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub nutritions: IngredientNutritions,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_flag")]
    pub status: Option<bool>,
}

impl Ingredient {
    pub fn is_active(&self) -> bool {
        self.status.unwrap_or(true)
    }

    /// `"52 Kcal / 100 g"`
    pub fn summary_line(&self) -> String {
        format!(
            "{} Kcal / {} {}",
            lenient::format_opt(self.nutritions.calories),
            lenient::format_opt(self.quantity),
            self.unit
        )
    }

    /// Option label used by the recipe ingredient picker
    pub fn picker_label(&self) -> String {
        if self.unit.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.unit)
        }
    }
}

impl ListEntity for Ingredient {
    fn list_id(&self) -> &str {
        &self.id
    }

    fn is_active(&self) -> bool {
        Ingredient::is_active(self)
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.clone()),
            "type" => Some(self.kind.clone()),
            "unit" => Some(self.unit.clone()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientNutritionsForm {
    pub proteins: String,
    pub calories: String,
    pub fats: String,
    pub carbohydrates: String,
    pub fiber: String,
}

impl IngredientNutritionsForm {
    /// `(key, label)` in form order
    pub const FIELDS: &'static [(&'static str, &'static str)] = &[
        ("calories", "Calorias (kcal)"),
        ("proteins", "Proteínas (g)"),
        ("carbohydrates", "Hidratos de carbono (g)"),
        ("fats", "Gordura (g)"),
        ("fiber", "Fibras (g)"),
    ];

    pub fn get(&self, key: &str) -> String {
        match key {
            "proteins" => self.proteins.clone(),
            "calories" => self.calories.clone(),
            "fats" => self.fats.clone(),
            "carbohydrates" => self.carbohydrates.clone(),
            "fiber" => self.fiber.clone(),
            _ => String::new(),
        }
    }

    pub fn set(&mut self, key: &str, value: String) {
        match key {
            "proteins" => self.proteins = value,
            "calories" => self.calories = value,
            "fats" => self.fats = value,
            "carbohydrates" => self.carbohydrates = value,
            "fiber" => self.fiber = value,
            _ => {}
        }
    }
}

/// Edit state of the inline ingredient form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientForm {
    pub name: String,
    pub unit: String,
    pub quantity: String,
    pub color: String,
    pub text_color: String,
    pub kind: String,
    pub nutritions: IngredientNutritionsForm,
    pub status: Option<bool>,
}

impl Default for IngredientForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            unit: String::new(),
            quantity: String::new(),
            color: DEFAULT_COLOR.to_string(),
            text_color: DEFAULT_COLOR.to_string(),
            kind: String::new(),
            nutritions: IngredientNutritionsForm::default(),
            status: None,
        }
    }
}

impl IngredientForm {
    pub fn from_ingredient(ingredient: &Ingredient) -> Self {
        let n = &ingredient.nutritions;
        Self {
            name: ingredient.name.clone(),
            unit: ingredient.unit.clone(),
            quantity: lenient::format_opt(ingredient.quantity),
            color: non_empty_or_default(ingredient.color.as_deref()),
            text_color: non_empty_or_default(ingredient.text_color.as_deref()),
            kind: ingredient.kind.clone(),
            nutritions: IngredientNutritionsForm {
                proteins: lenient::format_opt(n.proteins),
                calories: lenient::format_opt(n.calories),
                fats: lenient::format_opt(n.fats),
                carbohydrates: lenient::format_opt(n.carbohydrates),
                fiber: lenient::format_opt(n.fiber),
            },
            status: None,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("O nome é obrigatório.".into());
        }
        Ok(())
    }

    /// Text parts of the submission; nutrition values use dotted keys
    pub fn to_multipart(&self) -> MultipartFields {
        let mut fields = MultipartFields::new();
        fields
            .push("name", self.name.trim())
            .push("unit", self.unit.as_str())
            .push("quantity", self.quantity.as_str())
            .push("color", self.color.as_str())
            .push("textColor", self.text_color.as_str())
            .push("type", self.kind.as_str());
        for (key, _) in IngredientNutritionsForm::FIELDS {
            fields.push(format!("nutritions.{}", key), self.nutritions.get(key));
        }
        if let Some(status) = self.status {
            fields.push("status", status.to_string());
        }
        fields
    }
}

fn non_empty_or_default(color: Option<&str>) -> String {
    color
        .filter(|c| !c.trim().is_empty())
        .unwrap_or(DEFAULT_COLOR)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arroz() -> Ingredient {
        serde_json::from_str(
            r##"{
                "_id": "i1",
                "name": "Arroz",
                "unit": "g",
                "quantity": "100",
                "color": "#ffffff",
                "type": "Cereais e derivados",
                "nutritions": {"calories": 130, "proteins": "2.7", "fiber": ""},
                "status": true
            }"##,
        )
        .unwrap()
    }

    #[test]
    fn test_ingredient_deserializes() {
        let ingredient = arroz();
        assert_eq!(ingredient.kind, "Cereais e derivados");
        assert_eq!(ingredient.quantity, Some(100.0));
        assert_eq!(ingredient.nutritions.proteins, Some(2.7));
        assert_eq!(ingredient.nutritions.fiber, None);
        assert_eq!(ingredient.summary_line(), "130 Kcal / 100 g");
        assert_eq!(ingredient.picker_label(), "Arroz (g)");
    }

    #[test]
    fn test_ingredient_with_both_id_keys() {
        let ingredient: Ingredient =
            serde_json::from_str(r#"{"_id": "i1", "id": "i1", "name": "Sal", "type": "Outros"}"#).unwrap();
        assert_eq!(ingredient.id, "i1");
        assert_eq!(ingredient.kind, "Outros");
    }

    #[test]
    fn test_type_is_an_exact_list_field() {
        let ingredient = arroz();
        assert_eq!(ingredient.field_value("type").as_deref(), Some("Cereais e derivados"));
        assert!(INGREDIENT_LIST.exact_fields.contains(&"type"));
    }

    #[test]
    fn test_form_defaults_missing_text_color() {
        let form = IngredientForm::from_ingredient(&arroz());
        assert_eq!(form.color, "#ffffff");
        assert_eq!(form.text_color, DEFAULT_COLOR);
        assert_eq!(form.nutritions.calories, "130");
    }

    #[test]
    fn test_multipart_flattens_nutritions() {
        let mut form = IngredientForm::from_ingredient(&arroz());
        form.status = Some(false);
        let fields = form.to_multipart();

        assert_eq!(fields.get("nutritions.calories"), Some("130"));
        assert_eq!(fields.get("nutritions.fiber"), Some(""));
        assert_eq!(fields.get("textColor"), Some(DEFAULT_COLOR));
        assert_eq!(fields.get("status"), Some("false"));
        assert!(fields.get("nutritions").is_none());
    }

    #[test]
    fn test_validate_requires_name() {
        let form = IngredientForm::default();
        assert!(form.validate().is_err());
        let form = IngredientForm {
            name: "Leite".into(),
            ..IngredientForm::default()
        };
        assert!(form.validate().is_ok());
    }
}
