pub mod aggregate;

pub use aggregate::{
    Ingredient, IngredientForm, IngredientNutritions, IngredientNutritionsForm, DEFAULT_COLOR,
    INGREDIENT_LIST, INGREDIENT_TYPES, INGREDIENT_UNITS,
};
