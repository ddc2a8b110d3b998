pub mod aggregate;
pub mod images;

pub use aggregate::{
    category_label, category_name, Recipe, RecipeForm, RecipeIngredientLine, RecipeNutritions,
    RecipeNutritionsForm, MAX_RECIPE_IMAGES, RECIPE_CATEGORIES, RECIPE_LINE_UNITS,
    RECIPE_LIST,
};
pub use images::{ImageSlot, ImageSlots};
