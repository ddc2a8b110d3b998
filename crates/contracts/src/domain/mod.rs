pub mod a001_recipe;
pub mod a002_ingredient;
pub mod common;
