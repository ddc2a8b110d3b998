//! Recipe create/edit screen
//!
//! - view_model.rs: form state, image slots and commands
//! - view.rs: the form component
//! - page.rs: route-level wrappers

mod page;
mod view;
mod view_model;

pub use page::{RecipeCreatePage, RecipeEditPage};
pub use view::RecipeDetails;
pub use view_model::RecipeDetailsViewModel;
