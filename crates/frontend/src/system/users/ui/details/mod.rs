mod page;
mod view;
mod view_model;

pub use page::{UserCreatePage, UserEditPage};
pub use view::UserDetails;
