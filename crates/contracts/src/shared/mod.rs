pub mod api_message;
pub mod bulk;
pub mod list_view;
pub mod multipart;
