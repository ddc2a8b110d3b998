pub mod confirm_dialog;
pub mod page_header;
pub mod pagination_controls;
pub mod status_switch;
pub mod table;
pub mod ui;

pub use confirm_dialog::ConfirmDialog;
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use status_switch::StatusSwitch;
