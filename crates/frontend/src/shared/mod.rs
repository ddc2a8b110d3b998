pub mod alert;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod data_store;
pub mod date_utils;
pub mod icons;
pub mod list_actions;
pub mod list_utils;
pub mod list_view;
pub mod navigation;
pub mod storage;
pub mod upload;
