pub mod api_utils;
pub mod config;
pub mod lifecycle;
pub mod text_format;
