pub mod common;
pub mod u601_generate_script;
