//! Script Request Page Module (MVVM)
//!
//! Structure:
//! - model.rs: backend client (`ScriptApi`) and request flows
//! - state.rs: draft, connectivity and outcome state machine
//! - view_model.rs: ScriptRequestVm with signals and commands
//! - view.rs: page component (header, form, failure panel)
//! - results.rs: rendering of generated content

pub mod model;
mod results;
pub mod state;
mod view;
mod view_model;

pub use view::ScriptRequestPage;
pub use view_model::ScriptRequestVm;
