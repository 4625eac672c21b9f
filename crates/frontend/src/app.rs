use crate::domain::a001_script_request::ui::page::ScriptRequestPage;
use crate::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Injected configuration for every page below
    provide_context(config);

    view! {
        <ScriptRequestPage />
    }
}
