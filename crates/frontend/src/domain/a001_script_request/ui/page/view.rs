use super::model::{HttpScriptApi, ScriptApi};
use super::results::GenerationResults;
use super::state::DraftField;
use super::view_model::ScriptRequestVm;
use crate::shared::api_utils::api_url;
use crate::shared::config::AppConfig;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_generate_script::GenerateScript;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn ScriptRequestPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let api: Rc<dyn ScriptApi> = Rc::new(HttpScriptApi::new(config.api.base_url.clone()));
    let vm = ScriptRequestVm::new(api);
    vm.init_command();

    let failure = Memo::new(move |_| {
        vm.state
            .with(|s| s.outcome.failure_message().map(str::to_string))
    });
    let result = Memo::new(move |_| vm.state.with(|s| s.outcome.result().cloned()));

    let api_base = config.api.base_url.clone();
    let steps = troubleshooting_steps(
        &api_url(&config.api.base_url, "/health"),
        &config.api.docs_url,
    );

    view! {
        <div class="app" id=GenerateScript::full_name()>
            <StatusHeader vm=vm api_base=api_base />

            <div class="container">
                <form
                    class="product-form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        vm.submit_command();
                    }
                >
                    <DraftInput
                        vm=vm
                        field=DraftField::Name
                        label="Product Name *"
                        input_type="text"
                        placeholder="Enter product name"
                        required=true
                    />
                    <DraftInput
                        vm=vm
                        field=DraftField::Category
                        label="Product Category"
                        input_type="text"
                        placeholder="e.g., Electronics, Kitchen, Fashion"
                    />

                    <div class="form-group">
                        <label for="description">"Product Description *"</label>
                        <textarea
                            id="description"
                            name="description"
                            rows="4"
                            required=true
                            placeholder="Describe your product features, benefits, and target audience..."
                            prop:value=move || vm.field_value(DraftField::Description)
                            on:input=move |ev| {
                                vm.update_field(DraftField::Description, event_target_value(&ev))
                            }
                        />
                    </div>

                    <DraftInput
                        vm=vm
                        field=DraftField::Price
                        label="Price ($)"
                        input_type="number"
                        placeholder="e.g., 99.99"
                        step="0.01"
                    />

                    <button
                        type="submit"
                        class="generate-btn"
                        disabled=move || !vm.can_submit()
                    >
                        {move || {
                            if vm.is_pending() { "Generating..." } else { "Generate Marketing Scripts" }
                        }}
                    </button>
                </form>

                {move || {
                    failure
                        .get()
                        .map(|message| {
                            view! {
                                <FailurePanel
                                    message=message
                                    steps=steps.clone()
                                />
                            }
                        })
                }}

                {move || result.get().map(|result| view! { <GenerationResults result=result /> })}
            </div>
        </div>
    }
}

#[component]
fn StatusHeader(vm: ScriptRequestVm, api_base: String) -> impl IntoView {
    let status_class = move || {
        if vm.state.with(|s| s.connectivity.is_connected()) {
            "status-connected"
        } else {
            "status-error"
        }
    };

    view! {
        <header class="app-header">
            <h1>"🎬 " {GenerateScript::DISPLAY_NAME}</h1>
            <p>{GenerateScript::DESCRIPTION}</p>
            <div class="backend-status">
                "Backend Status: "
                <span class=status_class>{move || vm.state.with(|s| s.connectivity.label())}</span>
            </div>
            {move || {
                vm.state
                    .with(|s| s.connectivity.database_label())
                    .map(|line| view! { <div class="database-status">{line}</div> })
            }}
            <div class="api-info">"API URL: " {api_base}</div>
        </header>
    }
}

/// Single-line input bound to one draft field
#[component]
fn DraftInput(
    vm: ScriptRequestVm,
    field: DraftField,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    #[prop(optional)] required: bool,
    #[prop(optional)] step: Option<&'static str>,
) -> impl IntoView {
    let name = match field {
        DraftField::Name => "name",
        DraftField::Category => "category",
        DraftField::Description => "description",
        DraftField::Price => "price",
    };

    view! {
        <div class="form-group">
            <label for=name>{label}</label>
            <input
                type=input_type
                id=name
                name=name
                required=required
                step=step
                placeholder=placeholder
                prop:value=move || vm.field_value(field)
                on:input=move |ev| vm.update_field(field, event_target_value(&ev))
            />
        </div>
    }
}

/// One line of the troubleshooting checklist
#[derive(Debug, Clone, PartialEq)]
pub enum TroubleshootingStep {
    Text(&'static str),
    /// Text followed by the emphasized backend port
    Port(&'static str),
    /// Text followed by a link opened in a new tab
    Link(&'static str, String),
}

pub fn troubleshooting_steps(health_url: &str, docs_url: &str) -> Vec<TroubleshootingStep> {
    vec![
        TroubleshootingStep::Port("Make sure backend is running on port "),
        TroubleshootingStep::Link("Check if you can visit ", health_url.to_string()),
        TroubleshootingStep::Port("Verify no other applications are using port "),
        TroubleshootingStep::Text("Check backend terminal for errors"),
        TroubleshootingStep::Link("Test API directly at ", docs_url.to_string()),
    ]
}

fn step_view(step: TroubleshootingStep) -> AnyView {
    match step {
        TroubleshootingStep::Text(text) => text.into_any(),
        TroubleshootingStep::Port(text) => view! { {text} <strong>"8000"</strong> }.into_any(),
        TroubleshootingStep::Link(text, url) => {
            let href = url.clone();
            view! {
                {text}
                <a href=href target="_blank" rel="noopener noreferrer">{url}</a>
            }
            .into_any()
        }
    }
}

/// Failure text with the fixed troubleshooting checklist
#[component]
fn FailurePanel(message: String, steps: Vec<TroubleshootingStep>) -> impl IntoView {
    view! {
        <div class="error-message">
            "❌ " {message}
            <div class="troubleshooting">
                <h4>"Troubleshooting Steps:"</h4>
                <ol>
                    {steps
                        .into_iter()
                        .map(|step| view! { <li>{step_view(step)}</li> })
                        .collect_view()}
                </ol>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_troubleshooting_steps() {
        let steps = troubleshooting_steps(
            "http://localhost:8000/api/health",
            "http://localhost:8000/docs",
        );
        assert_eq!(steps.len(), 5);
        assert_eq!(
            steps[1],
            TroubleshootingStep::Link(
                "Check if you can visit ",
                "http://localhost:8000/api/health".to_string()
            )
        );
        assert_eq!(
            steps[4],
            TroubleshootingStep::Link("Test API directly at ", "http://localhost:8000/docs".to_string())
        );
        assert_eq!(
            steps
                .iter()
                .filter(|s| matches!(s, TroubleshootingStep::Port(_)))
                .count(),
            2
        );
    }
}
