use super::model::{self, ScriptApi};
use super::state::{ConnectivityStatus, DraftField, PendingSubmission, ScriptRequestState};
use crate::shared::lifecycle::MountGuard;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

/// ViewModel for the script request page
///
/// - All state lives in one `ScriptRequestState` signal; transitions are
///   delegated to it so the rules stay testable without a reactive runtime
/// - The backend client is injected, the view never talks to HTTP directly
/// - Async results are dropped once the owning component is disposed
#[derive(Clone, Copy)]
pub struct ScriptRequestVm {
    pub state: RwSignal<ScriptRequestState>,
    api: StoredValue<Rc<dyn ScriptApi>, LocalStorage>,
    guard: StoredValue<MountGuard>,
}

impl ScriptRequestVm {
    /// Must be called inside the component that owns the page
    pub fn new(api: Rc<dyn ScriptApi>) -> Self {
        Self {
            state: RwSignal::new(ScriptRequestState::default()),
            api: StoredValue::new_local(api),
            guard: StoredValue::new(MountGuard::attach()),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state.with(|s| s.outcome.is_pending())
    }

    pub fn can_submit(&self) -> bool {
        self.state.with(|s| s.can_submit())
    }

    pub fn field_value(&self, field: DraftField) -> String {
        self.state.with(|s| match field {
            DraftField::Name => s.draft.name.clone(),
            DraftField::Category => s.draft.category.clone(),
            DraftField::Description => s.draft.description.clone(),
            DraftField::Price => s.draft.price.clone(),
        })
    }

    pub fn update_field(&self, field: DraftField, value: String) {
        self.state.update(|s| s.update_field(field, value));
    }

    /// Probe backend health once
    pub fn init_command(&self) {
        self.state
            .update(|s| s.connectivity = ConnectivityStatus::Checking);
        spawn_local(self.check_health());
    }

    /// Submit the current draft
    pub fn submit_command(&self) {
        let Some(submission) = self.state.try_update(|s| s.begin_submission()).flatten() else {
            log::debug!("Submit ignored: request pending or backend disconnected");
            return;
        };
        spawn_local(self.finish_submission(submission));
    }

    async fn check_health(self) {
        let state = self.state;
        let api = self.api.get_value();
        let guard = self.guard.get_value();

        let connectivity = model::probe_connectivity(api.as_ref()).await;
        if !guard.is_alive() {
            log::warn!("Health check finished after page was closed, result dropped");
            return;
        }
        state.try_update(|s| s.connectivity = connectivity);
    }

    async fn finish_submission(self, submission: PendingSubmission) {
        let state = self.state;
        let api = self.api.get_value();
        let guard = self.guard.get_value();

        let outcome = model::request_generation(api.as_ref(), &submission.draft).await;
        if !guard.is_alive() {
            log::warn!(
                "Attempt {} finished after page was closed, result dropped",
                submission.attempt
            );
            return;
        }
        let applied = state
            .try_update(|s| s.complete_submission(submission.attempt, outcome))
            .unwrap_or(false);
        if !applied {
            log::warn!("Attempt {} superseded, result dropped", submission.attempt);
        }
    }
}
