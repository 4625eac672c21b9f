//! Script request state machine
//!
//! Plain data, no signals: the view model wraps a single
//! `RwSignal<ScriptRequestState>` and forwards every transition here.

use super::model::ApiError;
use contracts::system::health::HealthResponse;
use contracts::usecases::u601_generate_script::{
    GenerateScriptResponse, MarketingContent, ProductDraft, SimilarProduct,
};

/// Fallback text when the backend reports a failure without a message
pub const GENERIC_FAILURE: &str = "Something went wrong";

/// Reason shown when the health endpoint answers with an unusable response
pub const HEALTH_CHECK_FAILED: &str = "health check failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Category,
    Description,
    Price,
}

/// Assign `value` to exactly one field of the draft
pub fn update_draft_field(draft: &mut ProductDraft, field: DraftField, value: String) {
    let slot = match field {
        DraftField::Name => &mut draft.name,
        DraftField::Category => &mut draft.category,
        DraftField::Description => &mut draft.description,
        DraftField::Price => &mut draft.price,
    };
    *slot = value;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ConnectivityStatus {
    #[default]
    Checking,
    Connected(HealthResponse),
    Error(String),
    Disconnected,
}

impl ConnectivityStatus {
    /// Classify the single health probe result
    pub fn from_probe(result: Result<HealthResponse, ApiError>) -> Self {
        match result {
            Ok(health) => Self::Connected(health),
            Err(ApiError::Network(_)) => Self::Disconnected,
            Err(_) => Self::Error(HEALTH_CHECK_FAILED.to_string()),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Checking => "checking".to_string(),
            Self::Connected(health) => format!("connected - {}", health.status),
            Self::Error(reason) => format!("error - {}", reason),
            Self::Disconnected => "disconnected - cannot reach backend".to_string(),
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected(_))
    }

    pub fn is_disconnected(&self) -> bool {
        matches!(self, Self::Disconnected)
    }

    /// Storage line reported by the backend alongside its status
    pub fn database_label(&self) -> Option<String> {
        let Self::Connected(health) = self else {
            return None;
        };
        health.database.as_ref().map(|database| match &health.error {
            Some(error) => format!("Database: {} ({})", database, error),
            None => format!("Database: {}", database),
        })
    }
}

/// Renderable part of a successful generate-script response
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResult {
    pub similar_products: Vec<SimilarProduct>,
    pub marketing_content: MarketingContent,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionOutcome {
    #[default]
    Idle,
    Pending,
    Success(GenerationResult),
    Failure(String),
}

impl SubmissionOutcome {
    pub fn from_response(result: Result<GenerateScriptResponse, ApiError>) -> Self {
        let body = match result {
            Ok(body) => body,
            Err(err) => return Self::Failure(transport_failure_message(&err)),
        };

        if !body.success {
            let message = body
                .error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE.to_string());
            return Self::Failure(message);
        }

        match body.marketing_content {
            Some(marketing_content) => Self::Success(GenerationResult {
                similar_products: body.similar_products,
                marketing_content,
            }),
            None => Self::Failure(GENERIC_FAILURE.to_string()),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        match self {
            Self::Success(result) => Some(result),
            _ => None,
        }
    }
}

pub fn transport_failure_message(err: &ApiError) -> String {
    format!(
        "Failed to connect to backend. Error: {}. Please make sure the backend server is running on port 8000.",
        err
    )
}

/// Snapshot handed to the request task; `attempt` identifies it on completion
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmission {
    pub attempt: u64,
    pub draft: ProductDraft,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptRequestState {
    pub draft: ProductDraft,
    pub connectivity: ConnectivityStatus,
    pub outcome: SubmissionOutcome,
    attempt: u64,
}

impl ScriptRequestState {
    pub fn update_field(&mut self, field: DraftField, value: String) {
        update_draft_field(&mut self.draft, field, value);
    }

    pub fn can_submit(&self) -> bool {
        !self.outcome.is_pending() && !self.connectivity.is_disconnected()
    }

    /// Enter `Pending`, dropping any previous result or failure.
    /// Returns `None` while the submit control is disabled.
    pub fn begin_submission(&mut self) -> Option<PendingSubmission> {
        if !self.can_submit() {
            return None;
        }
        self.attempt += 1;
        self.outcome = SubmissionOutcome::Pending;
        Some(PendingSubmission {
            attempt: self.attempt,
            draft: self.draft.clone(),
        })
    }

    /// Apply the outcome of `attempt`. Outcomes of superseded attempts are
    /// discarded and `false` is returned.
    pub fn complete_submission(&mut self, attempt: u64, outcome: SubmissionOutcome) -> bool {
        if attempt != self.attempt || !self.outcome.is_pending() {
            return false;
        }
        self.outcome = outcome;
        true
    }

    pub fn attempt(&self) -> u64 {
        self.attempt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn health(status: &str) -> HealthResponse {
        HealthResponse {
            status: status.to_string(),
            database: None,
            error: None,
        }
    }

    fn success_body() -> GenerateScriptResponse {
        GenerateScriptResponse {
            success: true,
            error: None,
            input_product: None,
            similar_products: vec![SimilarProduct {
                name: "Widget".to_string(),
                category: "Tools".to_string(),
                price: Some(9.99),
                similarity: 0.873,
            }],
            marketing_content: Some(MarketingContent {
                video_script: "Line1\nLine2".to_string(),
                social_media_posts: "Post".to_string(),
            }),
        }
    }

    fn failure_body(error: Option<&str>) -> GenerateScriptResponse {
        GenerateScriptResponse {
            success: false,
            error: error.map(str::to_string),
            input_product: None,
            similar_products: Vec::new(),
            marketing_content: None,
        }
    }

    #[test]
    fn test_update_field_touches_only_target() {
        let mut draft = ProductDraft {
            name: "Mug".to_string(),
            category: "Kitchen".to_string(),
            description: "Big mug".to_string(),
            price: "4.50".to_string(),
        };
        let before = draft.clone();

        update_draft_field(&mut draft, DraftField::Category, "Home".to_string());
        assert_eq!(draft.category, "Home");
        assert_eq!(draft.name, before.name);
        assert_eq!(draft.description, before.description);
        assert_eq!(draft.price, before.price);

        update_draft_field(&mut draft, DraftField::Price, String::new());
        assert_eq!(draft.price, "");
        assert_eq!(draft.category, "Home");
        assert_eq!(draft.name, before.name);
    }

    #[test]
    fn test_connectivity_labels() {
        assert_eq!(ConnectivityStatus::Checking.label(), "checking");
        assert_eq!(
            ConnectivityStatus::from_probe(Ok(health("ok"))).label(),
            "connected - ok"
        );
        assert_eq!(
            ConnectivityStatus::from_probe(Err(ApiError::Status(503))).label(),
            "error - health check failed"
        );
        assert_eq!(
            ConnectivityStatus::from_probe(Err(ApiError::Decode("eof".to_string()))),
            ConnectivityStatus::Error(HEALTH_CHECK_FAILED.to_string())
        );

        let unreachable =
            ConnectivityStatus::from_probe(Err(ApiError::Network("Failed to fetch".to_string())));
        assert!(unreachable.is_disconnected());
        assert!(!unreachable.is_connected());
    }

    #[test]
    fn test_database_label() {
        let status = ConnectivityStatus::Connected(HealthResponse {
            status: "unhealthy".to_string(),
            database: Some("disconnected".to_string()),
            error: Some("Database not initialized".to_string()),
        });
        assert_eq!(
            status.database_label().as_deref(),
            Some("Database: disconnected (Database not initialized)")
        );
        assert_eq!(ConnectivityStatus::Connected(health("ok")).database_label(), None);
        assert_eq!(ConnectivityStatus::Disconnected.database_label(), None);
    }

    #[test]
    fn test_outcome_from_response() {
        assert_eq!(
            SubmissionOutcome::from_response(Ok(failure_body(Some("bad input")))),
            SubmissionOutcome::Failure("bad input".to_string())
        );
        assert_eq!(
            SubmissionOutcome::from_response(Ok(failure_body(None))),
            SubmissionOutcome::Failure(GENERIC_FAILURE.to_string())
        );
        assert_eq!(
            SubmissionOutcome::from_response(Ok(failure_body(Some("")))),
            SubmissionOutcome::Failure(GENERIC_FAILURE.to_string())
        );

        let outcome = SubmissionOutcome::from_response(Ok(success_body()));
        let result = outcome.result().unwrap();
        assert_eq!(result.similar_products[0].name, "Widget");
        assert_eq!(result.marketing_content.video_script, "Line1\nLine2");
    }

    #[test]
    fn test_success_without_content_is_failure() {
        let mut body = success_body();
        body.marketing_content = None;
        assert_eq!(
            SubmissionOutcome::from_response(Ok(body)),
            SubmissionOutcome::Failure(GENERIC_FAILURE.to_string())
        );
    }

    #[test]
    fn test_transport_failure_message() {
        let outcome = SubmissionOutcome::from_response(Err(ApiError::Status(500)));
        let message = outcome.failure_message().unwrap();
        assert!(message.contains("port 8000"));
        assert_eq!(
            message,
            "Failed to connect to backend. Error: HTTP error! status: 500. Please make sure the backend server is running on port 8000."
        );
    }

    #[test]
    fn test_submission_blocked_when_disconnected() {
        let mut state = ScriptRequestState {
            connectivity: ConnectivityStatus::Disconnected,
            ..Default::default()
        };
        assert!(!state.can_submit());
        assert_eq!(state.begin_submission(), None);
        assert_eq!(state.outcome, SubmissionOutcome::Idle);

        // Checking and Error still allow submission
        state.connectivity = ConnectivityStatus::Error(HEALTH_CHECK_FAILED.to_string());
        assert!(state.can_submit());
    }

    #[test]
    fn test_begin_clears_previous_outcome() {
        let mut state = ScriptRequestState {
            outcome: SubmissionOutcome::Failure("old".to_string()),
            ..Default::default()
        };
        state.update_field(DraftField::Name, "Widget".to_string());

        let submission = state.begin_submission().unwrap();
        assert_eq!(submission.draft.name, "Widget");
        assert_eq!(state.outcome, SubmissionOutcome::Pending);
        assert_eq!(state.outcome.failure_message(), None);
        assert!(state.outcome.result().is_none());
    }

    #[test]
    fn test_rapid_double_submit() {
        let mut state = ScriptRequestState::default();

        let first = state.begin_submission().unwrap();
        assert_eq!(state.begin_submission(), None);
        assert_eq!(state.attempt(), first.attempt);

        assert!(state.complete_submission(
            first.attempt,
            SubmissionOutcome::Failure("bad input".to_string())
        ));
        assert!(!state.outcome.is_pending());

        let second = state.begin_submission().unwrap();
        assert!(second.attempt > first.attempt);

        // A late duplicate of the first attempt must not end the second one
        assert!(!state.complete_submission(first.attempt, SubmissionOutcome::Idle));
        assert!(state.outcome.is_pending());

        assert!(state.complete_submission(
            second.attempt,
            SubmissionOutcome::from_response(Ok(success_body()))
        ));
        assert!(state.outcome.result().is_some());
        assert!(state.can_submit());
    }
}
