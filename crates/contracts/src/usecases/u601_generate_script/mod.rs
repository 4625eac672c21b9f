pub mod request;
pub mod response;

pub use request::ProductDraft;
pub use response::{GenerateScriptResponse, MarketingContent, SimilarProduct};

use crate::usecases::common::UseCaseMetadata;

pub struct GenerateScript;

impl UseCaseMetadata for GenerateScript {
    const INDEX: &'static str = "u601";
    const NAME: &'static str = "generate_script";
    const DISPLAY_NAME: &'static str = "Marketing Script Assistant";
    const DESCRIPTION: &'static str = "Generate professional marketing scripts for your products";
}
