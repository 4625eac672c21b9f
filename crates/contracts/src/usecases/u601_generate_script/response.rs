use serde::{Deserialize, Deserializer, Serialize};

use super::request::ProductDraft;

/// Body of a 2xx `POST /api/generate-script` response.
///
/// The backend sets `success: false` together with `error` for application
/// level failures; every other field is only guaranteed on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateScriptResponse {
    /// `null` counts as `false`
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub input_product: Option<ProductDraft>,
    #[serde(default)]
    pub similar_products: Vec<SimilarProduct>,
    #[serde(default)]
    pub marketing_content: Option<MarketingContent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarProduct {
    pub name: String,
    pub category: String,
    /// Absent, `null` and unparsable values all arrive as `None`
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: Option<f64>,
    /// Fraction in [0, 1]
    pub similarity: f64,
}

/// Newline-delimited plain text blocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketingContent {
    pub video_script: String,
    pub social_media_posts: String,
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

// Older backends sent the catalogue price as text
fn deserialize_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(f64),
        Text(String),
    }

    let raw = Option::<RawPrice>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawPrice::Number(value)) => Some(value),
        Some(RawPrice::Text(text)) => text.trim().parse::<f64>().ok(),
        None => None,
    })
}
