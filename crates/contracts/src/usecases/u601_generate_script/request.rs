use serde::{Deserialize, Serialize};

/// Body of `POST /api/generate-script`.
///
/// All fields are sent verbatim as typed by the user, empty strings included.
/// `price` is numeric-shaped text and is never parsed on the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fields_are_serialized() {
        let draft = ProductDraft {
            name: "Widget".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Widget",
                "category": "",
                "description": "",
                "price": ""
            })
        );
    }
}
