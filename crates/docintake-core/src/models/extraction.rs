use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Body returned by the upload endpoint.
///
/// Exactly one of `extracted_text` and `error` is set. A body carrying `error`
/// is still a 200: the applicant metadata is valid even when the document
/// could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResponse {
    pub full_name: String,
    /// Formatted as "Y years, M months"
    pub age: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExtractionResponse {
    pub fn extracted(full_name: String, age: String, text: String) -> Self {
        Self {
            full_name,
            age,
            extracted_text: Some(text),
            error: None,
        }
    }

    pub fn partial(full_name: String, age: String, error: impl Into<String>) -> Self {
        Self {
            full_name,
            age,
            extracted_text: None,
            error: Some(error.into()),
        }
    }
}

/// Body accepted by the display endpoint. Fields are optional on the wire so
/// that absence can be reported as a 400 with our own message.
///
/// `age` is echoed as whatever JSON value the client sent, `null` included;
/// only a missing key counts as absent.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRequest {
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub age: Option<Value>,
    pub extracted_text: Option<String>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Echo of a complete display request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DisplayResponse {
    pub full_name: String,
    pub age: Value,
    pub extracted_text: String,
}

impl DisplayRequest {
    /// Returns the complete payload, or `None` when `fullName` or `extractedText`
    /// is absent or empty, or `age` is absent.
    pub fn into_complete(self) -> Option<DisplayResponse> {
        let full_name = self.full_name.filter(|s| !s.is_empty())?;
        let age = self.age?;
        let extracted_text = self.extracted_text.filter(|s| !s.is_empty())?;
        Some(DisplayResponse {
            full_name,
            age,
            extracted_text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_response_omits_extracted_text() {
        let body = ExtractionResponse::partial(
            "Ada Lovelace".to_string(),
            "36 years, 0 months".to_string(),
            "Couldn't read the file. Try a different one.",
        );
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["fullName"], "Ada Lovelace");
        assert!(json.get("extractedText").is_none());
        assert!(json["error"].is_string());
    }

    #[test]
    fn test_extracted_response_omits_error() {
        let body = ExtractionResponse::extracted(
            "Ada Lovelace".to_string(),
            "36 years, 0 months".to_string(),
            "hello".to_string(),
        );
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["extractedText"], "hello");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_display_request_requires_all_fields() {
        let req: DisplayRequest =
            serde_json::from_str(r#"{"fullName":"A B","age":"1 years, 0 months"}"#).unwrap();
        assert!(req.into_complete().is_none());

        let req: DisplayRequest = serde_json::from_str(
            r#"{"fullName":"","age":"1 years, 0 months","extractedText":"x"}"#,
        )
        .unwrap();
        assert!(req.into_complete().is_none());
    }

    #[test]
    fn test_display_request_allows_empty_age() {
        let req: DisplayRequest =
            serde_json::from_str(r#"{"fullName":"A B","age":"","extractedText":"x"}"#).unwrap();
        let complete = req.into_complete().unwrap();
        assert_eq!(complete.age, "");
    }

    #[test]
    fn test_display_request_keeps_non_string_age() {
        let req: DisplayRequest =
            serde_json::from_str(r#"{"fullName":"A B","age":5,"extractedText":"x"}"#).unwrap();
        assert_eq!(req.into_complete().unwrap().age, 5);

        let req: DisplayRequest =
            serde_json::from_str(r#"{"fullName":"A B","age":null,"extractedText":"x"}"#).unwrap();
        assert_eq!(req.into_complete().unwrap().age, Value::Null);

        let req: DisplayRequest =
            serde_json::from_str(r#"{"fullName":"A B","extractedText":"x"}"#).unwrap();
        assert!(req.into_complete().is_none());
    }
}
