//! DTOs for the link creation endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::NewShortUrl;
use crate::domain::errors::RegistryError;

/// Request to shorten a URL.
///
/// Fields are kept as raw JSON so that type errors map onto the registry's
/// error kinds instead of a generic deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct CreateShortUrlRequest {
    #[serde(default)]
    pub url: Option<Value>,

    /// Validity in minutes.
    #[serde(default)]
    pub validity: Option<Value>,

    /// Preferred short code.
    #[serde(default)]
    pub shortcode: Option<Value>,
}

impl CreateShortUrlRequest {
    /// Checks JSON types and converts into registry input.
    ///
    /// A falsy `shortcode` (`false`, `0`, `""`) counts as absent. An explicit
    /// `null` validity counts as absent.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidUrl`] if `url` is missing, empty or not a string
    /// - [`RegistryError::InvalidShortcode`] if `shortcode` is truthy but not a string
    /// - [`RegistryError::InvalidValidity`] if `validity` is not a number
    pub fn into_new_short_url(self) -> Result<NewShortUrl, RegistryError> {
        let url = match self.url {
            Some(Value::String(url)) if !url.is_empty() => url,
            _ => return Err(RegistryError::InvalidUrl),
        };

        let custom_code = match self.shortcode {
            Some(Value::String(code)) if !code.is_empty() => Some(code),
            Some(value) if !is_falsy(&value) => {
                return Err(RegistryError::invalid_shortcode("must be a string"));
            }
            _ => None,
        };

        let validity_minutes = match self.validity {
            None | Some(Value::Null) => None,
            Some(Value::Number(n)) => Some(n.as_f64().ok_or(RegistryError::InvalidValidity)?),
            Some(_) => return Err(RegistryError::InvalidValidity),
        };

        Ok(NewShortUrl {
            url,
            validity_minutes,
            custom_code,
        })
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Response for a created short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShortUrlResponse {
    pub short_link: String,
    /// Expiry as ISO-8601 with millisecond precision.
    pub expiry: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: Value) -> Result<NewShortUrl, RegistryError> {
        serde_json::from_value::<CreateShortUrlRequest>(body)
            .unwrap()
            .into_new_short_url()
    }

    #[test]
    fn test_full_request() {
        let new = parse(json!({
            "url": "https://example.com",
            "validity": 5,
            "shortcode": "abcd"
        }))
        .unwrap();

        assert_eq!(new.url, "https://example.com");
        assert_eq!(new.validity_minutes, Some(5.0));
        assert_eq!(new.custom_code.as_deref(), Some("abcd"));
    }

    #[test]
    fn test_url_only() {
        let new = parse(json!({ "url": "https://example.com" })).unwrap();

        assert!(new.validity_minutes.is_none());
        assert!(new.custom_code.is_none());
    }

    #[test]
    fn test_missing_or_non_string_url() {
        assert_eq!(parse(json!({})), Err(RegistryError::InvalidUrl));
        assert_eq!(parse(json!({ "url": 42 })), Err(RegistryError::InvalidUrl));
        assert_eq!(parse(json!({ "url": "" })), Err(RegistryError::InvalidUrl));
    }

    #[test]
    fn test_url_error_wins_over_others() {
        let err = parse(json!({ "url": null, "shortcode": 7, "validity": "x" })).unwrap_err();
        assert_eq!(err, RegistryError::InvalidUrl);
    }

    #[test]
    fn test_non_string_shortcode() {
        let err = parse(json!({ "url": "https://a.test", "shortcode": 1234 })).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidShortcode { .. }));
    }

    #[test]
    fn test_falsy_shortcode_is_absent() {
        for falsy in [json!(""), json!(false), json!(0), json!(null)] {
            let new = parse(json!({ "url": "https://a.test", "shortcode": falsy })).unwrap();
            assert!(new.custom_code.is_none());
        }
    }

    #[test]
    fn test_non_numeric_validity() {
        let err = parse(json!({ "url": "https://a.test", "validity": "10" })).unwrap_err();
        assert_eq!(err, RegistryError::InvalidValidity);
    }

    #[test]
    fn test_fractional_validity_passes_through() {
        let new = parse(json!({ "url": "https://a.test", "validity": 0.5 })).unwrap();
        assert_eq!(new.validity_minutes, Some(0.5));
    }

    #[test]
    fn test_response_field_names() {
        let body = serde_json::to_value(CreateShortUrlResponse {
            short_link: "http://localhost:5000/shorturls/abcd".to_string(),
            expiry: "2024-01-01T00:30:00.000Z".to_string(),
        })
        .unwrap();

        assert_eq!(body["shortLink"], "http://localhost:5000/shorturls/abcd");
        assert_eq!(body["expiry"], "2024-01-01T00:30:00.000Z");
    }
}
