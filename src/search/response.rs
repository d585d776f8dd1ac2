//! Classification of backend responses.
//!
//! Turns a raw `(status, body)` pair from the host into either the result list
//! or a backend-facing [`ScentSphereError`]. Error bodies are never parsed:
//! a failing backend may answer with HTML, plain text, or nothing.

use crate::domain::{Result, ResultItem, ScentSphereError};
use serde::Deserialize;

/// Status the host reports when no HTTP exchange took place.
pub const NO_RESPONSE_STATUS: u16 = 0;

/// Success envelope: `{ "results": [...] }`.
///
/// The backend also echoes `query`; it is ignored.
#[derive(Debug, Deserialize)]
struct ResultsEnvelope {
    #[serde(default)]
    results: Option<Vec<ResultItem>>,
}

/// Classifies a backend response.
///
/// - status `0` → [`ScentSphereError::Transport`]
/// - status outside `200..=299` → [`ScentSphereError::Server`]
/// - undecodable 2xx body → [`ScentSphereError::Decode`]
/// - missing or `null` `results` → empty list
///
/// # Errors
///
/// Returns one of the backend-facing variants listed above.
///
/// # Examples
///
/// ```
/// use scentsphere::search::parse_response;
///
/// let items = parse_response(200, br#"{"query": "x", "results": null}"#).unwrap();
/// assert!(items.is_empty());
/// assert!(parse_response(500, b"<html>oops</html>").is_err());
/// ```
pub fn parse_response(status: u16, body: &[u8]) -> Result<Vec<ResultItem>> {
    if status == NO_RESPONSE_STATUS {
        return Err(ScentSphereError::Transport {
            reason: String::from_utf8_lossy(body).into_owned(),
        });
    }

    if !(200..=299).contains(&status) {
        return Err(ScentSphereError::Server { status });
    }

    let envelope: ResultsEnvelope =
        serde_json::from_slice(body).map_err(|e| ScentSphereError::Decode(e.to_string()))?;

    Ok(envelope.results.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_results() {
        let body = br#"{"query": "romantic", "results": [
            {"Name": "Rose Noir", "Brand": "Aether", "Main Accords": ["floral"], "Image URL": "https://x/img.jpg"}
        ]}"#;
        let items = parse_response(200, body).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Rose Noir");
    }

    #[test]
    fn row_with_null_fields_keeps_the_batch() {
        let body = br#"{"results": [
            {"Name": "Rose Noir", "Brand": "Aether", "Image URL": "u"},
            {"Name": "Oud", "Brand": null, "Image URL": null, "Main Accords": ["floral", null]}
        ]}"#;

        let items = parse_response(200, body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].brand, "Aether");
        assert_eq!(items[1].brand, "");
        assert_eq!(items[1].image_url, "");
        assert_eq!(items[1].accords, vec!["floral"]);
    }

    #[test]
    fn missing_results_key_is_empty() {
        assert!(parse_response(200, b"{}").unwrap().is_empty());
    }

    #[test]
    fn non_success_status_skips_body() {
        let err = parse_response(404, br#"{"detail": "Not Found"}"#).unwrap_err();
        assert!(matches!(err, ScentSphereError::Server { status: 404 }));
    }

    #[test]
    fn zero_status_is_transport() {
        let err = parse_response(NO_RESPONSE_STATUS, b"dns error: failed to lookup address").unwrap_err();
        assert!(matches!(err, ScentSphereError::Transport { .. }));
    }

    #[test]
    fn garbage_success_body_is_decode_error() {
        let err = parse_response(200, b"not json").unwrap_err();
        assert!(matches!(err, ScentSphereError::Decode(_)));
    }
}
