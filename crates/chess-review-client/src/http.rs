//! Analysis over HTTP.
//!
//! The backend takes `POST {"gameUrl": "<pgn url>"}` and answers with an
//! [`AnalysisResponse`]. Failures carry a JSON body with a `message` or
//! `error` field, which is surfaced to the user verbatim.

use chess_review::{AnalysisRequestFailure, AnalysisResponse, AnalysisService, AnalysisTrace};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    #[serde(rename = "gameUrl")]
    game_url: &'a str,
}

/// Error body returned by the backend on non-2xx responses.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// [`AnalysisService`] backed by the HTTP analysis endpoint.
#[derive(Debug, Clone)]
pub struct HttpAnalysisService {
    client: Client,
    endpoint: String,
}

impl HttpAnalysisService {
    /// Builds a client for the endpoint, timeout and user agent in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed
    /// (e.g. the TLS backend fails to initialize).
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint.clone(),
        })
    }

    /// The endpoint requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl AnalysisService for HttpAnalysisService {
    async fn analyze(&self, game_url: &str) -> Result<AnalysisTrace, AnalysisRequestFailure> {
        tracing::debug!(endpoint = %self.endpoint, url = game_url, "Posting analysis request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&AnalyzeRequest { game_url })
            .send()
            .await
            .map_err(|e| AnalysisRequestFailure::new(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AnalysisRequestFailure::new(format!("Body read error: {e}")))?;

        decode_response(status, &body)
    }
}

/// Turns a backend reply into a trace or a user-facing failure.
fn decode_response(status: StatusCode, body: &str) -> Result<AnalysisTrace, AnalysisRequestFailure> {
    if !status.is_success() {
        return Err(failure_from_error_body(status, body));
    }

    let response: AnalysisResponse = serde_json::from_str(body).map_err(|e| {
        AnalysisRequestFailure::new(format!("Invalid analysis response: {e}"))
    })?;
    Ok(response.analysis)
}

fn failure_from_error_body(status: StatusCode, body: &str) -> AnalysisRequestFailure {
    let reported = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.error))
        .filter(|m| !m.trim().is_empty());

    match reported {
        Some(message) => AnalysisRequestFailure::new(message),
        None => AnalysisRequestFailure::new(format!(
            "Request failed with status code {}",
            status.as_u16()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success_body() {
        let body = r#"{"message": "Analysis done", "url": "u", "analysis": [
            {"move": "e2e4", "score": 20, "best_move": "e7e5", "fen": "f1"},
            {"move": "e7e5", "score": 25, "best_move": null, "fen": "f2"}
        ]}"#;
        let trace = decode_response(StatusCode::OK, body).unwrap();
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.get(1).unwrap().fen, "f2");
    }

    #[test]
    fn test_decode_uses_message_field() {
        let body = r#"{"message": "Unable to fetch game data: 404"}"#;
        let failure = decode_response(StatusCode::BAD_REQUEST, body).unwrap_err();
        assert_eq!(failure.message(), "Unable to fetch game data: 404");
    }

    #[test]
    fn test_decode_uses_error_field() {
        let body = r#"{"error": "Stockfish executable not found"}"#;
        let failure = decode_response(StatusCode::INTERNAL_SERVER_ERROR, body).unwrap_err();
        assert_eq!(failure.message(), "Stockfish executable not found");
    }

    #[test]
    fn test_decode_falls_back_to_status() {
        let failure = decode_response(StatusCode::BAD_GATEWAY, "<html>oops</html>").unwrap_err();
        assert_eq!(failure.message(), "Request failed with status code 502");

        let failure = decode_response(StatusCode::BAD_REQUEST, r#"{"message": ""}"#).unwrap_err();
        assert_eq!(failure.message(), "Request failed with status code 400");
    }

    #[test]
    fn test_decode_rejects_malformed_success() {
        let failure = decode_response(StatusCode::OK, r#"{"analysis": 3}"#).unwrap_err();
        assert!(failure.message().starts_with("Invalid analysis response"));
    }

    #[test]
    fn test_request_body_uses_backend_field_name() {
        let json = serde_json::to_string(&AnalyzeRequest {
            game_url: "https://example.org/g.pgn",
        })
        .unwrap();
        assert_eq!(json, r#"{"gameUrl":"https://example.org/g.pgn"}"#);
    }

    #[test]
    fn test_new_uses_config_endpoint() {
        let config = ClientConfig {
            endpoint: "http://localhost:8080/analyze".to_string(),
            ..ClientConfig::default()
        };
        let service = HttpAnalysisService::new(&config).unwrap();
        assert_eq!(service.endpoint(), "http://localhost:8080/analyze");
    }
}
