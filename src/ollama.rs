//! Ollama client module
//!
//! One blocking, non-streaming call to a local Ollama generate endpoint.
//! Failures are typed so the caller can tell a dead server from a bad
//! response, but they are all non-fatal at the CLI surface.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::OllamaConfig;

/// Errors from the summarizer call
#[derive(Error, Debug)]
pub enum OllamaError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("could not decode response: {0}")]
    Decode(String),
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// Client for the Ollama generate API
pub struct OllamaClient {
    url: String,
    model: String,
    client: reqwest::blocking::Client,
}

impl OllamaClient {
    pub fn new(config: &OllamaConfig) -> Self {
        Self {
            url: config.url.clone(),
            model: config.model.clone(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Send one prompt and return the generated text, trimmed.
    pub fn generate(&self, prompt: &str) -> Result<String, OllamaError> {
        let body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let response = self.client.post(&self.url).json(&body).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(OllamaError::Status(status));
        }

        let parsed: GenerateResponse = response
            .json()
            .map_err(|e| OllamaError::Decode(e.to_string()))?;

        Ok(parsed.response.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_unreachable_server() {
        let config = OllamaConfig {
            url: "http://127.0.0.1:1/api/generate".to_string(),
            model: "llama3".to_string(),
        };

        let client = OllamaClient::new(&config);
        let err = client.generate("hello").unwrap_err();
        assert!(matches!(err, OllamaError::Request(_)));
    }

    #[test]
    fn test_status_error_display() {
        let err = OllamaError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "server returned HTTP 500 Internal Server Error");
    }

    #[test]
    fn test_decode_error_display() {
        let err = OllamaError::Decode("missing field".to_string());
        assert_eq!(err.to_string(), "could not decode response: missing field");
    }

    #[test]
    fn test_request_body_shape() {
        let body = GenerateRequest {
            model: "llama3",
            prompt: "Summarize",
            stream: false,
        };

        let json: serde_json::Value = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "llama3");
        assert_eq!(json["prompt"], "Summarize");
        assert_eq!(json["stream"], false);
    }

    #[test]
    fn test_response_field_defaults_to_empty() {
        let parsed: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.response, "");
    }
}
