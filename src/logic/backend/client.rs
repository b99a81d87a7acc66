//! Prediction API Client
//!
//! HTTP client for communicating with the CardioCheck prediction backend.

use std::time::Duration;

use base64::Engine;
use serde::{Deserialize, Serialize};

/// Backend configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        use crate::constants;

        Self {
            base_url: constants::get_api_url(),
            timeout_seconds: constants::get_request_timeout(),
        }
    }
}

/// Prediction API client
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http_client: reqwest::Client,
}

// Request/Response types

/// The 13 medical indicators posted to the prediction endpoint.
///
/// Integer-valued indicators are carried as integers; only `oldpeak`
/// (ST depression) is a continuous measurement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub age: u32,
    pub sex: u8,
    pub cp: u8,
    pub trestbps: u32,
    pub chol: u32,
    pub fbs: u8,
    pub restecg: u8,
    pub thalach: u32,
    pub exang: u8,
    pub oldpeak: f64,
    pub slope: u8,
    pub ca: u8,
    pub thal: u8,
}

/// Risk assessment returned by the prediction endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionResponse {
    pub prediction: i32,
    pub risk_probability: f64,
    pub disease_probability: f64,
    pub no_disease_probability: f64,
    pub risk_level: String,
    pub color: String,
    pub recommendation: Vec<String>,
}

/// Acknowledgement from the admin login endpoint. Opaque to the client
/// beyond logging; no token is issued.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminLoginResponse {
    pub message: String,
    pub admin: String,
}

/// Error payload the backend attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(config: ApiConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http_client,
        }
    }

    /// The configured backend base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Submit the 13 indicators for a risk assessment
    pub async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, ApiError> {
        let url = format!("{}/predict", self.config.base_url);

        let response = self
            .http_client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::Parse(e.to_string()))
        } else {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            // The backend wraps failures as {"error": "..."}; fall back to
            // the raw body when it doesn't.
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            Err(ApiError::Server { status, message })
        }
    }

    /// Post a Basic credential to the admin login endpoint. No body.
    pub async fn admin_login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AdminLoginResponse, ApiError> {
        let url = format!("{}/admin-login", self.config.base_url);

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", basic_credential(email, password))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::Parse(e.to_string()))
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            Err(ApiError::Server { status, message })
        }
    }

    /// Fetch an informational resource (`disease-info`, `developers`,
    /// `about`). The payload shape is backend-defined; callers only log
    /// or pretty-print it.
    pub async fn info(&self, slug: &str) -> Result<serde_json::Value, ApiError> {
        let url = format!("{}/info/{}", self.config.base_url, slug);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::Parse(e.to_string()))
        } else {
            Err(ApiError::Server {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            })
        }
    }
}

/// Build the `Authorization` header value for `email:password`.
pub fn basic_credential(email: &str, password: &str) -> String {
    let encoded =
        base64::engine::general_purpose::STANDARD.encode(format!("{}:{}", email, password));
    format!("Basic {}", encoded)
}

/// API client errors
#[derive(Debug, Clone)]
pub enum ApiError {
    Network(String),
    Server { status: u16, message: String },
    Parse(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(e) => write!(f, "Network error: {}", e),
            Self::Server { status, message } if message.is_empty() => {
                write!(f, "Server error: {}", status)
            }
            Self::Server { status, message } => {
                write!(f, "Server error {}: {}", status, message)
            }
            Self::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_credential_encodes_email_and_password() {
        assert_eq!(basic_credential("a@b.c", "secret"), "Basic YUBiLmM6c2VjcmV0");
        assert_eq!(
            basic_credential("admin@example.com", "hunter2"),
            "Basic YWRtaW5AZXhhbXBsZS5jb206aHVudGVyMg=="
        );
    }

    #[test]
    fn prediction_request_serializes_all_thirteen_fields() {
        let request = PredictionRequest {
            age: 52,
            sex: 1,
            cp: 0,
            trestbps: 130,
            chol: 240,
            fbs: 0,
            restecg: 1,
            thalach: 150,
            exang: 0,
            oldpeak: 1.5,
            slope: 2,
            ca: 0,
            thal: 1,
        };

        let value = serde_json::to_value(&request).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 13);
        assert_eq!(object["age"], 52);
        assert_eq!(object["oldpeak"], 1.5);
        assert_eq!(object["thal"], 1);
    }

    #[test]
    fn prediction_response_deserializes_backend_payload() {
        let body = r#"{
            "prediction": 1,
            "risk_probability": 0.7345,
            "disease_probability": 73.45,
            "no_disease_probability": 26.55,
            "risk_level": "HIGH RISK",
            "color": "red",
            "recommendation": ["Seek immediate medical consultation."]
        }"#;

        let response: PredictionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.prediction, 1);
        assert_eq!(response.risk_level, "HIGH RISK");
        assert_eq!(response.recommendation.len(), 1);
    }

    #[test]
    fn error_response_extracts_message() {
        let parsed: ErrorResponse = serde_json::from_str(r#"{"error":"Missing required fields"}"#).unwrap();
        assert_eq!(parsed.error, "Missing required fields");
    }
}
