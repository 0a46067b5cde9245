//! Error handling for the confeitaria gateway
//!
//! Provides consistent error responses in English and Portuguese

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use shared::ReportFilterError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Session errors
    #[error("Unauthorized: {message}")]
    Unauthorized {
        message: String,
        message_pt: String,
    },

    #[error("Session rejected by the API")]
    SessionExpired,

    // Validation errors
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_pt: String,
    },

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Upstream API errors
    #[error("API responded with status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("API unreachable: {0}")]
    UpstreamUnavailable(#[from] reqwest::Error),

    #[error("Unexpected API payload: {0}")]
    InvalidUpstreamPayload(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<ReportFilterError> for AppError {
    fn from(err: ReportFilterError) -> Self {
        match &err {
            ReportFilterError::InvalidDate(value) => AppError::Validation {
                field: "date".to_string(),
                message: err.to_string(),
                message_pt: format!("Data inválida '{}', use AAAA-MM-DD", value),
            },
            ReportFilterError::InvertedRange { .. } => AppError::Validation {
                field: "start_date".to_string(),
                message: err.to_string(),
                message_pt: "A data inicial é posterior à data final".to_string(),
            },
        }
    }
}

/// Error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_pt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    fn status_and_detail(&self) -> (StatusCode, ErrorDetail) {
        match self {
            AppError::Unauthorized { message, message_pt } => (
                StatusCode::UNAUTHORIZED,
                ErrorDetail {
                    code: "UNAUTHORIZED".to_string(),
                    message_en: message.clone(),
                    message_pt: message_pt.clone(),
                    field: None,
                },
            ),
            AppError::SessionExpired => (
                StatusCode::UNAUTHORIZED,
                ErrorDetail {
                    code: "SESSION_EXPIRED".to_string(),
                    message_en: "Your session has expired, please sign in again".to_string(),
                    message_pt: "Sua sessão expirou, faça login novamente".to_string(),
                    field: None,
                },
            ),
            AppError::Validation { field, message, message_pt } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message_en: message.clone(),
                    message_pt: message_pt.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message_en: format!("{} not found", resource),
                    message_pt: format!("{} não encontrado", resource),
                    field: None,
                },
            ),
            AppError::UpstreamStatus { status, .. } => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "UPSTREAM_ERROR".to_string(),
                    message_en: format!("The business API failed with status {}", status),
                    message_pt: format!("A API de negócios falhou com status {}", status),
                    field: None,
                },
            ),
            AppError::UpstreamUnavailable(err) if err.is_timeout() => (
                StatusCode::GATEWAY_TIMEOUT,
                ErrorDetail {
                    code: "UPSTREAM_TIMEOUT".to_string(),
                    message_en: "The business API took too long to respond".to_string(),
                    message_pt: "A API de negócios demorou demais para responder".to_string(),
                    field: None,
                },
            ),
            AppError::UpstreamUnavailable(_) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "UPSTREAM_UNAVAILABLE".to_string(),
                    message_en: "The business API is unavailable".to_string(),
                    message_pt: "A API de negócios está indisponível".to_string(),
                    field: None,
                },
            ),
            AppError::InvalidUpstreamPayload(_) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "UPSTREAM_PAYLOAD".to_string(),
                    message_en: "The business API returned an unexpected payload".to_string(),
                    message_pt: "A API de negócios retornou dados inesperados".to_string(),
                    field: None,
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message_en: format!("Configuration error: {}", msg),
                    message_pt: format!("Erro de configuração: {}", msg),
                    field: None,
                },
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message_en: msg.clone(),
                    message_pt: "Erro interno do servidor".to_string(),
                    field: None,
                },
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = self.status_and_detail();

        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::debug!("Request rejected: {}", self);
        }

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
