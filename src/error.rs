use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Errors the analysis endpoint can report to the client.
///
/// Any failure raised by the prediction provider, whatever its underlying
/// type, collapses to `Prediction` with the original message carried as a
/// diagnostic string.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("file not found")]
    MissingFile,
    #[error("empty filename")]
    EmptyFilename,
    #[error("internal server error")]
    Prediction(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFile | ApiError::EmptyFilename => StatusCode::BAD_REQUEST,
            ApiError::Prediction(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Prediction(details) => json!({
                "error": self.to_string(),
                "details": details,
            }),
            _ => json!({ "error": self.to_string() }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_bad_request() {
        assert_eq!(ApiError::MissingFile.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::EmptyFilename.status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn prediction_error_maps_to_internal_server_error() {
        let err = ApiError::Prediction("model backend unavailable".to_owned());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "internal server error");
    }
}
