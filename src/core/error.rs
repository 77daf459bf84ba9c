use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Dataset error: {0}")]
    Dataset(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Signing secret not configured")]
    MissingSecret,
    #[error("No token provided")]
    NoToken,
    #[error("Expired token")]
    ExpiredToken,
    #[error("Malformed token: {0}")]
    MalformedToken(#[source] jsonwebtoken::errors::Error),
    #[error("Forbidden")]
    Forbidden,
    #[error("Config entry not found")]
    NotFound,
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error("Invalid header value: {0}")]
    Header(#[from] axum::http::header::InvalidHeaderValue),
    #[error("Header decode error: {0}")]
    HeaderDecode(#[from] axum::http::header::ToStrError),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("{:?}", self);

        let (status, message) = match self {
            Error::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid username or password"),
            Error::MissingSecret => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Signing secret not configured",
            ),
            Error::NoToken => (StatusCode::UNAUTHORIZED, "Access denied: no token provided"),
            Error::ExpiredToken => (StatusCode::UNAUTHORIZED, "Token expired, please log in again"),
            Error::MalformedToken(_) => (StatusCode::BAD_REQUEST, "Invalid token"),
            Error::Forbidden => (
                StatusCode::FORBIDDEN,
                "Forbidden: you don't have access to this resource",
            ),
            Error::NotFound => (StatusCode::NOT_FOUND, "Config entry not found"),
            Error::Jwt(_) => (StatusCode::INTERNAL_SERVER_ERROR, "JWT error"),
            Error::Bcrypt(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Bcrypt error"),
            Error::Header(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Invalid header value"),
            Error::HeaderDecode(_) => (StatusCode::BAD_REQUEST, "Invalid token"),
        };

        (status, message).into_response()
    }
}
