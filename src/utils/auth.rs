use axum::extract::State;
use axum::{body::Body, extract::Request, http::Response, middleware::Next};
use chrono::{Duration, Utc};
use jsonwebtoken::{self, DecodingKey, EncodingKey, Header, TokenData, Validation};
use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::core::store::User;

/// Request and response header carrying the raw token string.
pub(crate) const TOKEN_HEADER: &str = "x-auth-token";

/// Roles permitted through the guard on protected routes.
pub(crate) const ALLOWED_ROLES: &[&str] = &["admin"];

pub(crate) const TOKEN_TTL_SECONDS: i64 = 60 * 60;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub(crate) struct Claims {
    pub(crate) exp: usize,
    pub(crate) iat: usize,
    pub(crate) sub: String,
    pub(crate) role: String,
}

pub(crate) fn encode_jwt(user: &User, secret: &str, ttl: Duration) -> Result<String, Error> {
    if secret.is_empty() {
        return Err(Error::MissingSecret);
    }

    let current_time = Utc::now();
    let expiration_time = current_time + ttl;

    let claims = Claims {
        exp: expiration_time.timestamp() as usize,
        iat: current_time.timestamp() as usize,
        sub: user.username.to_string(),
        role: user.role.to_string(),
    };

    Ok(jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )?)
}

pub(crate) fn decode_jwt(token: &str, secret: &str) -> Result<TokenData<Claims>, Error> {
    if secret.is_empty() {
        return Err(Error::MissingSecret);
    }

    // Zero leeway: a token is invalid from the moment its exp passes.
    let mut validation = Validation::default();
    validation.leeway = 0;

    match jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &validation,
    ) {
        Ok(token_data) => Ok(token_data),
        Err(e) => match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => Err(Error::ExpiredToken),
            _ => Err(Error::MalformedToken(e)),
        },
    }
}

/// Access decision for a protected request: token presence, secret presence,
/// signature + expiry, then the role allow-list, in that order.
pub(crate) fn authorize_token(
    token: Option<&str>,
    secret: Option<&str>,
    allowed_roles: &[&str],
) -> Result<Claims, Error> {
    let token = token.ok_or(Error::NoToken)?;

    let secret = secret.filter(|s| !s.is_empty()).ok_or(Error::MissingSecret)?;

    let token_data = decode_jwt(token, secret)?;

    if !allowed_roles.contains(&token_data.claims.role.as_str()) {
        return Err(Error::Forbidden);
    }

    Ok(token_data.claims)
}

pub(crate) async fn authorize(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response<Body>, Error> {
    let token = match request.headers().get(TOKEN_HEADER) {
        Some(value) => Some(value.to_str()?),
        None => None,
    };

    let claims = authorize_token(token, state.secret.as_deref(), ALLOWED_ROLES)?;

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> User {
        User {
            username: "alice".to_string(),
            password_hash: String::new(),
            role: "admin".to_string(),
        }
    }

    #[test]
    fn test_round_trip() {
        let token = encode_jwt(&admin(), "secret", Duration::hours(1)).unwrap();
        let token_data = decode_jwt(&token, "secret").unwrap();

        assert_eq!(token_data.claims.sub, "alice");
        assert_eq!(token_data.claims.role, "admin");
        assert_eq!(
            token_data.claims.exp - token_data.claims.iat,
            TOKEN_TTL_SECONDS as usize
        );
    }

    #[test]
    fn test_expired_token() {
        let token = encode_jwt(&admin(), "secret", Duration::seconds(-5)).unwrap();

        assert!(matches!(
            decode_jwt(&token, "secret"),
            Err(Error::ExpiredToken)
        ));
    }

    #[test]
    fn test_tampered_signature() {
        let mut token = encode_jwt(&admin(), "secret", Duration::hours(1)).unwrap();

        let flipped = if token.ends_with('A') { 'B' } else { 'A' };
        token.pop();
        token.push(flipped);

        assert!(matches!(
            decode_jwt(&token, "secret"),
            Err(Error::MalformedToken(_))
        ));
    }

    #[test]
    fn test_wrong_secret() {
        let token = encode_jwt(&admin(), "secret", Duration::hours(1)).unwrap();

        assert!(matches!(
            decode_jwt(&token, "other-secret"),
            Err(Error::MalformedToken(_))
        ));
    }

    #[test]
    fn test_empty_secret() {
        assert!(matches!(
            encode_jwt(&admin(), "", Duration::hours(1)),
            Err(Error::MissingSecret)
        ));
        assert!(matches!(
            decode_jwt("some.token.here", ""),
            Err(Error::MissingSecret)
        ));
    }

    #[test]
    fn test_authorize_no_token() {
        assert!(matches!(
            authorize_token(None, Some("secret"), ALLOWED_ROLES),
            Err(Error::NoToken)
        ));
    }

    #[test]
    fn test_authorize_no_secret() {
        let token = encode_jwt(&admin(), "secret", Duration::hours(1)).unwrap();

        assert!(matches!(
            authorize_token(Some(&token), None, ALLOWED_ROLES),
            Err(Error::MissingSecret)
        ));
        assert!(matches!(
            authorize_token(Some(&token), Some(""), ALLOWED_ROLES),
            Err(Error::MissingSecret)
        ));
    }

    #[test]
    fn test_authorize_forbidden_role() {
        let viewer = User {
            username: "bob".to_string(),
            password_hash: String::new(),
            role: "viewer".to_string(),
        };
        let token = encode_jwt(&viewer, "secret", Duration::hours(1)).unwrap();

        assert!(matches!(
            authorize_token(Some(&token), Some("secret"), ALLOWED_ROLES),
            Err(Error::Forbidden)
        ));
    }

    #[test]
    fn test_authorize_admin() {
        let token = encode_jwt(&admin(), "secret", Duration::hours(1)).unwrap();

        let claims = authorize_token(Some(&token), Some("secret"), ALLOWED_ROLES).unwrap();

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.role, "admin");
    }
}
