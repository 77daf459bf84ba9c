use axum::extract::State;
use axum::http::HeaderValue;
use axum::response::IntoResponse;
use axum::Json;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::request;
use crate::utils::auth::TOKEN_HEADER;

pub(crate) async fn login(
    State(state): State<AppState>,
    Json(user_data): Json<request::LoginData>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let token = state.login(&user_data.username, &user_data.password)?;

    Ok([(TOKEN_HEADER, HeaderValue::from_str(&token)?)])
}
