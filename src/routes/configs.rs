use axum::extract::{Extension, Path, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::response;
use crate::utils::auth::Claims;

// A lookup miss still answers 200 with an empty body, matching the
// behaviour downstream consumers were built against. See DESIGN.md.
pub(crate) async fn get(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let entry = state.configs.find_by_id(&id);

    tracing::debug!(user = %claims.sub, config = %id, hit = entry.is_some(), "config lookup");

    Ok(Json(response::Config::new(entry)))
}
