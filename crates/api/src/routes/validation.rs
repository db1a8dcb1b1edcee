//! Route definitions for the `/validation` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::validation;
use crate::state::AppState;

/// Routes mounted at `/validation`.
///
/// ```text
/// GET    /rule-types   -> list_rule_types
/// POST   /check        -> check
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/rule-types", get(validation::list_rule_types))
        .route("/check", post(validation::check))
}
