//! Route definitions for server-rendered forms.

use axum::routing::get;
use axum::Router;

use crate::handlers::forms;
use crate::state::AppState;

/// Routes mounted at `/forms`.
///
/// ```text
/// GET    /contact      -> show_contact
/// POST   /contact      -> submit_contact
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/contact",
        get(forms::show_contact).post(forms::submit_contact),
    )
}
