pub mod health;
pub mod templates;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::parsing::MAX_UPLOAD_BYTES;
use crate::sessions::handlers;
use crate::state::AppState;

/// Room for the file plus the rest of the form. The upload cap itself is
/// enforced while the file part is read.
const SESSION_FORM_LIMIT: usize = 2 * MAX_UPLOAD_BYTES as usize;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Template gallery and stateless rendering
        .route("/api/v1/templates", get(templates::handle_list_templates))
        .route(
            "/api/v1/render/:template_id",
            post(templates::handle_render),
        )
        // Editing sessions
        .route(
            "/api/v1/sessions",
            post(handlers::handle_create_session)
                .layer(DefaultBodyLimit::max(SESSION_FORM_LIMIT)),
        )
        .route(
            "/api/v1/sessions/:id",
            get(handlers::handle_get_session).delete(handlers::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/actions",
            post(handlers::handle_apply_action),
        )
        .route(
            "/api/v1/sessions/:id/preview",
            get(handlers::handle_preview),
        )
        .route("/api/v1/sessions/:id/export", get(handlers::handle_export))
        .with_state(state)
}
