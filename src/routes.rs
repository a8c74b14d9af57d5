use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::handlers::health::health_check;
use crate::handlers::survey::{show_form, submit_form, validate_email, AppState};

pub fn create_router(app_state: Arc<AppState>) -> Router {
    let mut router = Router::new();

    // Health check is always available
    let health_route = Router::new().route("/health", get(health_check));
    router = router.merge(health_route);

    // Survey page and its submission share the root path
    let survey_routes = Router::new()
        .route("/", get(show_form).post(submit_form))
        .route("/api/validate-email", post(validate_email));
    router = router.merge(survey_routes);

    router.with_state(app_state)
}
