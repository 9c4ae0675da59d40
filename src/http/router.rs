//! Routes and middleware of the web API.

use axum::{Router, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};

use super::handlers;
use super::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(state.config.static_path());

    let api_v1 = Router::new()
        .route("/users", get(handlers::users_view))
        .route("/mean_time_weekday/{user_id}", get(handlers::mean_time_weekday_view))
        .route("/presence_weekday/{user_id}", get(handlers::presence_weekday_view))
        .route("/presence_start_end/{user_id}", get(handlers::presence_start_end_view))
        .route("/user_avatar/{user_id}", get(handlers::user_avatar_view));

    Router::new()
        .route("/", get(handlers::mainpage))
        .nest("/api/v1", api_v1)
        .nest_service("/static", static_files)
        .route("/{page}", get(handlers::render_page))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
