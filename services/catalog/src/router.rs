use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use spindle_core::health::{healthz, readyz};
use spindle_core::middleware::request_id_layer;

use crate::handlers::{
    upload::{create_asset, create_vinyl_asset},
    user::{
        add_user_vinyl, create_user, delete_user, get_user, get_user_vinyls, get_users,
        remove_user_vinyl,
    },
    vinyl::{create_many_vinyls, create_vinyl, delete_vinyl, get_vinyl, get_vinyls},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Users
        .route("/", get(get_users))
        .route("/api/users/", get(get_users))
        .route("/api/users/", post(create_user))
        .route("/api/users/{user_id}/", get(get_user))
        .route("/api/users/{user_id}/", delete(delete_user))
        // Shelf
        .route("/api/users/{user_id}/vinyls/", get(get_user_vinyls))
        .route("/api/users/{user_id}/vinyls/add/", post(add_user_vinyl))
        .route("/api/users/{user_id}/vinyls/", delete(remove_user_vinyl))
        // Vinyls
        .route("/api/vinyls/", get(get_vinyls))
        .route("/api/vinyls/", post(create_vinyl))
        .route("/api/vinyls/many/", post(create_many_vinyls))
        .route("/api/vinyls/{vinyl_id}/", get(get_vinyl))
        .route("/api/vinyls/{vinyl_id}/", delete(delete_vinyl))
        // Uploads
        .route("/upload/", post(create_asset))
        .route("/upload/{vinyl_id}/", post(create_vinyl_asset))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
