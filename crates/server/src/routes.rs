use axum::{
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

pub mod users;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, user CRUD, and API docs.
pub fn build_router(cors: CorsLayer, state: users::ServerState) -> Router {
    // Static segments win over the `:id` capture, so `/user/all` and
    // `/user/login` never collide with `/user/:id`.
    let api = Router::new()
        .route("/user/all", get(users::list_users))
        .route("/user/login", post(users::login))
        .route("/user/create", post(users::create_user))
        .route("/user/update-infos/:id", put(users::update_infos))
        .route("/user/update-password/:id", put(users::update_password))
        .route("/user/:id", get(users::get_user).delete(users::delete_user))
        .with_state(state);

    let docs =
        SwaggerUi::new("/docs").url("/api-docs/openapi.json", crate::openapi::ApiDoc::openapi());

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .merge(docs)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
