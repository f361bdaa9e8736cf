pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree, mounted at the application root.
///
/// ```text
/// GET    /projects        -> list
/// POST   /projects        -> create
/// PUT    /projects/{id}   -> update
/// DELETE /projects/{id}   -> delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/projects", project::router())
}
