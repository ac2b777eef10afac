//! Route definitions for apples.

use axum::routing::any;
use axum::Router;

use crate::handlers::apple;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// The listing does not depend on the request method, so every method is
/// answered the same way.
///
/// ```text
/// *  /apples/   -> list
/// *  /apples    -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/apples/", any(apple::list))
        .route("/apples", any(apple::list))
}
