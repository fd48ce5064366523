//! Fittings API
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | /api/fittings | GET | page of items (`skip`, `limit`) |
//! | /api/fittings | POST | create item |
//! | /api/fittings/{qr_id} | GET | fetch one item |
//! | /api/fittings/{qr_id} | PUT | partial update |
//! | /api/fittings/{qr_id} | DELETE | delete item |
//! | /api/fittings/analytics/summary | GET | aggregates |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/api/fittings", routes())
        // Collection path as the legacy clients spell it
        .route(
            "/api/fittings/",
            get(handler::list).post(handler::create),
        )
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/analytics/summary", get(handler::summary))
        .route(
            "/{qr_id}",
            get(handler::get_by_qr_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
