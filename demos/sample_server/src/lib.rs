/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Sample web front end for the recognize.im client
//!
//! Serves an upload form and a few pages driving the management calls:
//!
//! | path | method | action |
//! |------|--------|--------|
//! | `/`, `/start` | GET | forms |
//! | `/recognize` | POST | recognize the uploaded image |
//! | `/imageInsert` | POST | add the uploaded image to the collection |
//! | `/status` | GET | index status |
//! | `/build` | GET | start an index build |
//! | `/list` | GET | image collection |

/// Error type rendered as HTTP 500
pub mod error;
/// HTML rendering
pub mod pages;
/// Request handlers
pub mod routes;
/// Shared state
pub mod state;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use state::AppState;

/// Largest accepted upload; multi mode query images may reach 3500 KB
pub const MAX_UPLOAD_BYTES: usize = 8 * 1024 * 1024;

/// Builds the router with every page of the sample server
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::start))
        .route("/start", get(routes::start))
        .route("/recognize", post(routes::recognize))
        .route("/imageInsert", post(routes::image_insert))
        .route("/status", get(routes::status))
        .route("/build", get(routes::build))
        .route("/list", get(routes::list))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
