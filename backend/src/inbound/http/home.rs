//! Landing page handler.
//!
//! Serves the embedded HTML form so the service is usable from a browser
//! without any separate static file deployment.

use actix_web::{get, http::header::ContentType, HttpResponse};

const INDEX_HTML: &str = include_str!("../../../static/index.html");

/// Serve the static landing page.
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}
