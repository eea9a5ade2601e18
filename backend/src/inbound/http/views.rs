//! Response helpers shared by the HTTP handlers.
//!
//! Every handler terminates in one of two shapes: a rendered [`Page`] or a
//! `303 See Other` redirect. Centralising both keeps the handlers down to
//! orchestration.

use actix_web::http::header::{self, ContentType};
use actix_web::HttpResponse;

pub use crate::domain::ports::Page;
use crate::inbound::http::state::HttpState;

/// Render a page through the configured view renderer.
pub(crate) fn html_page(state: &HttpState, page: &Page) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(state.renderer.render(page))
}

/// Redirect the browser after a POST or a stale/invalid request.
pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
