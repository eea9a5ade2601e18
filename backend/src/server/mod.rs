//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_session::{
    config::CookieContentSecurity, storage::CookieSessionStore, SessionMiddleware,
};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};

use crate::inbound::http::auth::{login_page, logout, submit_login};
use crate::inbound::http::notes::{note_scope, root_redirect};
use crate::inbound::http::state::HttpState;

/// Assemble the application: session middleware, note routes, login routes,
/// and the root redirect.
pub fn build_app(
    state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(SameSite::Lax)
        .build();

    App::new()
        .app_data(state)
        .wrap(session)
        .service(note_scope())
        .service(root_redirect)
        .service(login_page)
        .service(submit_login)
        .service(logout)
}

/// Construct an Actix HTTP server wired with the default adapters.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let state = web::Data::new(HttpState::with_defaults());
    let ServerConfig {
        key,
        cookie_secure,
        bind_addr,
    } = config;

    let server = HttpServer::new(move || build_app(state.clone(), key.clone(), cookie_secure))
        .bind(bind_addr.as_str())?
        .run();

    Ok(server)
}
