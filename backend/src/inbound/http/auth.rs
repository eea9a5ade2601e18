//! Login and logout handlers.
//!
//! ```text
//! GET  /login    login form
//! POST /login    establish the session principal, redirect to the list
//! POST /logout   purge the session, redirect to the login form
//! ```
//!
//! Authentication proper is an upstream concern; these handlers only record
//! which principal the user directory resolved. Deployments fronted by a real
//! identity system replace the directory, not the handlers.

use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;
use tracing::info;

use crate::inbound::http::notes::NOTE_LIST;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{html_page, see_other, Page};
use crate::inbound::http::ApiResult;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
}

/// Show the login form.
#[get("/login")]
pub async fn login_page(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    Ok(html_page(&state, &Page::Login { message: None }))
}

/// Establish the session principal for a username the directory knows.
#[post("/login")]
pub async fn submit_login(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<LoginForm>,
) -> ApiResult<HttpResponse> {
    let username = form.into_inner().username;
    match state.users.resolve(&username).await? {
        Some(user_id) => {
            session.sign_in(&username)?;
            info!(user_id = %user_id, "principal signed in");
            Ok(see_other(NOTE_LIST))
        }
        None => {
            let page = Page::Login {
                message: Some("Unknown username".to_owned()),
            };
            Ok(html_page(&state, &page))
        }
    }
}

/// Drop all session state and return to the login form.
#[post("/logout")]
pub async fn logout(session: SessionContext) -> ApiResult<HttpResponse> {
    session.sign_out();
    Ok(see_other("/login"))
}
