use axum::{Json, Router, routing::post};

use crate::app::AppContext;
use crate::domain::{LoginForm, LoginOut};
use crate::http::RouteModule;
use crate::validation::ValidatedForm;

/// Login route
///
/// Illustrative only: the credentials are validated and echoed, never
/// checked against anything.
pub struct AuthModule;

impl RouteModule for AuthModule {
    fn routes(&self) -> Router<AppContext> {
        Router::new().route("/login", post(login))
    }
}

/// `POST /login` - form-encoded credential echo
async fn login(ValidatedForm(form): ValidatedForm<LoginForm>) -> Json<LoginOut> {
    tracing::debug!(username = %form.username, "Login submitted");
    Json(LoginOut::for_username(form.username))
}
