use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::app::AppContext;
use crate::http::RouteModule;

/// The landing route
pub struct HomeModule;

impl RouteModule for HomeModule {
    fn routes(&self) -> Router<AppContext> {
        Router::new().route("/", get(home))
    }
}

#[derive(Debug, Serialize)]
struct Greeting {
    greeting: &'static str,
}

async fn home() -> Json<Greeting> {
    Json(Greeting {
        greeting: "Hello, World",
    })
}
