//! Endpoint handlers, grouped into route modules.
//!
//! Each submodule owns one slice of the HTTP surface and exposes a unit
//! struct implementing [`RouteModule`](crate::http::RouteModule).

mod auth;
mod contact;
mod home;
mod persons;
mod uploads;

pub use auth::AuthModule;
pub use contact::ContactModule;
pub use home::HomeModule;
pub use persons::PersonsModule;
pub use uploads::UploadsModule;
