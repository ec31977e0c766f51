use axum::{
    Json, Router,
    http::{HeaderMap, header},
    routing::post,
};
use cookie::Cookie;

use crate::app::AppContext;
use crate::domain::{ContactForm, ContactReceipt};
use crate::http::RouteModule;
use crate::validation::ValidatedForm;

/// Contact form route
pub struct ContactModule;

impl RouteModule for ContactModule {
    fn routes(&self) -> Router<AppContext> {
        Router::new().route("/contact", post(contact))
    }
}

/// `POST /contact` - form fields plus header and cookie capture
///
/// Captures the `User-Agent` header and the `ads` cookie when the client
/// sends them; neither is required.
async fn contact(
    headers: HeaderMap,
    ValidatedForm(form): ValidatedForm<ContactForm>,
) -> Json<ContactReceipt> {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    let ads = cookie_value(&headers, "ads");

    Json(ContactReceipt {
        first_name: form.first_name,
        last_name: form.last_name,
        email: form.email,
        user_agent,
        ads,
    })
}

/// Pull one cookie's value out of the `Cookie` header, if present
fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;

    Cookie::split_parse(raw.to_string())
        .filter_map(|c| c.ok())
        .find(|c| c.name() == name)
        .map(|c| c.value().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_cookie_value_finds_named_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("session=abc; ads=tracker-42"),
        );

        assert_eq!(cookie_value(&headers, "ads"), Some("tracker-42".to_string()));
        assert_eq!(cookie_value(&headers, "session"), Some("abc".to_string()));
        assert_eq!(cookie_value(&headers, "missing"), None);
    }

    #[test]
    fn test_cookie_value_without_header() {
        let headers = HeaderMap::new();
        assert_eq!(cookie_value(&headers, "ads"), None);
    }
}
