use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// 201 Created response
///
/// Serializes the created record as the body and sets the `Location`
/// header when the new resource has an address.
#[derive(Debug, Serialize)]
pub struct CreatedResponse<T: Serialize> {
    pub data: T,
    pub location: Option<String>,
}

impl<T: Serialize> CreatedResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            location: None,
        }
    }

    pub fn with_location(data: T, location: impl Into<String>) -> Self {
        Self {
            data,
            location: Some(location.into()),
        }
    }
}

impl<T: Serialize> IntoResponse for CreatedResponse<T> {
    fn into_response(self) -> Response {
        let body = Json(self.data);
        let mut response = (StatusCode::CREATED, body).into_response();
        if let Some(location) = self.location {
            if let Ok(value) = location.parse() {
                response
                    .headers_mut()
                    .insert(axum::http::header::LOCATION, value);
            } else {
                tracing::warn!(location = %location, "Invalid Location header value in CreatedResponse");
            }
        }
        response
    }
}

/// Convenience type alias for JSON responses
pub type JsonResponse<T> = Result<Json<T>, crate::error::ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_created_response_sets_status_and_location() {
        let response =
            CreatedResponse::with_location(json!({"id": 3}), "/person/detail/3").into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(axum::http::header::LOCATION).unwrap(),
            "/person/detail/3"
        );
    }

    #[tokio::test]
    async fn test_created_response_without_location() {
        let response = CreatedResponse::new(json!({"id": 3})).into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert!(
            response
                .headers()
                .get(axum::http::header::LOCATION)
                .is_none()
        );
    }

}
