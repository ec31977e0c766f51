use crate::error::ApiError;
use axum::{Json, extract::Request};
use serde::Deserialize;
use validator::Validate;

/// Wrapper for validated JSON data
///
/// Use this as an extractor to automatically validate JSON request bodies.
///
/// # Example
///
/// ```rust,no_run
/// use rollcall::validation::ValidatedJson;
/// use validator::Validate;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, Validate)]
/// struct CreatePersonRequest {
///     #[validate(length(min = 1, max = 50))]
///     first_name: String,
/// }
///
/// async fn create_person(
///     ValidatedJson(req): ValidatedJson<CreatePersonRequest>
/// ) -> rollcall::Result<axum::Json<serde_json::Value>> {
///     Ok(axum::Json(serde_json::json!({"status": "ok"})))
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> axum::extract::FromRequest<S> for ValidatedJson<T>
where
    T: for<'de> Deserialize<'de> + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> std::result::Result<Self, Self::Rejection> {
        let json: Json<T> = Json::from_request(req, state).await.map_err(|e| {
            if e.status() == axum::http::StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::PayloadTooLarge
            } else {
                ApiError::bad_request(format!("Invalid JSON: {}", e))
            }
        })?;

        json.0.validate()?;

        Ok(ValidatedJson(json.0))
    }
}

/// Wrapper for validated query parameters
///
/// Use this as an extractor to automatically validate query parameters.
///
/// # Example
///
/// ```rust,no_run
/// use rollcall::validation::ValidatedQuery;
/// use validator::Validate;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, Validate)]
/// struct DetailQuery {
///     #[validate(length(min = 1, max = 50))]
///     name: Option<String>,
///     #[validate(range(min = 1, max = 115))]
///     age: u8,
/// }
///
/// async fn show_person(
///     ValidatedQuery(query): ValidatedQuery<DetailQuery>
/// ) -> rollcall::Result<axum::Json<serde_json::Value>> {
///     Ok(axum::Json(serde_json::json!({"status": "ok"})))
/// }
/// ```
pub struct ValidatedQuery<T>(pub T);

#[axum::async_trait]
impl<T, S> axum::extract::FromRequestParts<S> for ValidatedQuery<T>
where
    T: for<'de> Deserialize<'de> + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let query: T = serde_urlencoded::from_str(query_string)
            .map_err(|e| ApiError::bad_request(format!("Invalid query parameters: {}", e)))?;

        query.validate()?;

        Ok(ValidatedQuery(query))
    }
}

/// Wrapper for validated form data
///
/// Use this as an extractor to automatically validate URL-encoded form
/// bodies.
///
/// # Example
///
/// ```rust,no_run
/// use rollcall::validation::ValidatedForm;
/// use validator::Validate;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, Validate)]
/// struct LoginForm {
///     #[validate(length(min = 1, max = 20))]
///     username: String,
///     #[validate(length(min = 8))]
///     password: String,
/// }
///
/// async fn login(
///     ValidatedForm(form): ValidatedForm<LoginForm>
/// ) -> rollcall::Result<axum::Json<serde_json::Value>> {
///     Ok(axum::Json(serde_json::json!({"status": "ok"})))
/// }
/// ```
pub struct ValidatedForm<T>(pub T);

#[axum::async_trait]
impl<T, S> axum::extract::FromRequest<S> for ValidatedForm<T>
where
    T: for<'de> Deserialize<'de> + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> std::result::Result<Self, Self::Rejection> {
        let form: axum::extract::Form<T> = axum::extract::Form::from_request(req, state)
            .await
            .map_err(|e| {
                if e.status() == axum::http::StatusCode::PAYLOAD_TOO_LARGE {
                    ApiError::PayloadTooLarge
                } else {
                    ApiError::bad_request(format!("Invalid form data: {}", e))
                }
            })?;

        form.0.validate()?;

        Ok(ValidatedForm(form.0))
    }
}
