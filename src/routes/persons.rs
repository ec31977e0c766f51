use axum::{
    Json, Router,
    extract::Path,
    http::{HeaderName, HeaderValue},
    routing::{get, post, put},
};
use serde::Serialize;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::app::AppContext;
use crate::domain::{
    KNOWN_PERSON_IDS, Person, PersonDetail, PersonDetailQuery, PersonProfile, PersonUpdate,
};
use crate::error::{ApiError, Result};
use crate::http::{CreatedResponse, JsonResponse, RouteModule};
use crate::validation::{ValidatedJson, ValidatedQuery};

/// Person registry routes
pub struct PersonsModule;

impl RouteModule for PersonsModule {
    fn routes(&self) -> Router<AppContext> {
        Router::new()
            .route("/person/new", post(create_person))
            .route(
                "/person/detail",
                // Superseded by /person/detail/:person_id; flagged for clients
                get(show_person).layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("deprecation"),
                    HeaderValue::from_static("true"),
                )),
            )
            .route("/person/detail/:person_id", get(show_person_by_id))
            .route("/person/:person_id", put(update_person))
    }
}

#[derive(Debug, Serialize)]
struct RegistrationStatus {
    person_id: u64,
    message: &'static str,
}

/// `POST /person/new` - validate and echo a person record
///
/// The response never carries the password; `Person`'s serialization
/// rules strip it.
async fn create_person(ValidatedJson(person): ValidatedJson<Person>) -> CreatedResponse<Person> {
    tracing::debug!(first_name = %person.first_name, "Person created");
    CreatedResponse::new(person)
}

/// `GET /person/detail` - query-parameter validated lookup
async fn show_person(ValidatedQuery(query): ValidatedQuery<PersonDetailQuery>) -> Json<PersonDetail> {
    Json(PersonDetail {
        name: query.name,
        age: query.age,
    })
}

/// `GET /person/detail/:person_id` - path-parameter validated lookup
///
/// 404 unless the id belongs to the fixed registry.
async fn show_person_by_id(Path(person_id): Path<u64>) -> JsonResponse<RegistrationStatus> {
    ensure_positive(person_id)?;

    if !KNOWN_PERSON_IDS.contains(&person_id) {
        return Err(ApiError::not_found(format!(
            "person {} is not registered",
            person_id
        )));
    }

    Ok(Json(RegistrationStatus {
        person_id,
        message: "registered",
    }))
}

/// `PUT /person/:person_id` - merge a person and a location record
async fn update_person(
    Path(person_id): Path<u64>,
    ValidatedJson(update): ValidatedJson<PersonUpdate>,
) -> JsonResponse<PersonProfile> {
    ensure_positive(person_id)?;

    tracing::debug!(person_id, "Person updated");
    Ok(Json(PersonProfile {
        person: update.person,
        location: update.location,
    }))
}

fn ensure_positive(person_id: u64) -> Result<()> {
    if person_id == 0 {
        return Err(ApiError::invalid_field(
            "person_id",
            "must be greater than 0",
        ));
    }
    Ok(())
}
