use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registered person ids.
///
/// The detail lookup checks membership against this fixed, read-only list;
/// there is no persistence behind it.
pub const KNOWN_PERSON_IDS: [u64; 5] = [1, 2, 3, 4, 5];

/// Hair color enumeration
///
/// Serialized UPPERCASE on the wire; unknown values are rejected at
/// deserialization time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HairColor {
    White,
    Brown,
    Black,
    Blonde,
    Red,
}

/// A person record
///
/// The password is accepted on input but never serialized back out: every
/// response built from a `Person` omits it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Person {
    #[validate(
        length(min = 1, max = 50, message = "must be between 1 and 50 characters"),
        custom = "crate::validation::validate_not_blank"
    )]
    pub first_name: String,

    #[validate(
        length(min = 1, max = 50, message = "must be between 1 and 50 characters"),
        custom = "crate::validation::validate_not_blank"
    )]
    pub last_name: String,

    #[validate(range(min = 1, max = 115, message = "must be between 1 and 115"))]
    pub age: u8,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hair_color: Option<HairColor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_married: Option<bool>,

    #[serde(skip_serializing)]
    #[validate(length(min = 8, message = "must be at least 8 characters"))]
    pub password: String,
}

/// A location record
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Location {
    #[validate(
        length(min = 1, max = 50, message = "must be between 1 and 50 characters"),
        custom = "crate::validation::validate_not_blank"
    )]
    pub city: String,

    #[validate(
        length(min = 1, max = 50, message = "must be between 1 and 50 characters"),
        custom = "crate::validation::validate_not_blank"
    )]
    pub state: String,

    #[validate(
        length(min = 1, max = 50, message = "must be between 1 and 50 characters"),
        custom = "crate::validation::validate_not_blank"
    )]
    pub country: String,
}

/// Body of `PUT /person/{person_id}`: a person and a location, both
/// validated in one pass
#[derive(Debug, Deserialize, Validate)]
pub struct PersonUpdate {
    #[validate]
    pub person: Person,

    #[validate]
    pub location: Location,
}

/// Merged person-and-location response
///
/// Both records flatten into a single object, matching the update
/// endpoint's merge semantics. The password disappears with the rest of
/// `Person`'s serialization rules.
#[derive(Debug, Serialize)]
pub struct PersonProfile {
    #[serde(flatten)]
    pub person: Person,

    #[serde(flatten)]
    pub location: Location,
}

/// Query parameters for `GET /person/detail`
#[derive(Debug, Deserialize, Validate)]
pub struct PersonDetailQuery {
    /// Person name, between 1 and 50 characters when present
    #[validate(
        length(min = 1, max = 50, message = "must be between 1 and 50 characters"),
        custom = "crate::validation::validate_not_blank"
    )]
    pub name: Option<String>,

    /// Person age, required
    #[validate(range(min = 1, max = 115, message = "must be between 1 and 115"))]
    pub age: u8,
}

/// Echo payload for `GET /person/detail`
#[derive(Debug, Serialize)]
pub struct PersonDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub age: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_person() -> Person {
        Person {
            first_name: "Stiven".to_string(),
            last_name: "Ramírez Arango".to_string(),
            age: 23,
            hair_color: Some(HairColor::Black),
            is_married: Some(false),
            password: "hunter2hunter2".to_string(),
        }
    }

    #[test]
    fn test_valid_person_passes() {
        assert!(valid_person().validate().is_ok());
    }

    #[test]
    fn test_age_bounds() {
        let mut person = valid_person();
        person.age = 0;
        assert!(person.validate().is_err());

        person.age = 1;
        assert!(person.validate().is_ok());

        person.age = 115;
        assert!(person.validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut person = valid_person();
        person.first_name = "   ".to_string();
        assert!(person.validate().is_err());
    }

    #[test]
    fn test_short_password_rejected() {
        let mut person = valid_person();
        person.password = "short".to_string();
        assert!(person.validate().is_err());
    }

    #[test]
    fn test_password_never_serialized() {
        let json = serde_json::to_value(valid_person()).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["first_name"], "Stiven");
    }

    #[test]
    fn test_hair_color_wire_format() {
        let color: HairColor = serde_json::from_str("\"BLACK\"").unwrap();
        assert_eq!(color, HairColor::Black);
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"BLACK\"");

        let unknown: Result<HairColor, _> = serde_json::from_str("\"PURPLE\"");
        assert!(unknown.is_err());
    }

    #[test]
    fn test_person_update_validates_nested_records() {
        let update: PersonUpdate = serde_json::from_value(serde_json::json!({
            "person": {
                "first_name": "Stiven",
                "last_name": "Ramírez Arango",
                "age": 23,
                "password": "hunter2hunter2"
            },
            "location": {
                "city": "",
                "state": "Antioquia",
                "country": "Colombia"
            }
        }))
        .unwrap();

        assert!(update.validate().is_err());
    }

    #[test]
    fn test_person_profile_flattens_both_records() {
        let profile = PersonProfile {
            person: valid_person(),
            location: Location {
                city: "Sabaneta".to_string(),
                state: "Antioquia".to_string(),
                country: "Colombia".to_string(),
            },
        };

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["first_name"], "Stiven");
        assert_eq!(json["city"], "Sabaneta");
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_detail_query_requires_age() {
        let missing: Result<PersonDetailQuery, _> = serde_urlencoded::from_str("name=Stiven");
        assert!(missing.is_err());

        let query: PersonDetailQuery = serde_urlencoded::from_str("name=Stiven&age=23").unwrap();
        assert!(query.validate().is_ok());
        assert_eq!(query.name.as_deref(), Some("Stiven"));
        assert_eq!(query.age, 23);
    }
}
