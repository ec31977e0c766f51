//! Request and response schemas.
//!
//! Flat record types with declarative `validator` constraints. Every
//! entity lives for a single request/response cycle; nothing here is
//! persisted.

mod contact;
mod person;

pub use contact::{ContactForm, ContactReceipt, LoginForm, LoginOut, UploadSummary};
pub use person::{
    HairColor, KNOWN_PERSON_IDS, Location, Person, PersonDetail, PersonDetailQuery, PersonProfile,
    PersonUpdate,
};
