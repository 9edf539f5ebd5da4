use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::core::domain::entity::app_user::input::UnvalidatedAppUser;
use crate::core::domain::validation::ValidationError;

impl From<AppUserWebInput> for UnvalidatedAppUser {
    fn from(value: AppUserWebInput) -> Self {
        Self {
            id: value.id,
            first_name: value.first_name,
            last_name: value.last_name,
            middle_name: value.middle_name,
            gender: value.gender,
            age: value.age,
            province: value.province,
            city: value.city,
        }
    }
}

// Every field is optional so a missing one is reported as a field violation.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppUserWebInput {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i64>,
    pub province: Option<String>,
    pub city: Option<String>,
}

/// An undecodable body becomes a global violation.
pub fn decode_body(
    payload: Result<Json<AppUserWebInput>, JsonRejection>,
) -> Result<UnvalidatedAppUser, ValidationError> {
    payload
        .map(|Json(input)| input.into())
        .map_err(|rejection| ValidationError::global(rejection.body_text()))
}
