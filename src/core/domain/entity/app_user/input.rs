use validator::{ValidateLength, ValidateRange};

use crate::core::domain::entity::app_user::AppUser;
use crate::core::domain::validation::{validate, Constrained, Rule, ValidationError};

const MUST_NOT_BE_EMPTY: &str = "must not be empty";

/// Decoded request body before any constraint has been checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnvalidatedAppUser {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i64>,
    pub province: Option<String>,
    pub city: Option<String>,
}

fn not_empty(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

// Absent values are left to `not_empty`.
fn length_between(value: &Option<String>, min: u64, max: u64) -> bool {
    value
        .as_ref()
        .map_or(true, |v| v.validate_length(Some(min), Some(max), None))
}

fn age_at_least(age: &Option<i64>, min: i64) -> bool {
    age.map_or(true, |a| a.validate_range(Some(min), None, None, None))
}

fn age_at_most(age: &Option<i64>, max: i64) -> bool {
    age.map_or(true, |a| a.validate_range(None, Some(max), None, None))
}

static APP_USER_RULES: &[Rule<UnvalidatedAppUser>] = &[
    Rule {
        field: "id",
        check: |u| not_empty(&u.id),
        message: MUST_NOT_BE_EMPTY,
    },
    Rule {
        field: "id",
        check: |u| length_between(&u.id, 5, 20),
        message: "size must be between 5 and 20",
    },
    Rule {
        field: "firstName",
        check: |u| not_empty(&u.first_name),
        message: MUST_NOT_BE_EMPTY,
    },
    Rule {
        field: "firstName",
        check: |u| length_between(&u.first_name, 0, 200),
        message: "size must be between 0 and 200",
    },
    Rule {
        field: "lastName",
        check: |u| not_empty(&u.last_name),
        message: MUST_NOT_BE_EMPTY,
    },
    Rule {
        field: "lastName",
        check: |u| length_between(&u.last_name, 0, 200),
        message: "size must be between 0 and 200",
    },
    Rule {
        field: "middleName",
        check: |u| length_between(&u.middle_name, 1, 200),
        message: "size must be between 1 and 200",
    },
    Rule {
        field: "gender",
        check: |u| not_empty(&u.gender),
        message: MUST_NOT_BE_EMPTY,
    },
    Rule {
        field: "gender",
        check: |u| length_between(&u.gender, 0, 50),
        message: "size must be between 0 and 50",
    },
    Rule {
        field: "age",
        check: |u| u.age.is_some(),
        message: "must not be null",
    },
    Rule {
        field: "age",
        check: |u| age_at_least(&u.age, 1),
        message: "must be greater than or equal to 1",
    },
    Rule {
        field: "age",
        check: |u| age_at_most(&u.age, 150),
        message: "must be less than or equal to 150",
    },
    Rule {
        field: "province",
        check: |u| not_empty(&u.province),
        message: MUST_NOT_BE_EMPTY,
    },
    Rule {
        field: "province",
        check: |u| length_between(&u.province, 0, 200),
        message: "size must be between 0 and 200",
    },
    Rule {
        field: "city",
        check: |u| not_empty(&u.city),
        message: MUST_NOT_BE_EMPTY,
    },
    Rule {
        field: "city",
        check: |u| length_between(&u.city, 0, 200),
        message: "size must be between 0 and 200",
    },
];

impl Constrained for UnvalidatedAppUser {
    fn rules() -> &'static [Rule<Self>] {
        APP_USER_RULES
    }
}

impl From<AppUser> for UnvalidatedAppUser {
    fn from(value: AppUser) -> Self {
        Self {
            id: Some(value.id),
            first_name: Some(value.first_name),
            last_name: Some(value.last_name),
            middle_name: value.middle_name,
            gender: Some(value.gender),
            age: Some(i64::from(value.age)),
            province: Some(value.province),
            city: Some(value.city),
        }
    }
}

impl TryFrom<UnvalidatedAppUser> for AppUser {
    type Error = ValidationError;

    fn try_from(value: UnvalidatedAppUser) -> Result<Self, Self::Error> {
        let value = validate(&value).into_result(value)?;
        match value {
            UnvalidatedAppUser {
                id: Some(id),
                first_name: Some(first_name),
                last_name: Some(last_name),
                middle_name,
                gender: Some(gender),
                age: Some(age),
                province: Some(province),
                city: Some(city),
            } => Ok(AppUser {
                id,
                first_name,
                last_name,
                middle_name,
                gender,
                age: i32::try_from(age)
                    .map_err(|_| ValidationError::global("AppUser: age out of range"))?,
                province,
                city,
            }),
            _ => Err(ValidationError::global("AppUser: incomplete candidate")),
        }
    }
}
