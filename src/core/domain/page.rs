use validator::ValidateRange;

use crate::core::domain::validation::{validate, Constrained, Rule, ValidationError};

pub const DEFAULT_PAGE: i64 = 0;
pub const DEFAULT_SIZE: i64 = 10;
pub const MIN_SIZE: i64 = 5;
pub const MAX_SIZE: i64 = 500;

/// Raw `page`/`size` query parameters. Absent or blank means "use the default".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnvalidatedPageRequest {
    pub page: Option<String>,
    pub size: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    size: i64,
}

fn parse_or(raw: &Option<String>, default: i64) -> Option<i64> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Some(default),
        Some(value) => value.parse().ok(),
    }
}

fn in_range(raw: &Option<String>, default: i64, min: Option<i64>, max: Option<i64>) -> bool {
    parse_or(raw, default).map_or(true, |v| v.validate_range(min, max, None, None))
}

static PAGE_RULES: &[Rule<UnvalidatedPageRequest>] = &[
    Rule {
        field: "page",
        check: |p| parse_or(&p.page, DEFAULT_PAGE).is_some(),
        message: "must be an integer",
    },
    Rule {
        field: "page",
        check: |p| in_range(&p.page, DEFAULT_PAGE, Some(0), None),
        message: "must be greater than or equal to 0",
    },
    Rule {
        field: "size",
        check: |p| parse_or(&p.size, DEFAULT_SIZE).is_some(),
        message: "must be an integer",
    },
    Rule {
        field: "size",
        check: |p| in_range(&p.size, DEFAULT_SIZE, Some(MIN_SIZE), None),
        message: "must be greater than or equal to 5",
    },
    Rule {
        field: "size",
        check: |p| in_range(&p.size, DEFAULT_SIZE, None, Some(MAX_SIZE)),
        message: "must be less than or equal to 500",
    },
];

impl Constrained for UnvalidatedPageRequest {
    fn rules() -> &'static [Rule<Self>] {
        PAGE_RULES
    }
}

impl TryFrom<UnvalidatedPageRequest> for PageRequest {
    type Error = ValidationError;

    fn try_from(value: UnvalidatedPageRequest) -> Result<Self, Self::Error> {
        let value = validate(&value).into_result(value)?;
        match (
            parse_or(&value.page, DEFAULT_PAGE),
            parse_or(&value.size, DEFAULT_SIZE),
        ) {
            (Some(page), Some(size)) => Ok(PageRequest { page, size }),
            _ => Err(ValidationError::global("invalid pagination parameters")),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_SIZE,
        }
    }
}

impl PageRequest {
    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    pub fn offset(&self) -> i64 {
        self.page.saturating_mul(self.size)
    }

    pub fn limit(&self) -> i64 {
        self.size
    }
}
