use std::fmt;

use async_trait::async_trait;
use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

/// Failures collected while validating one candidate.
///
/// Field failures keep the order in which fields were first rejected, and the
/// messages of one field keep the order of the rules that produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    #[serde(rename = "InvalidFields", skip_serializing_if = "IndexMap::is_empty")]
    field_errors: IndexMap<String, Vec<String>>,
    #[serde(rename = "errors", skip_serializing_if = "Vec::is_empty")]
    global_errors: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject_field(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.field_errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn reject(&mut self, message: impl Into<String>) {
        self.global_errors.push(message.into());
    }

    pub fn has_errors(&self) -> bool {
        self.has_field_errors() || self.has_global_errors()
    }

    pub fn has_field_errors(&self) -> bool {
        !self.field_errors.is_empty()
    }

    pub fn has_global_errors(&self) -> bool {
        !self.global_errors.is_empty()
    }

    pub fn field_errors(&self) -> &IndexMap<String, Vec<String>> {
        &self.field_errors
    }

    pub fn global_errors(&self) -> &[String] {
        &self.global_errors
    }

    /// Passes the candidate through when nothing was rejected.
    pub fn into_result<T>(self, candidate: T) -> Result<T, ValidationError> {
        if self.has_errors() {
            Err(ValidationError(self))
        } else {
            Ok(candidate)
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.field_errors {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        for message in &self.global_errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}", message)?;
            first = false;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation failed: {0}")]
pub struct ValidationError(ValidationResult);

impl ValidationError {
    pub fn global(message: impl Into<String>) -> Self {
        let mut result = ValidationResult::new();
        result.reject(message);
        Self(result)
    }

    pub fn result(&self) -> &ValidationResult {
        &self.0
    }
}

/// One declared constraint: `check` must hold or `message` is recorded against `field`.
pub struct Rule<T> {
    pub field: &'static str,
    pub check: fn(&T) -> bool,
    pub message: &'static str,
}

pub trait Constrained: Sized + 'static {
    fn rules() -> &'static [Rule<Self>];
}

/// Additional, possibly I/O bound, check run after the static rules.
#[async_trait]
pub trait ExtraCheck<T: Sync>: Send + Sync {
    type Error: From<ValidationError> + Send;

    async fn check(&self, candidate: &T, result: &mut ValidationResult)
        -> Result<(), Self::Error>;
}

pub struct NoExtraCheck;

#[async_trait]
impl<T: Sync> ExtraCheck<T> for NoExtraCheck {
    type Error = ValidationError;

    async fn check(&self, _: &T, _: &mut ValidationResult) -> Result<(), ValidationError> {
        Ok(())
    }
}

pub fn validate<T: Constrained>(candidate: &T) -> ValidationResult {
    let mut result = ValidationResult::new();
    for rule in T::rules() {
        if !(rule.check)(candidate) {
            result.reject_field(rule.field, rule.message);
        }
    }
    result
}

pub async fn validate_async<T, C>(candidate: T, extra: &C) -> Result<T, C::Error>
where
    T: Constrained + Send + Sync,
    C: ExtraCheck<T> + ?Sized,
{
    let mut result = validate(&candidate);
    extra.check(&candidate, &mut result).await?;
    result.into_result(candidate).map_err(Into::into)
}
