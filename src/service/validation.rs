//! Request validation for catalog payloads.

use crate::error::AppError;
use crate::model::{CreatePokemon, Pagination, UpdatePokemon};

pub struct RequestValidator;

impl RequestValidator {
    /// All fields are required on create.
    pub fn validate_create(body: &CreatePokemon) -> Result<(), AppError> {
        validate_no(body.no)?;
        validate_name(&body.name)
    }

    /// Validate only the fields present (for PATCH).
    pub fn validate_update(body: &UpdatePokemon) -> Result<(), AppError> {
        if let Some(no) = body.no {
            validate_no(no)?;
        }
        if let Some(name) = &body.name {
            validate_name(name)?;
        }
        Ok(())
    }

    pub fn validate_pagination(params: &Pagination) -> Result<(), AppError> {
        if params.limit == Some(0) {
            return Err(AppError::Validation("limit must be at least 1".into()));
        }
        Ok(())
    }
}

fn validate_no(no: i64) -> Result<(), AppError> {
    if no < 1 {
        return Err(AppError::Validation(format!("no must be at least 1, got {}", no)));
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.is_empty() {
        return Err(AppError::Validation("name must not be empty".into()));
    }
    Ok(())
}
