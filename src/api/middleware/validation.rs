use validator::{Validate, ValidationErrors};

use crate::api::errors::ApiError;

/// Validate request parameters, turning field errors into a 400 response
pub fn validate_query<T>(payload: &T) -> Result<(), ApiError>
where
    T: Validate,
{
    payload
        .validate()
        .map_err(|errors| ApiError::bad_request(describe(&errors)))
}

fn describe(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|cow| cow.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field))
            })
        })
        .collect();
    // HashMap iteration order is unstable
    messages.sort();

    if messages.is_empty() {
        "Validation failed".to_string()
    } else {
        messages.join("; ")
    }
}
