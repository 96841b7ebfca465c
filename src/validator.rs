use anyhow::anyhow;
use validator::{Validate, ValidationErrors};

fn format_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().filter_map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .or_else(|| Some(format!("{} is invalid", field)))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Runs the DTO's validation rules, joining every message into one error.
pub fn validate_request<T: Validate>(request: &T) -> anyhow::Result<()> {
    request
        .validate()
        .map_err(|errors| anyhow!("{}", format_errors(&errors)))
}
