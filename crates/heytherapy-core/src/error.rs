use thiserror::Error;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid check-in: {}", join_errors(.errors))]
    InvalidCheckIn { errors: Vec<ValidationError> },
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
