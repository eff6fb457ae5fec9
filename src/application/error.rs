use thiserror::Error;

use crate::domain::PersonId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Person name cannot be empty")]
    InvalidName,

    #[error("Person not found: {0}")]
    PersonNotFound(PersonId),

    #[error("Invalid bill amount: {0} (must be a non-negative number)")]
    InvalidAmount(f64),

    #[error("Invalid percentage: {0} (must be between 0 and 100)")]
    InvalidPercentage(f64),

    #[error("Allocation exceeded: requested {requested}%, only {available}% available")]
    AllocationExceeded { requested: f64, available: f64 },
}
