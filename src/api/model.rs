use actix_web::{HttpResponse, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::application::AppError;
use crate::domain::PersonId;

pub const SUCCESS_CODE: i32 = 0;
pub const INVALID_INPUT_CODE: i32 = 40000;
pub const NOT_FOUND_CODE: i32 = 40400;
pub const ALLOCATION_EXCEEDED_CODE: i32 = 40900;

/// Uniform response envelope for the HTTP API.
#[derive(Debug, Serialize, Deserialize)]
pub struct RestResult<T> {
    pub code: i32,
    pub message: String,
    pub data: T,
}

impl<T> RestResult<T> {
    pub fn success(data: T) -> RestResult<T> {
        RestResult::<T> {
            code: SUCCESS_CODE,
            message: "success".to_string(),
            data,
        }
    }
}

/// Map an application error onto an HTTP status and envelope code; the
/// envelope message carries the error's display text verbatim.
pub fn error_response(err: &AppError) -> HttpResponse {
    let (status, code) = match err {
        AppError::InvalidName | AppError::InvalidAmount(_) | AppError::InvalidPercentage(_) => {
            (StatusCode::BAD_REQUEST, INVALID_INPUT_CODE)
        }
        AppError::PersonNotFound(_) => (StatusCode::NOT_FOUND, NOT_FOUND_CODE),
        AppError::AllocationExceeded { .. } => (StatusCode::CONFLICT, ALLOCATION_EXCEEDED_CODE),
    };

    HttpResponse::build(status).json(RestResult::<()> {
        code,
        message: err.to_string(),
        data: (),
    })
}

#[derive(Debug, Deserialize)]
pub struct AddPersonRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct BillAmountRequest {
    pub amount: f64,
}

#[derive(Debug, Deserialize)]
pub struct PercentageRequest {
    pub percentage: f64,
}

/// Batch share assignments on the wire: `[[id, percentage], ...]`.
pub type PercentageAssignments = Vec<(PersonId, f64)>;

#[derive(Debug, Deserialize)]
pub struct AmountQuery {
    pub amount: f64,
}
