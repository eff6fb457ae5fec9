// HTTP facade - translates requests into LedgerService calls and wraps
// every outcome in the RestResult envelope. No business logic lives here.

mod bill;
mod model;
mod people;

pub use model::*;

use actix_web::{Scope, web};

/// Assemble the full API surface under `/api/v1`.
pub fn routes() -> Scope {
    web::scope("/api/v1")
        .service(people::routers())
        .service(bill::set_bill_amount)
        .service(bill::reset_bill_amount)
        .service(bill::update_percentages)
        .service(bill::reset_percentages)
        .service(bill::calculate_amounts)
        .service(bill::get_bill_split)
}
