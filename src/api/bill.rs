use actix_web::{HttpResponse, get, post, put, web};

use crate::application::LedgerService;

use super::model::{
    AmountQuery, BillAmountRequest, PercentageAssignments, RestResult, error_response,
};

#[put("/amount")]
pub async fn set_bill_amount(
    service: web::Data<LedgerService>,
    body: web::Json<BillAmountRequest>,
) -> HttpResponse {
    match service.set_bill_amount(body.amount).await {
        Ok(()) => HttpResponse::Ok().json(RestResult::success(())),
        Err(err) => error_response(&err),
    }
}

#[post("/amount/reset")]
pub async fn reset_bill_amount(service: web::Data<LedgerService>) -> HttpResponse {
    service.reset_bill_amount().await;
    HttpResponse::Ok().json(RestResult::success(()))
}

#[put("/percentages")]
pub async fn update_percentages(
    service: web::Data<LedgerService>,
    body: web::Json<PercentageAssignments>,
) -> HttpResponse {
    match service.update_percentages(&body).await {
        Ok(()) => HttpResponse::Ok().json(RestResult::success(())),
        Err(err) => error_response(&err),
    }
}

#[post("/percentages/reset")]
pub async fn reset_percentages(service: web::Data<LedgerService>) -> HttpResponse {
    service.reset_percentages().await;
    HttpResponse::Ok().json(RestResult::success(()))
}

#[get("/amounts")]
pub async fn calculate_amounts(
    service: web::Data<LedgerService>,
    query: web::Query<AmountQuery>,
) -> HttpResponse {
    let people = service.calculate_amounts(query.amount).await;
    HttpResponse::Ok().json(RestResult::success(people))
}

#[get("/split")]
pub async fn get_bill_split(service: web::Data<LedgerService>) -> HttpResponse {
    let info = service.get_bill_split().await;
    HttpResponse::Ok().json(RestResult::success(info))
}
