use actix_web::{HttpResponse, Scope, delete, post, put, web};

use crate::application::LedgerService;
use crate::domain::PersonId;

use super::model::{AddPersonRequest, PercentageRequest, RestResult, error_response};

#[post("")]
pub async fn add_person(
    service: web::Data<LedgerService>,
    body: web::Json<AddPersonRequest>,
) -> HttpResponse {
    match service.add_person(&body.name).await {
        Ok(id) => HttpResponse::Ok().json(RestResult::success(id)),
        Err(err) => error_response(&err),
    }
}

#[delete("/{id}")]
pub async fn remove_person(
    service: web::Data<LedgerService>,
    path: web::Path<PersonId>,
) -> HttpResponse {
    match service.remove_person(path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(RestResult::success(())),
        Err(err) => error_response(&err),
    }
}

#[put("/{id}/percentage")]
pub async fn update_percentage(
    service: web::Data<LedgerService>,
    path: web::Path<PersonId>,
    body: web::Json<PercentageRequest>,
) -> HttpResponse {
    match service
        .update_percentage(path.into_inner(), body.percentage)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(RestResult::success(())),
        Err(err) => error_response(&err),
    }
}

pub fn routers() -> Scope {
    web::scope("/people")
        .service(add_person)
        .service(remove_person)
        .service(update_percentage)
}
