//! src/routes/health_check.rs
use crate::domain::HealthStatus;
use actix_web::HttpResponse;

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthStatus::running())
}
