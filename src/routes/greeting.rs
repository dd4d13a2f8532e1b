//! src/routes/greeting.rs
use crate::domain::{Greeting, ServerInfo};
use actix_web::HttpResponse;
use chrono::Utc;

#[tracing::instrument(name = "GET /")]
pub async fn greeting() -> HttpResponse {
    let greeting = Greeting::new(Utc::now(), ServerInfo::current());
    tracing::debug!(hostname = %greeting.server_info.hostname, "Greeting built");

    HttpResponse::Ok().json(greeting)
}
