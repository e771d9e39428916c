// src/api/routes.rs
use actix_web::{web, HttpRequest};

use super::handlers;
use super::AppState;
use crate::query::DESCRIPTORS;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::home))
        .route("/health", web::get().to(handlers::health_check));

    for descriptor in &DESCRIPTORS {
        let kind = descriptor.kind;
        cfg.route(
            descriptor.form_route,
            web::get().to(move || handlers::query_form(kind)),
        )
        .route(
            descriptor.route,
            web::get().to(
                move |state: web::Data<AppState>, req: HttpRequest| handlers::run_query(kind, state, req),
            ),
        );
    }
}
