// src/api/handlers/pages.rs
use actix_web::http::header::ContentType;
use actix_web::{web, HttpRequest, HttpResponse};
use std::collections::HashMap;

use crate::api::AppState;
use crate::query::QueryKind;
use crate::render;
use crate::runner;
use crate::view::ViewModel;

/// Every page is a 200; failures are rendered inline.
fn html(view: &ViewModel) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render::page(view))
}

pub async fn home() -> HttpResponse {
    html(&ViewModel::home())
}

pub async fn query_form(kind: QueryKind) -> HttpResponse {
    html(&ViewModel::form(kind))
}

/// A query string that fails to parse is treated as carrying no parameters,
/// so the request still gets the form back instead of a 400.
pub async fn run_query(kind: QueryKind, state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    let params = web::Query::<HashMap<String, String>>::from_query(req.query_string())
        .map(web::Query::into_inner)
        .unwrap_or_default();
    let view = runner::run_query(state.gateway.as_ref(), kind, &params).await;
    html(&view)
}
