// src/api/handlers/mod.rs
mod health;
mod pages;

pub use health::health_check;
pub use pages::{home, query_form, run_query};
