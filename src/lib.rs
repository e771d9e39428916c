// src/lib.rs
pub mod api;
pub mod banner;
pub mod config;
pub mod errors;
pub mod gateway;
pub mod models;
pub mod query;
pub mod render;
pub mod runner;
pub mod view;
