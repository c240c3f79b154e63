//! Declare an HTTP endpoint once and get both its Axum route and its
//! Swagger 2.0 documentation.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
