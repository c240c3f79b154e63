// src/presentation/http/mod.rs
pub mod adapter;
pub mod controllers;
pub mod docs;
pub mod endpoint;
pub mod error;
pub mod path;
pub mod registrar;
pub mod routes;
pub mod swagger;
