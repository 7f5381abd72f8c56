// src/presentation/http/controllers/mod.rs
pub mod activity_logs;
pub mod auth;
pub mod leads;
