// src/domain/mod.rs
pub mod account;
pub mod activity;
pub mod errors;
pub mod lead;
pub mod pagination;

pub use errors::{DomainError, DomainResult, FieldErrors};
