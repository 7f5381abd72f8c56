// src/infrastructure/security/mod.rs
pub mod claims;
pub mod password;
pub mod redis_revocation_store;
pub mod revocation_store;
pub mod token;
