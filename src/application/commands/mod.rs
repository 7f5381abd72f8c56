pub mod audit_trail;
pub mod auth;
pub mod leads;

pub use audit_trail::{AuditStatus, AuditTrail, Audited};
