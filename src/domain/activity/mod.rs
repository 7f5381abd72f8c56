// src/domain/activity/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{
    ActivityAction, ActivityLog, ActivityLogEntry, ActivityLogFilter, ActorSummary, LeadSummary,
    NewActivityLog,
};
pub use repository::ActivityLogRepository;
