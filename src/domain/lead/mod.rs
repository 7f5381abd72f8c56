// src/domain/lead/mod.rs
pub mod entity;
pub mod filter;
pub mod repository;
pub mod snapshot;
pub mod value_objects;

pub use entity::{Lead, LeadFields, LeadInput, LeadPatch, NewLead};
pub use filter::{LeadListFilter, LeadSortColumn};
pub use repository::LeadRepository;
pub use snapshot::{LEAD_SNAPSHOT_VERSION, LeadSnapshot};
pub use value_objects::{InstitutionName, LeadEmail, LeadId, LeadName, WhatsappNumber};
