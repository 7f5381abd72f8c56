mod get_by_id;
mod list;
mod service;

pub use list::ListLeadsQuery;
pub use service::LeadQueryService;
