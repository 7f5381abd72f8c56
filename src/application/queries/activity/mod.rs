mod list;
mod service;

pub use list::ListActivityLogsQuery;
pub use service::ActivityLogQueryService;
