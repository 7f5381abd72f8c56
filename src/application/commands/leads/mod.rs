mod create;
mod delete;
mod email;
mod service;
mod submit;
mod update;

pub use create::CreateLeadCommand;
pub use delete::DeleteLeadCommand;
pub use submit::SubmitLeadCommand;
pub use service::LeadCommandService;
pub use update::UpdateLeadCommand;
