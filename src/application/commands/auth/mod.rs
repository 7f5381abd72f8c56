mod login;
mod logout;
mod me;
mod refresh;
mod resolve;
mod service;

pub use login::LoginCommand;
pub use refresh::RefreshTokenCommand;
pub use service::AuthService;
