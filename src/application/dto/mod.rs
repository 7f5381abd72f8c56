pub mod accounts;
pub mod activity;
pub mod auth;
pub mod client;
pub mod leads;
pub mod pagination;
pub mod serde_time;

pub use accounts::{AccountProfileDto, AccountSummaryDto};
pub use activity::{ActivityActorDto, ActivityLeadDto, ActivityLogDto};
pub use auth::{
    AuthTokenDto, AuthenticatedAccount, LoginResultDto, TOKEN_TYPE_BEARER, TokenSubject,
    VerifiedToken,
};
pub use client::ClientMeta;
pub use leads::LeadDto;
pub use pagination::PageDto;
