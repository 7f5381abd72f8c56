// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod accounts;
pub mod activity;
pub mod leads;
pub mod security;
pub mod time;

pub use accounts::InMemoryAccountRepo;
pub use activity::{FailingActivityLogRepo, InMemoryActivityLogRepo};
pub use leads::{GatedLeadRepo, InMemoryLeadRepo};
pub use security::{FailingRevocationStore, FakeTokenManager, StrictPasswordHasher};
pub use time::{FixedClock, fixed_now};
