pub mod activity;
pub mod leads;
