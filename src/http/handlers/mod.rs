pub mod account;
pub mod platform;
pub mod review;
pub mod title;
