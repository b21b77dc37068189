pub mod account;
pub mod catalog;
pub mod homepage;
pub mod quiz;
