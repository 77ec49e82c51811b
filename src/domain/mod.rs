pub mod account;
pub mod ports;
pub mod user;
