pub mod add;
pub mod backup;
pub mod calculator;
pub mod check;
pub mod config;
pub mod del;
pub mod import;
pub mod log;
pub mod logic;
pub mod policy;
pub mod tracker;
pub mod validate;
