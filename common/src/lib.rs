pub mod comment;
pub mod config;
pub mod error;
pub mod year;
