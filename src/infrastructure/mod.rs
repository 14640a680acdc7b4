pub mod backends;
pub mod config;
pub mod output;
