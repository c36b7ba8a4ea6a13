pub mod config;
pub mod symbols;
