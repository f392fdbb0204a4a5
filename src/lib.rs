//! Collection Quiz - range filters, family statistics and letter frequency
//!

pub mod analysis;
pub mod cli;
pub mod config;
pub mod errors;
pub mod types;
pub mod utils;
