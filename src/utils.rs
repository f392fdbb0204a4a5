//! Shared helpers used across the analysis module

pub mod math;
