//! parscale library: application logic for the scaling analysis CLI.

pub mod app;
pub mod config;
pub mod errors;
