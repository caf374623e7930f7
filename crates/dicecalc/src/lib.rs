//! dicecalc library: application logic for the dice rounds calculator.

pub mod app;
pub mod config;
pub mod errors;
