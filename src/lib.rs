//! Library entry point for the syft-report CLI.

pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod model;
pub mod progress;
pub mod report;
pub mod scanner;
pub mod utils;
