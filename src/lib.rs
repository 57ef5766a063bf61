//! Command-line matching of text lines against wildcard patterns.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod settings;
