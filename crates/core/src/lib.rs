//! Core domain types for invoicedash
//!
//! This crate contains domain types shared across all other crates.

mod catalog;
mod deploy_mode;
mod env_config;
mod invoice;

pub use catalog::*;
pub use deploy_mode::*;
pub use env_config::*;
pub use invoice::*;
