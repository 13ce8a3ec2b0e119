pub mod config;
pub mod runner;

pub use config::AuditConfig;
pub use runner::{AuditResult, Runner};
