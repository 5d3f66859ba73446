//! Domain list sources
//!
//! The raw domain list comes from one of two places: a newline-delimited
//! file, or the Acquia Cloud API v2 environment listing when the process
//! runs inside an Acquia environment.

pub mod acquia;
pub mod file;

pub use acquia::{domains_for_environment, AcquiaClient, CloudMarkers, Environment};
pub use file::read_domain_file;
