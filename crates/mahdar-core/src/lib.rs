//! Mahdar Core — shared error type, endpoint configuration, language selection.

pub mod config;
pub mod error;

pub use config::{EndpointConfig, Language};
pub use error::{Error, Result};
