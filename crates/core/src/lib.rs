pub mod config;
pub mod error;
pub mod models;

pub use config::{Config, VERSION};
pub use error::{Error, Result};
