//! Error types

mod config;
mod submit;
mod transport;

pub use config::*;
pub use submit::*;
pub use transport::*;
