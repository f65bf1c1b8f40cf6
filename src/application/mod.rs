mod config;
mod draft;
mod error;
mod service;

pub use config::*;
pub use draft::*;
pub use error::*;
pub use service::*;
