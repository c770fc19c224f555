mod budget_config;
mod error;
mod id_source;
pub mod models;
pub mod services;
mod store;

pub use budget_config::*;
pub use error::*;
pub use id_source::*;
pub use store::*;
