pub mod config;
pub mod dataset;
pub mod error;
pub mod generate;
pub mod search;

pub use error::GenError;
