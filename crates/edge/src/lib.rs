pub mod cli;
pub mod error;
pub mod router;
pub mod store;

pub use error::EdgeError;
