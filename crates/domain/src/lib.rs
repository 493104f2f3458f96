pub mod block;
pub mod config;
pub mod content;
pub mod doc;
pub mod preview;
pub mod schema;
