pub mod generator;
pub mod interfaces;
pub mod models;
pub mod parser;
pub mod utils;

// Re-export the main conversion entry points and types for easier access
pub use interfaces::{config_to_links, convert, links_to_config, ConvertError, Direction};
pub use models::{LinkInfo, Outbound, Protocol};
pub use parser::ParseOptions;
