pub mod types;
pub mod resolver;
