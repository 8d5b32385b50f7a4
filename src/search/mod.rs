pub mod results;
pub mod handle;
