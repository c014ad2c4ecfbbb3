pub mod map;
pub mod models;
pub mod types;
pub mod utils;
