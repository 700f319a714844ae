pub mod commands;
pub mod queries;

mod handler;

pub use handler::*;
