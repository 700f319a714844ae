mod beer_commands;

pub use beer_commands::*;
