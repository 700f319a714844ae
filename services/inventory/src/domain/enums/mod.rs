mod beer_style;

pub use beer_style::*;
