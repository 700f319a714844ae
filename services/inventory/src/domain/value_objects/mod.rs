mod beer_name;
mod ids;

pub use beer_name::*;
pub use ids::*;
