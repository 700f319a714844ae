mod beer_queries;

pub use beer_queries::*;
