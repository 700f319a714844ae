mod beer_repository;

pub use beer_repository::*;
