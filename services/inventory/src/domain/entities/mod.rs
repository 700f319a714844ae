mod beer;

pub use beer::*;
