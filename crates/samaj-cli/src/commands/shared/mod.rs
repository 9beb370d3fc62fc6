pub mod deleted;
pub mod limit;
pub mod parse;
pub mod payload;
