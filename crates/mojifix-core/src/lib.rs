pub mod clean;
pub mod error;
pub mod manifest;
pub mod rules;
pub mod tally;

pub use crate::clean::clean_text;
pub use crate::tally::Tally;
