pub mod check;
pub mod clean;
