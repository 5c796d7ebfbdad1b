pub mod artifacts;
pub mod json;
pub mod table;
