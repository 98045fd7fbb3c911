//! Tree model, leveled-list parsing and the decoration seam.

pub mod decorate;
pub mod parser;
pub mod types;
