/*!
# Rust Language Module

This Rust module provides the scanning primitives and the error type
shared by everything that reads BASIC text.

*/

pub type LineNumber = u32;
pub type Column = usize;

#[macro_use]
mod error;
mod line;
mod scan;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use line::Line;
pub use scan::Scanner;

#[cfg(test)]
mod tests;
