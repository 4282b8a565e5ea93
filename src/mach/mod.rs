/*!
## Rust Machine Module

This Rust module runs BASIC programs straight from their source text.
Each line is scanned again every time it executes; there is no
compiled form. The control stack, variables and the address table of
the current run all live in a [`Runtime`].

*/

pub type Address = usize;

mod address;
mod console;
mod exec;
mod expr;
mod frame;
mod function;
mod listing;
pub mod number;
mod runtime;
mod stack;
mod var;

pub use address::AddressTable;
pub use console::Console;
pub use console::Transcript;
pub use expr::Evaluator;
pub use expr::MAX_NESTING;
pub use frame::Frame;
pub use function::Function;
pub use listing::Listing;
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;
pub use var::Var;

#[cfg(test)]
mod tests;
