// crates/fibonrose-cli/src/commands/mod.rs
//
// Command module declarations for the FibonroseTrust CLI.

pub mod complexity;
pub mod describe;
pub mod fibonacci;
pub mod level;
pub mod levels;
pub mod score;
pub mod sequence;
pub mod validate;
