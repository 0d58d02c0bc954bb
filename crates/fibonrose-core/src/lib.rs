// crates/fibonrose-core/src/lib.rs
//
// fibonrose-core: Core types, errors, and the Fibonacci sequence generator
// for FibonroseTrust.
//
// This is the leaf crate that the rest of the workspace depends on. It defines
// the value types shared by the scoring, metrics, and CLI crates. Nothing in
// here holds state: every type is a plain value and every function is pure.

pub mod error;
pub mod inputs;
pub mod level;
pub mod sequence;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use fibonrose_core::TrustLevel;`

// Error type
pub use error::FibonroseError;

// Sequence types
pub use sequence::{generate_fibonacci_sequence, FibonacciSequence};

// Level types
pub use level::{get_trust_level_description, TrustLevel, MAX_TRUST_LEVEL, UNKNOWN_LEVEL_LABEL};

// Scoring input types
pub use inputs::TrustScoreInputs;
