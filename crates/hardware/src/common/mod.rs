//! Common utilities and types used throughout the simulator.
//!
//! This module provides fundamental building blocks shared across all
//! components. It includes:
//! 1. **Constants:** Register count and data memory size.
//! 2. **Error Handling:** The setup-time error taxonomy.
//! 3. **Register Management:** The 8-entry architectural register file.

/// Setup error definitions.
pub mod error;

/// Architectural register file.
pub mod reg;

pub use error::SetupError;
pub use reg::{RegFile, DATA_WORDS, REG_COUNT};
