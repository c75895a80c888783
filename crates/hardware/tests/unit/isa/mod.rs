//! Instruction set tests.

/// Property tests over the full 16-bit encoding space.
pub mod decode_properties;
