//! FFI (Foreign Function Interface) module
//!
//! PyO3 bindings for exposing the samplers and the universe to Python.
//!
//! # Design Principles
//!
//! 1. **Minimal boundary**: Only expose what's needed
//! 2. **Explicit RNG context**: Python passes an `Rng`; each call acquires
//!    exactly one scope on it
//! 3. **Validate inputs**: Counts are coerced and checked before any draw
//! 4. **Safe errors**: `InvalidArgument` → `ValueError`,
//!    `InvalidHandle` → `RuntimeError`
//! 5. **No references**: Python gets copies, never references to Rust state

pub mod rng;
pub mod sampling;
pub mod types;
pub mod universe;
